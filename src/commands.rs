// Command handlers

use anyhow::{bail, Context, Result};
use headsurf::control::{NoControls, TerminalControls};
use headsurf::dispatcher::Dispatcher;
use headsurf::keyboard::VirtualKeyboard;
use headsurf::runner::{RunOptions, Runner};
use headsurf::source::{self, JsonLinesSource};
use headsurf::HeadsurfConfig;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::RunArgs;

/// Set up a Ctrl-C handler that sets the given flag to false when triggered.
/// Returns the Arc<AtomicBool> for use in the main loop.
pub fn setup_interrupt_handler() -> Arc<AtomicBool> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = Arc::clone(&running);

    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .ok();

    running
}

/// Run the controller loop
pub fn run(config_path: &Path, args: RunArgs) -> Result<()> {
    info!("Loading config from {:?}", config_path);
    let mut config = HeadsurfConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    if let Some(profile) = args.profile {
        config.profile = profile;
    }
    config.mirror |= args.mirror;
    config.validate()?;

    let table = config.active_table()?;
    let session = config.session()?;
    info!(
        "Profile {}: jump={} slide={} left={} right={}",
        config.profile, table.jump, table.slide, table.left, table.right
    );

    let dispatcher = if args.simulate {
        info!("Simulation mode: key presses are only logged");
        Dispatcher::simulated(table)
    } else {
        match VirtualKeyboard::new(&config.device_name) {
            Ok(mut keyboard) => {
                info!("Created virtual keyboard: {}", config.device_name);
                if let Some(path) = keyboard.device_path() {
                    info!("Device path: {}", path.display());
                }
                Dispatcher::live(table, Box::new(keyboard))
            }
            Err(e) => {
                warn!("{e}; key presses will only be logged");
                Dispatcher::simulated(table)
            }
        }
    };

    let reader = source::open_input(args.input.as_deref()).with_context(|| {
        format!(
            "Failed to open input {}",
            args.input
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        )
    })?;
    let mut source = JsonLinesSource::new(reader)
        .with_mirror(config.mirror)
        .with_min_confidence(config.min_confidence);

    let options = RunOptions {
        poll_timeout: Duration::from_millis(config.control_poll_ms),
        auto_calibrate: args.auto_calibrate,
    };
    let mut runner = Runner::new(session, dispatcher, options);
    let running = setup_interrupt_handler();

    let summary = if args.headless {
        info!("Running headless. Press Ctrl+C to exit.");
        runner.run(&mut source, &mut NoControls, &running)
    } else {
        let mut controls = TerminalControls::new()?;
        info!("Controls: c=calibrate  r=reset  +/-=sensitivity  q/Esc=quit");
        info!(
            "Sensitivity multiplier: {:.1}. Waiting for calibration (press 'c')...",
            runner.session().sensitivity().value()
        );
        runner.run(&mut source, &mut controls, &running)
    };

    info!(
        "Done: {} frames ({} without detection, {} skipped), {} actions",
        summary.frames, summary.undetected, summary.skipped, summary.actions
    );
    Ok(())
}

/// Print every profile, marking the active one
pub fn profiles(config_path: &Path) -> Result<()> {
    let config = HeadsurfConfig::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let registry = config.registry()?;

    for (name, table) in registry.iter() {
        let marker = if name == config.profile { "*" } else { " " };
        println!(
            "{marker} {name:<12} jump={:<6} slide={:<6} left={:<6} right={}",
            table.jump, table.slide, table.left, table.right
        );
    }
    Ok(())
}

/// Write the default config
pub fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }
    HeadsurfConfig::default().save(config_path)?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}
