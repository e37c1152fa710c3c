//! tracing subscriber setup
//!
//! Logs go to stderr. While the terminal is in raw mode, line feeds no
//! longer return the carriage, so the writer emits `\r\n` instead.

use std::io::{self, Write};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides `level`.
pub fn init(level: &str, raw_terminal: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = if raw_terminal {
        BoxMakeWriter::new(|| CrlfWriter(io::stderr()))
    } else {
        BoxMakeWriter::new(io::stderr)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .init();
}

/// Rewrites `\n` as `\r\n`
pub struct CrlfWriter<W>(pub W);

impl<W: Write> Write for CrlfWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut parts = buf.split(|&b| b == b'\n').peekable();
        while let Some(part) = parts.next() {
            self.0.write_all(part)?;
            if parts.peek().is_some() {
                self.0.write_all(b"\r\n")?;
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
