//! Action dispatch: profile lookup plus key injection
//!
//! Without a working injector the dispatcher runs in simulated mode and
//! only logs what it would have pressed. An injector that fails mid-session
//! is dropped and the dispatcher stays simulated from then on.

use crate::keyboard::KeyInjector;
use crate::profile::KeyTable;
use headsurf_core::{Action, ActionSet};
use tracing::{info, warn};

/// Whether key presses actually reach the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    Live,
    Simulated,
}

/// Record of one dispatched action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub action: Action,
    pub key: String,
    pub mode: DispatchMode,
}

/// Sends classified actions to the injection backend
pub struct Dispatcher {
    table: KeyTable,
    injector: Option<Box<dyn KeyInjector>>,
}

impl Dispatcher {
    /// Dispatcher that presses keys through `injector`
    pub fn live(table: KeyTable, injector: Box<dyn KeyInjector>) -> Self {
        Self {
            table,
            injector: Some(injector),
        }
    }

    /// Dispatcher that only logs
    pub fn simulated(table: KeyTable) -> Self {
        Self {
            table,
            injector: None,
        }
    }

    pub fn mode(&self) -> DispatchMode {
        if self.injector.is_some() {
            DispatchMode::Live
        } else {
            DispatchMode::Simulated
        }
    }

    /// Press one key per action, in canonical action order
    pub fn dispatch(&mut self, actions: ActionSet) -> Vec<Dispatched> {
        actions.iter().map(|a| self.dispatch_one(a)).collect()
    }

    fn dispatch_one(&mut self, action: Action) -> Dispatched {
        let key = self.table.key_for(action).to_string();

        if let Some(injector) = self.injector.as_mut() {
            match injector.press(&key) {
                Ok(()) => {
                    info!("-> key {} ({})", key, action);
                    return Dispatched {
                        action,
                        key,
                        mode: DispatchMode::Live,
                    };
                }
                Err(e) => {
                    warn!("{e}; switching to simulated mode for the rest of the session");
                    self.injector = None;
                }
            }
        }

        info!("[simulated] {} -> key {}", action, key);
        Dispatched {
            action,
            key,
            mode: DispatchMode::Simulated,
        }
    }
}
