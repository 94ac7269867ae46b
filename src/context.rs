//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::components::ModalHandle;
use crate::config::Config;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload history and dashboard from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload history and dashboard from backend - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<Config>,
    pub modal: ModalHandle,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: Config,
        modal: ModalHandle,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
            modal,
        }
    }

    /// Trigger a reload of history and dashboard
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> Config {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
