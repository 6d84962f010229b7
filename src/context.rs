//! Application Context
//!
//! Shared state provided via the Leptos Context API: the reload trigger, the
//! active role, and the transient flash-error banner.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::models::Role;

/// How long a flash error stays on screen before auto-clearing
const FLASH_CLEAR_MS: u32 = 3_000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload the active panel's data - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// Active dashboard role - read
    pub current_role: ReadSignal<Role>,
    pub set_current_role: WriteSignal<Role>,
    /// Transient user-visible error - read
    pub flash: ReadSignal<Option<String>>,
    set_flash: WriteSignal<Option<String>>,
    /// Bumped per flash so a stale clear timer never wipes a newer message
    flash_epoch: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        current_role: (ReadSignal<Role>, WriteSignal<Role>),
        flash: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            current_role: current_role.0,
            set_current_role: current_role.1,
            flash: flash.0,
            set_flash: flash.1,
            flash_epoch: StoredValue::new(0),
        }
    }

    /// Trigger a reload of the active panel's data
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Log an error and show it in the flash banner for a few seconds.
    ///
    /// Nothing here is fatal: the banner clears itself and the UI stays
    /// interactive. Re-triggering the failed action is up to the user.
    pub fn flash_error(&self, message: impl Into<String>) {
        let message = message.into();
        web_sys::console::error_1(&message.as_str().into());

        let epoch = self.flash_epoch.try_get_value().unwrap_or(0) + 1;
        self.flash_epoch.try_set_value(epoch);
        self.set_flash.set(Some(message));

        let set_flash = self.set_flash;
        let flash_epoch = self.flash_epoch;
        Timeout::new(FLASH_CLEAR_MS, move || {
            if flash_epoch.try_get_value() == Some(epoch) {
                set_flash.try_set(None);
            }
        })
        .forget();
    }
}

/// Per-view liveness flag for the stale-response guard.
///
/// Created in a component's scope, the flag is disposed with the component's
/// reactive owner; a response landing after teardown sees `is_mounted` false
/// and discards its update instead of touching an unmounted view.
pub fn mount_flag() -> StoredValue<bool> {
    let alive = StoredValue::new(true);
    on_cleanup(move || {
        alive.try_set_value(false);
    });
    alive
}

pub fn is_mounted(alive: StoredValue<bool>) -> bool {
    alive.try_get_value().unwrap_or(false)
}
