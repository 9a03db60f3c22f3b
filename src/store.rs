//! List Store
//!
//! The single state-owning controller. Components dispatch [`Command`]s;
//! the store applies them to the list and gates `Reset` behind the
//! injected confirmation prompt.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::PackingList;
use crate::models::{Command, Item};

/// Message shown by the clear-list confirmation prompt.
const RESET_PROMPT: &str = "Are you sure you want to delete all the items?";

/// Yes/no confirmation surface. The app wires this to `window.confirm`;
/// tests substitute stubs.
pub type ConfirmFn = fn(&str) -> bool;

/// Handle to the list state, provided via context.
#[derive(Clone, Copy)]
pub struct AppStore {
    state: Store<PackingList>,
    confirm: ConfirmFn,
}

impl AppStore {
    pub fn new(confirm: ConfirmFn) -> Self {
        Self {
            state: Store::new(PackingList::default()),
            confirm,
        }
    }

    /// Store wired to the browser's confirm dialog.
    pub fn browser() -> Self {
        Self::new(browser_confirm)
    }

    /// Current items in input order. Reading inside a reactive closure
    /// subscribes to list changes.
    pub fn items(&self) -> Vec<Item> {
        self.state.read().items().to_vec()
    }

    /// Applies `command` to the list. `Reset` goes through only when the
    /// confirmation prompt returns true; every other command applies
    /// unconditionally.
    pub fn dispatch(&self, command: Command) {
        if matches!(command, Command::Reset) && !(self.confirm)(RESET_PROMPT) {
            return;
        }
        log_command(&command);
        self.state.write().apply(command);
    }
}

/// Store accessor for components below [`crate::app::App`].
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// `window.confirm`, declined when the window or the dialog call is
/// unavailable.
fn browser_confirm(message: &str) -> bool {
    web_sys::window()
        .map(|window| window.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn log_command(command: &Command) {
    web_sys::console::log_1(&format!("[STORE] apply {:?}", command).into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_command(_command: &Command) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Stats;

    fn allow(_message: &str) -> bool {
        true
    }

    fn deny(_message: &str) -> bool {
        false
    }

    fn add_socks(store: &AppStore) {
        store.dispatch(Command::AddItem {
            quantity: 2,
            description: "Socks".to_string(),
        });
    }

    #[test]
    fn test_dispatch_applies_commands() {
        // A declining prompt: only Reset consults it.
        let store = AppStore::new(deny);

        add_socks(&store);
        assert_eq!(store.items().len(), 1);

        let id = store.items()[0].id;
        store.dispatch(Command::ToggleItem(id));
        assert!(store.items()[0].packed);

        store.dispatch(Command::DeleteItem(id));
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_reset_declined_keeps_items() {
        let store = AppStore::new(deny);
        add_socks(&store);

        store.dispatch(Command::Reset);

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Socks");
        assert_eq!(items[0].quantity, 2);
        assert!(!items[0].packed);
    }

    #[test]
    fn test_reset_confirmed_clears_items() {
        let store = AppStore::new(allow);
        add_socks(&store);

        store.dispatch(Command::Reset);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_derived_stats_follow_dispatches() {
        // Same derived-view wiring the components use: a Memo over
        // `store.items()` re-evaluates after every dispatch.
        let store = AppStore::new(allow);
        let stats = Memo::new(move |_| Stats::of(&store.items()));
        assert_eq!(stats.get().num_items, 0);

        add_socks(&store);
        assert_eq!(stats.get().num_items, 1);
        assert_eq!(stats.get().num_packed, 0);

        let id = store.items()[0].id;
        store.dispatch(Command::ToggleItem(id));
        assert!(stats.get().all_packed());

        store.dispatch(Command::Reset);
        assert_eq!(stats.get().num_items, 0);
    }
}
