//! Packing List App
//!
//! Root component: creates the list store, provides it via context, and
//! lays out the component tree.

use leptos::prelude::*;

use crate::components::{Header, ItemList, NewItemForm, StatsFooter};
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    // Single state owner; every child dispatches commands through it.
    let store = AppStore::browser();
    provide_context(store);

    view! {
        <div class="app">
            <Header />
            <NewItemForm />
            <ItemList />
            <StatsFooter />
        </div>
    }
}
