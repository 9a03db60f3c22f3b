//! Header Component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🌲 Far Away 💼"</h1>
        </header>
    }
}
