//! Stats Footer Component
//!
//! Summary line derived from the current items: item count, packed count
//! and percentage, or the all-packed message.

use leptos::prelude::*;

use crate::list::Stats;
use crate::store::use_app_store;

/// Footer summary of packing progress
#[component]
pub fn StatsFooter() -> impl IntoView {
    let store = use_app_store();

    let stats = Memo::new(move |_| Stats::of(&store.items()));

    let message = move || {
        let stats = stats.get();
        if stats.all_packed() {
            "You got everything! Ready to go ✈".to_string()
        } else {
            format!(
                "You have {} items on your list, and you already packed {} ({}%)",
                stats.num_items, stats.num_packed, stats.percentage
            )
        }
    };

    view! {
        <Show
            when=move || { stats.get().num_items > 0 }
            fallback=|| {
                view! {
                    <p class="stats">
                        <em>"Start adding some items to your list ✈"</em>
                    </p>
                }
            }
        >
            <footer class="stats">
                <em>{message}</em>
            </footer>
        </Show>
    }
}
