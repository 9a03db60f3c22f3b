//! New Item Form Component
//!
//! Quantity selector plus free-text description; submits an `AddItem`
//! command and resets itself.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::Command;
use crate::store::use_app_store;

/// Quantities offered by the selector.
const QUANTITIES: std::ops::RangeInclusive<u8> = 1..=20;

/// Form for adding a new item to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (quantity, set_quantity) = signal(1u8);
    let (description, set_description) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(command) = Command::add(quantity.get(), &description.get()) {
            store.dispatch(command);
            set_quantity.set(1);
            set_description.set(String::new());
        }
    };

    view! {
        <form class="add-form" on:submit=add_item>
            <h3>"What do you need for your trip?"</h3>
            <select
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    set_quantity.set(event_target_value(&ev).parse().unwrap_or(1));
                }
            >
                {QUANTITIES
                    .map(|num| view! { <option value=num.to_string()>{num}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || description.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_description.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
