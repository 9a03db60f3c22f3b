//! List State and Derived Views
//!
//! Pure transitions over the packing list plus the sorted and aggregate
//! views the components render. Nothing here touches the DOM.

use std::cmp::Ordering;

use crate::models::{Command, Item, ItemId, SortBy};

/// The authoritative list of items.
///
/// Insertion order is the canonical input order. Items enter through
/// `AddItem` and only leave through `DeleteItem` or `Reset`; the one field
/// that mutates in place is `packed`.
#[derive(Clone, Debug, Default)]
pub struct PackingList {
    items: Vec<Item>,
    /// Last id handed out; ids are never reused.
    last_id: u64,
}

impl PackingList {
    /// Items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Applies one command.
    ///
    /// Total for every input: absent ids are silent no-ops and `Reset`
    /// always empties the list. Confirmation gating happens in the store,
    /// not here.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddItem {
                quantity,
                description,
            } => {
                let id = self.fresh_id();
                self.items.push(Item {
                    id,
                    quantity,
                    description,
                    packed: false,
                });
            }
            Command::DeleteItem(id) => {
                self.items.retain(|item| item.id != id);
            }
            Command::ToggleItem(id) => {
                if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.packed = !item.packed;
                }
            }
            Command::Reset => self.items.clear(),
        }
    }

    fn fresh_id(&mut self) -> ItemId {
        self.last_id += 1;
        ItemId::new(self.last_id)
    }
}

/// Returns a sorted copy of `items`; the stored list is never reordered.
///
/// All three orders are stable, so ties keep their input order.
pub fn sort_items(items: &[Item], sort_by: SortBy) -> Vec<Item> {
    let mut sorted = items.to_vec();
    match sort_by {
        SortBy::Input => {}
        SortBy::Description => {
            sorted.sort_by(|a, b| compare_descriptions(&a.description, &b.description));
        }
        SortBy::Packed => sorted.sort_by_key(|item| item.packed),
    }
    sorted
}

/// Case-insensitive lexicographic order on the lowercased descriptions.
fn compare_descriptions(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Aggregate view of the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub num_items: usize,
    pub num_packed: usize,
    /// Rounded share of packed items, 0..=100
    pub percentage: u8,
}

impl Stats {
    /// Derives the counts from `items`. An empty slice yields 0% rather
    /// than dividing by zero, even though callers branch on the empty
    /// case first.
    pub fn of(items: &[Item]) -> Stats {
        let num_items = items.len();
        let num_packed = items.iter().filter(|item| item.packed).count();
        let percentage = if num_items == 0 {
            0
        } else {
            ((num_packed as f64 / num_items as f64) * 100.0).round() as u8
        };
        Stats {
            num_items,
            num_packed,
            percentage,
        }
    }

    /// True when the packed share rounds to 100% (the ready-to-go branch).
    pub fn all_packed(&self) -> bool {
        self.percentage == 100
    }
}
