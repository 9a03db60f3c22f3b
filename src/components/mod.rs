//! UI Components
//!
//! The packing-list component tree.

mod header;
mod item_list;
mod item_row;
mod new_item_form;
mod stats_footer;

pub use header::Header;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use stats_footer::StatsFooter;
