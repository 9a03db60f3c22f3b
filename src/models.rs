//! Packing List Models
//!
//! Data structures for checklist items and the commands that change them.

/// Opaque identity of a checklist item, stable for the item's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    pub(crate) fn new(raw: u64) -> Self {
        ItemId(raw)
    }
}

/// One checklist entry
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// How many to pack, 1..=20 (the selector's closed range)
    pub quantity: u8,
    /// Free text; the form refuses empty submissions
    pub description: String,
    /// Starts false, flipped by the row checkbox
    pub packed: bool,
}

impl Item {
    /// Row label, e.g. "2 Socks".
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.description)
    }
}

/// Sort order selected in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Insertion order, exactly as stored
    Input,
    /// Alphabetical by description, case-insensitive
    Description,
    /// Unpacked items first
    #[default]
    Packed,
}

impl SortBy {
    /// Selector options in display order.
    pub const ALL: [SortBy; 3] = [SortBy::Input, SortBy::Description, SortBy::Packed];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Input => "input",
            SortBy::Description => "description",
            SortBy::Packed => "packed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Input => "Sort by input order",
            SortBy::Description => "Sort by description",
            SortBy::Packed => "Sort by packed status",
        }
    }

    /// Unrecognized values fall back to input order.
    pub fn from_str(s: &str) -> Self {
        match s {
            "description" => SortBy::Description,
            "packed" => SortBy::Packed,
            _ => SortBy::Input,
        }
    }
}

/// Commands dispatched to the list store.
///
/// Every command is total: deleting or toggling an id that is not in the
/// list is a silent no-op.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new, unpacked item at the end of the list
    AddItem { quantity: u8, description: String },
    /// Remove the item with this id, if present
    DeleteItem(ItemId),
    /// Flip `packed` on the item with this id, if present
    ToggleItem(ItemId),
    /// Empty the whole list
    Reset,
}

impl Command {
    /// `AddItem` from the form fields; empty text yields `None`. The
    /// check is empty-string only, the text is never trimmed.
    pub fn add(quantity: u8, description: &str) -> Option<Command> {
        if description.is_empty() {
            return None;
        }
        Some(Command::AddItem {
            quantity,
            description: description.to_string(),
        })
    }
}
