//! UI components for the journal TUI.
//!
//! Each component renders from a borrowed view context and holds no
//! application state of its own.

mod entry_list;
mod search_modal;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;

pub use entry_list::{EntryListComponent, EntryListViewContext};
pub use search_modal::{SearchModalComponent, SearchModalViewContext};
