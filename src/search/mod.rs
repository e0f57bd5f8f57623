//! Journal search: the filter form, the criteria it produces, and the
//! collaborator that applies them.
//!
//! - [`FilterFormController`] holds the values the user is editing and which
//!   date picker is open.
//! - [`FilterCriteria`] is the immutable value emitted on submit.
//! - [`SearchListener`] receives the submit and close signals.
//! - [`EntryQuery`] / [`JournalIndex`] interpret criteria against entries.

mod controller;
mod criteria;
mod listener;
mod query;

pub use controller::{FilterFormController, PickerState, RetentionPolicy};
pub use criteria::{DateBounds, EmotionMatch, FilterCriteria, InvertedRangePolicy, QueryOptions};
pub use listener::{CallbackListener, SearchListener};
pub use query::{EntryQuery, JournalIndex};
