//! Reflexa library crate: journal search by emotion, date range, and
//! bookmark state.
//!
//! The heart of the crate is [`FilterFormController`], the state machine
//! behind the search form. It emits [`FilterCriteria`] to a
//! [`SearchListener`], and [`JournalIndex`] applies those criteria to the
//! loaded journal. The [`tui`] module renders both as a terminal app.

pub mod config;
pub mod error;
pub mod journal;
pub mod search;
pub mod telemetry;
pub mod tui;

pub use config::{OperationMode, ReflexaConfig};
pub use error::ReflexaError;
pub use journal::{
    EmotionCatalog, EmotionId, EmotionTag, JournalEntry, JournalError, load_catalog, load_entries,
};
pub use search::{
    CallbackListener, EmotionMatch, EntryQuery, FilterCriteria, FilterFormController,
    InvertedRangePolicy, JournalIndex, PickerState, QueryOptions, RetentionPolicy,
    SearchListener,
};
