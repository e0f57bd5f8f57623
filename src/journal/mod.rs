//! Journal entries, the emotion catalog, and journal file loading.

mod emotion;
mod entry;
mod error;
mod loader;

pub use emotion::{EmotionCatalog, EmotionId, EmotionTag};
#[cfg(any(test, feature = "test-support"))]
pub use entry::test_support;
pub use entry::{JournalEntry, parse_date};
pub use error::JournalError;
pub use loader::{load_catalog, load_entries};
