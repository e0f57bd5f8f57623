//! One-shot search mode.
//!
//! The configured filters are fed through [`FilterFormController`] exactly as
//! the search form would apply them, so both modes share one submission
//! path.

use std::io::{self, Write};
use std::sync::Arc;

use reflexa::{
    CallbackListener, EmotionCatalog, EntryQuery, FilterCriteria, FilterFormController,
    ReflexaConfig, ReflexaError,
};

use super::output::write_search_results;

/// Runs a search from configuration and prints the matches.
///
/// # Errors
///
/// Returns an error if:
/// - The journal path is missing or a journal file cannot be loaded
/// - `--from` or `--to` is not a `YYYY-MM-DD` date
/// - Writing to stdout fails
pub fn run(config: &ReflexaConfig) -> Result<(), ReflexaError> {
    let mut stdout = io::stdout().lock();
    run_to(config, &mut stdout)
}

/// Runs a search from configuration, writing the matches to `writer`.
///
/// # Errors
///
/// As for [`run`].
pub fn run_to<W: Write>(config: &ReflexaConfig, writer: &mut W) -> Result<(), ReflexaError> {
    let session = super::load_session(config)?;
    let criteria = criteria_from_config(config, Arc::clone(&session.catalog))?;
    let matches = session.index.query(&criteria);

    write_search_results(
        writer,
        &criteria,
        &matches,
        session.index.len(),
        &session.catalog,
    )
}

/// Builds criteria by driving a filter form with the configured values.
///
/// # Errors
///
/// Returns [`ReflexaError::Configuration`] when a date does not parse.
pub fn criteria_from_config(
    config: &ReflexaConfig,
    catalog: Arc<EmotionCatalog>,
) -> Result<FilterCriteria, ReflexaError> {
    let mut form = FilterFormController::new(catalog, config.retention_policy());

    for id in config.emotion_ids() {
        if form.is_selected(&id) {
            continue;
        }
        if !form.catalog().contains(&id) {
            tracing::warn!(emotion = %id, "searching for an emotion missing from the catalog");
        }
        form.toggle_emotion(&id);
    }
    form.set_start_date(config.start_date()?);
    form.set_end_date(config.end_date()?);
    form.set_bookmarked(config.bookmarked);

    let mut submitted = None;
    let mut listener = CallbackListener::new(
        |criteria| submitted = Some(criteria),
        || tracing::debug!("search form closed"),
    );
    form.submit(&mut listener);

    Ok(submitted.unwrap_or_else(|| form.criteria()))
}
