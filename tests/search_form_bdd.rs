//! Behavioural tests for the journal search form controller.

use std::sync::Arc;

use chrono::NaiveDate;
use reflexa::journal::test_support::{bookmarked_entry_on, entry_on};
use reflexa::{
    EmotionCatalog, EmotionId, EntryQuery, FilterCriteria, FilterFormController, JournalIndex,
    PickerState, QueryOptions, RetentionPolicy, SearchListener,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

/// Listener that remembers every signal the form sends.
#[derive(Debug, Default)]
struct RecordingListener {
    searches: Vec<FilterCriteria>,
    closes: usize,
}

impl SearchListener for RecordingListener {
    fn on_search(&mut self, criteria: FilterCriteria) {
        self.searches.push(criteria);
    }

    fn on_close(&mut self) {
        self.closes += 1;
    }
}

#[derive(ScenarioState, Default)]
struct SearchFormState {
    form: Slot<FilterFormController>,
    listener: Slot<RecordingListener>,
}

#[fixture]
fn search_form_state() -> SearchFormState {
    SearchFormState::default()
}

type StepResult = Result<(), Box<dyn std::error::Error>>;

fn unquote(text: &str) -> &str {
    text.trim_matches('"')
}

fn parse_optional_date(text: &str) -> Result<Option<NaiveDate>, Box<dyn std::error::Error>> {
    match unquote(text) {
        "unset" => Ok(None),
        value => Ok(Some(reflexa::journal::parse_date(value)?)),
    }
}

fn with_form<T>(
    state: &SearchFormState,
    f: impl FnOnce(&mut FilterFormController) -> T,
) -> Result<T, Box<dyn std::error::Error>> {
    state
        .form
        .with_mut(f)
        .ok_or_else(|| "search form should be initialised".into())
}

fn last_search(state: &SearchFormState) -> Result<FilterCriteria, Box<dyn std::error::Error>> {
    state
        .listener
        .with_ref(|listener| listener.searches.last().cloned())
        .ok_or("listener should be initialised")?
        .ok_or_else(|| "expected a search to have been emitted".into())
}

fn sample_journal() -> JournalIndex {
    JournalIndex::new(
        vec![
            entry_on("jan", 2024, 1, 5, &["joy"]),
            bookmarked_entry_on("mar", 2024, 3, 10, &["calm", "joy"]),
            entry_on("feb", 2024, 2, 14, &["sad"]),
            bookmarked_entry_on("jun", 2024, 6, 1, &["anxious"]),
        ],
        QueryOptions::default(),
    )
}

#[given("a search form with the built-in emotions")]
fn given_search_form(search_form_state: &SearchFormState) {
    search_form_state.form.set(FilterFormController::new(
        Arc::new(EmotionCatalog::builtin()),
        RetentionPolicy::Retain,
    ));
    search_form_state.listener.set(RecordingListener::default());
}

#[when("the user toggles emotion {emotion}")]
fn when_toggle_emotion(search_form_state: &SearchFormState, emotion: String) -> StepResult {
    let id = EmotionId::from(unquote(&emotion));
    with_form(search_form_state, |form| form.toggle_emotion(&id))
}

#[when("the user sets the start date to {date}")]
fn when_set_start_date(search_form_state: &SearchFormState, date: String) -> StepResult {
    let value = parse_optional_date(&date)?;
    with_form(search_form_state, |form| form.set_start_date(value))
}

#[when("the user sets the end date to {date}")]
fn when_set_end_date(search_form_state: &SearchFormState, date: String) -> StepResult {
    let value = parse_optional_date(&date)?;
    with_form(search_form_state, |form| form.set_end_date(value))
}

#[when("the user enables bookmarked only")]
fn when_enable_bookmarked(search_form_state: &SearchFormState) -> StepResult {
    with_form(search_form_state, |form| form.set_bookmarked(true))
}

#[when("the user opens the start picker")]
fn when_open_start_picker(search_form_state: &SearchFormState) -> StepResult {
    with_form(search_form_state, FilterFormController::open_start_picker)
}

#[when("the user opens the end picker")]
fn when_open_end_picker(search_form_state: &SearchFormState) -> StepResult {
    with_form(search_form_state, FilterFormController::open_end_picker)
}

#[when("the user clears the form")]
fn when_clear(search_form_state: &SearchFormState) -> StepResult {
    with_form(search_form_state, FilterFormController::clear)
}

#[when("the user submits the search")]
fn when_submit(search_form_state: &SearchFormState) -> StepResult {
    with_form(search_form_state, |form| {
        search_form_state
            .listener
            .with_mut(|listener| form.submit(listener))
    })?
    .ok_or_else(|| "listener should be initialised".into())
}

#[when("the user dismisses the form")]
fn when_dismiss(search_form_state: &SearchFormState) -> StepResult {
    with_form(search_form_state, |form| {
        search_form_state
            .listener
            .with_mut(|listener| form.dismiss(listener))
    })?
    .ok_or_else(|| "listener should be initialised".into())
}

#[then("one search is emitted")]
fn then_one_search(search_form_state: &SearchFormState) -> StepResult {
    let count = search_form_state
        .listener
        .with_ref(|listener| listener.searches.len())
        .ok_or("listener should be initialised")?;
    if count != 1 {
        return Err(format!("expected one search, got {count}").into());
    }
    Ok(())
}

#[then("no search is emitted")]
fn then_no_search(search_form_state: &SearchFormState) -> StepResult {
    let count = search_form_state
        .listener
        .with_ref(|listener| listener.searches.len())
        .ok_or("listener should be initialised")?;
    if count != 0 {
        return Err(format!("expected no search, got {count}").into());
    }
    Ok(())
}

#[then("the emitted emotions are {list}")]
fn then_emitted_emotions(search_form_state: &SearchFormState, list: String) -> StepResult {
    let criteria = last_search(search_form_state)?;
    let actual: Vec<&str> = criteria
        .selected_emotions()
        .iter()
        .map(EmotionId::as_str)
        .collect();
    let expected: Vec<&str> = unquote(&list)
        .split(',')
        .filter(|id| !id.is_empty())
        .collect();
    if actual != expected {
        return Err(format!("expected emotions {expected:?}, got {actual:?}").into());
    }
    Ok(())
}

#[then("the emitted start date is {date}")]
fn then_emitted_start(search_form_state: &SearchFormState, date: String) -> StepResult {
    let expected = parse_optional_date(&date)?;
    let actual = last_search(search_form_state)?.start_date();
    if actual != expected {
        return Err(format!("expected start {expected:?}, got {actual:?}").into());
    }
    Ok(())
}

#[then("the emitted end date is {date}")]
fn then_emitted_end(search_form_state: &SearchFormState, date: String) -> StepResult {
    let expected = parse_optional_date(&date)?;
    let actual = last_search(search_form_state)?.end_date();
    if actual != expected {
        return Err(format!("expected end {expected:?}, got {actual:?}").into());
    }
    Ok(())
}

#[then("the emitted search is bookmarked only")]
fn then_emitted_bookmarked(search_form_state: &SearchFormState) -> StepResult {
    if !last_search(search_form_state)?.bookmarked() {
        return Err("expected the bookmark filter to be on".into());
    }
    Ok(())
}

#[then("the form was closed {count} times")]
fn then_closed_times(search_form_state: &SearchFormState, count: usize) -> StepResult {
    let closes = search_form_state
        .listener
        .with_ref(|listener| listener.closes)
        .ok_or("listener should be initialised")?;
    if closes != count {
        return Err(format!("expected {count} close signals, got {closes}").into());
    }
    Ok(())
}

#[then("the sample journal returns {count} entries for the emitted search")]
fn then_sample_journal_count(search_form_state: &SearchFormState, count: usize) -> StepResult {
    let criteria = last_search(search_form_state)?;
    let found = sample_journal().query(&criteria).len();
    if found != count {
        return Err(format!("expected {count} entries, got {found}").into());
    }
    Ok(())
}

#[then("the open picker is {picker}")]
fn then_open_picker(search_form_state: &SearchFormState, picker: String) -> StepResult {
    let expected = match unquote(&picker) {
        "start" => PickerState::StartOpen,
        "end" => PickerState::EndOpen,
        "none" => PickerState::Closed,
        other => return Err(format!("unknown picker '{other}'").into()),
    };
    let actual = with_form(search_form_state, |form| form.picker())?;
    if actual != expected {
        return Err(format!("expected picker {expected:?}, got {actual:?}").into());
    }
    Ok(())
}

#[then("the form is empty")]
fn then_form_empty(search_form_state: &SearchFormState) -> StepResult {
    let criteria = with_form(search_form_state, |form| form.criteria())?;
    if criteria != FilterCriteria::unrestricted() {
        return Err(format!("expected an empty form, got {criteria:?}").into());
    }
    Ok(())
}

#[then("emotion {emotion} is still selected")]
fn then_still_selected(search_form_state: &SearchFormState, emotion: String) -> StepResult {
    let id = EmotionId::from(unquote(&emotion));
    if !with_form(search_form_state, |form| form.is_selected(&id))? {
        return Err(format!("expected '{id}' to remain selected").into());
    }
    Ok(())
}

#[scenario(path = "tests/features/search_form.feature", index = 0)]
fn combined_filters_are_emitted(search_form_state: SearchFormState) {
    let _ = search_form_state;
}

#[scenario(path = "tests/features/search_form.feature", index = 1)]
fn toggling_twice_deselects(search_form_state: SearchFormState) {
    let _ = search_form_state;
}

#[scenario(path = "tests/features/search_form.feature", index = 2)]
fn inverted_range_passes_through(search_form_state: SearchFormState) {
    let _ = search_form_state;
}

#[scenario(path = "tests/features/search_form.feature", index = 3)]
fn one_picker_open_at_a_time(search_form_state: SearchFormState) {
    let _ = search_form_state;
}

#[scenario(path = "tests/features/search_form.feature", index = 4)]
fn clearing_resets_filters(search_form_state: SearchFormState) {
    let _ = search_form_state;
}

#[scenario(path = "tests/features/search_form.feature", index = 5)]
fn dismissing_does_not_search(search_form_state: SearchFormState) {
    let _ = search_form_state;
}
