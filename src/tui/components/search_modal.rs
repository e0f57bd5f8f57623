//! Search modal rendering.
//!
//! The modal is a read-only view of [`FilterFormController`]: it lists the
//! catalog with selection marks, the date range, the bookmark toggle, and,
//! when a picker is open, the date being edited.
//!
//! Only the emotion list scrolls. The date range, the bookmark toggle, and
//! the picker keep their rows at the bottom of the modal.

use chrono::NaiveDate;
use crossterm::style::{Color, Stylize};

use crate::journal::EmotionTag;
use crate::search::{FilterFormController, PickerState};
use crate::tui::state::{DateInput, ListCursor};

/// Placeholder shown for an unset date bound.
const UNSET_DATE: &str = "Select date";

/// Rows above the emotion list: title, spacer, heading.
const HEADER_ROWS: usize = 3;

/// Rows below the emotion list: spacer, heading, bounds, spacer, bookmark.
const FOOTER_ROWS: usize = 5;

/// Context for rendering the search modal.
#[derive(Debug, Clone, Copy)]
pub struct SearchModalViewContext<'a> {
    /// Form state to display.
    pub form: &'a FilterFormController,
    /// Catalog index of the focused emotion.
    pub focused_emotion: usize,
    /// First catalog index shown in the emotion list.
    pub emotion_scroll: usize,
    /// Rows available to the modal.
    pub visible_height: usize,
    /// Text of the open picker, if any.
    pub date_input: Option<&'a DateInput>,
    /// Validation message for the open picker.
    pub picker_error: Option<&'a str>,
}

/// Component rendering the search modal.
#[derive(Debug, Clone, Default)]
pub struct SearchModalComponent;

impl SearchModalComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Rows taken by the picker section: a spacer, the text line, and the
    /// validation message when there is one.
    #[must_use]
    pub const fn picker_rows(picker: PickerState, has_error: bool) -> usize {
        match picker {
            PickerState::Closed => 0,
            PickerState::StartOpen | PickerState::EndOpen if has_error => 3,
            PickerState::StartOpen | PickerState::EndOpen => 2,
        }
    }

    /// Rows left for the emotion list, never fewer than one.
    #[must_use]
    pub const fn emotion_rows(visible_height: usize, picker_rows: usize) -> usize {
        let fixed = HEADER_ROWS + FOOTER_ROWS + picker_rows;
        let rows = visible_height.saturating_sub(fixed);
        if rows == 0 { 1 } else { rows }
    }

    /// Renders the modal body, at most `visible_height` lines.
    #[must_use]
    pub fn view(&self, ctx: &SearchModalViewContext<'_>) -> String {
        let picker = Self::picker_lines(ctx);
        let rows = Self::emotion_rows(ctx.visible_height, picker.len());
        let mut window = ListCursor {
            position: ctx.focused_emotion,
            scroll_offset: ctx.emotion_scroll,
        };
        window.keep_visible(rows);

        let mut lines = vec![
            "=== Search Entries ===".to_owned(),
            String::new(),
            Self::emotions_heading(window.scroll_offset, rows, ctx.form.catalog().len()),
        ];
        lines.extend(Self::emotion_lines(ctx, window.scroll_offset, rows));

        lines.push(String::new());
        lines.push("Date Range".to_owned());
        lines.push(format!(
            "  {} to {}",
            format_date(ctx.form.start_date()),
            format_date(ctx.form.end_date())
        ));
        let mark = if ctx.form.bookmarked() { "x" } else { " " };
        lines.push(String::new());
        lines.push(format!("  [{mark}] Bookmarked Only"));
        lines.extend(picker);

        // Lose the title first so the picker stays on screen.
        let overflow = lines.len().saturating_sub(ctx.visible_height);
        lines.drain(..overflow);

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn emotions_heading(offset: usize, rows: usize, total: usize) -> String {
        if total <= rows {
            return "Emotions".to_owned();
        }
        let last = offset.saturating_add(rows).min(total);
        format!("Emotions ({}-{last} of {total})", offset.saturating_add(1))
    }

    fn emotion_lines(ctx: &SearchModalViewContext<'_>, offset: usize, rows: usize) -> Vec<String> {
        ctx.form
            .catalog()
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .map(|(index, tag)| {
                let cursor = if index == ctx.focused_emotion { ">" } else { " " };
                let selected = ctx.form.is_selected(&tag.id);
                let mark = if selected { "x" } else { " " };
                format!("{cursor} [{mark}] {}", styled_label(tag, selected))
            })
            .collect()
    }

    fn picker_lines(ctx: &SearchModalViewContext<'_>) -> Vec<String> {
        let label = match ctx.form.picker() {
            PickerState::Closed => return Vec::new(),
            PickerState::StartOpen => "Start date",
            PickerState::EndOpen => "End date",
        };
        let text = ctx.date_input.map_or("", DateInput::text);
        let mut lines = vec![String::new(), format!("{label}: {text}_")];
        if let Some(error) = ctx.picker_error {
            lines.push(format!("  {error}"));
        }
        lines
    }
}

/// Draws a selected tag's label in its catalog colour.
fn styled_label(tag: &EmotionTag, selected: bool) -> String {
    match tag.rgb() {
        Some((r, g, b)) if selected => tag.label.as_str().with(Color::Rgb { r, g, b }).to_string(),
        _ => tag.label.clone(),
    }
}

/// Formats a date bound for display, or the unset placeholder.
fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| UNSET_DATE.to_owned(), |d| d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::journal::{EmotionCatalog, EmotionId};
    use crate::search::RetentionPolicy;
    use crate::tui::components::test_utils::strip_ansi_codes;

    #[fixture]
    fn form() -> FilterFormController {
        let catalog = EmotionCatalog::new(vec![
            EmotionTag::new("joy", "Joy", "#f5b82e"),
            EmotionTag::new("calm", "Calm", "#5fb49c"),
        ])
        .expect("catalog is valid");
        FilterFormController::new(Arc::new(catalog), RetentionPolicy::Retain)
    }

    fn long_form(count: usize) -> FilterFormController {
        let tags = (0..count)
            .map(|i| EmotionTag::new(&format!("e{i}"), &format!("E{i}"), "#808080"))
            .collect();
        let catalog = EmotionCatalog::new(tags).expect("catalog is valid");
        FilterFormController::new(Arc::new(catalog), RetentionPolicy::Retain)
    }

    fn context<'a>(
        form: &'a FilterFormController,
        input: Option<&'a DateInput>,
        error: Option<&'a str>,
    ) -> SearchModalViewContext<'a> {
        SearchModalViewContext {
            form,
            focused_emotion: 1,
            emotion_scroll: 0,
            visible_height: 21,
            date_input: input,
            picker_error: error,
        }
    }

    fn render(ctx: &SearchModalViewContext<'_>) -> String {
        strip_ansi_codes(&SearchModalComponent::new().view(ctx))
    }

    #[rstest]
    fn empty_form_shows_placeholders(form: FilterFormController) {
        let output = render(&context(&form, None, None));

        assert!(output.contains("Emotions\n"));
        assert!(output.contains("  [ ] Joy\n"));
        assert!(output.contains("> [ ] Calm\n"));
        assert!(output.contains("  Select date to Select date\n"));
        assert!(output.contains("  [ ] Bookmarked Only\n"));
        assert!(!output.contains("Start date:"));
    }

    #[rstest]
    fn selections_and_dates_are_marked(mut form: FilterFormController) {
        form.toggle_emotion(&EmotionId::from("joy"));
        form.set_start_date(NaiveDate::from_ymd_opt(2024, 1, 1));
        form.set_bookmarked(true);

        let output = render(&context(&form, None, None));

        assert!(output.contains("  [x] Joy\n"));
        assert!(output.contains("  2024-01-01 to Select date\n"));
        assert!(output.contains("  [x] Bookmarked Only\n"));
    }

    #[rstest]
    fn selected_labels_use_their_colour(mut form: FilterFormController) {
        form.toggle_emotion(&EmotionId::from("joy"));

        let output = SearchModalComponent::new().view(&context(&form, None, None));

        assert!(output.contains(&"Joy".with(Color::Rgb { r: 0xf5, g: 0xb8, b: 0x2e }).to_string()));
        assert!(output.contains("> [ ] Calm\n"), "unselected labels stay plain");
    }

    #[rstest]
    fn open_picker_shows_text_and_error(mut form: FilterFormController) {
        form.open_end_picker();
        let input = DateInput::new(NaiveDate::from_ymd_opt(2024, 5, 6).expect("valid date"));

        let output = render(&context(&form, Some(&input), Some("invalid date")));

        assert!(output.contains("End date: 2024-05-06_\n"));
        assert!(output.contains("  invalid date\n"));
    }

    #[test]
    fn long_catalog_scrolls_to_the_focused_emotion() {
        let form = long_form(30);
        let ctx = SearchModalViewContext {
            focused_emotion: 29,
            ..context(&form, None, None)
        };

        let output = render(&ctx);

        assert_eq!(output.lines().count(), 21);
        assert!(output.contains("> [ ] E29\n"));
        assert!(output.contains("Emotions (18-30 of 30)\n"));
        assert!(!output.contains("] E16\n"));
        assert!(output.contains("Date Range\n"));
        assert!(output.contains("  [ ] Bookmarked Only\n"));
    }

    #[test]
    fn scroll_offset_is_kept_while_focus_stays_in_view() {
        let form = long_form(30);
        let ctx = SearchModalViewContext {
            focused_emotion: 20,
            emotion_scroll: 17,
            ..context(&form, None, None)
        };

        let output = render(&ctx);

        assert!(output.contains("Emotions (18-30 of 30)\n"));
        assert!(output.contains("> [ ] E20\n"));
    }

    #[rstest]
    #[case::roomy(15)]
    #[case::cramped(4)]
    fn picker_stays_visible_on_short_terminals(mut form: FilterFormController, #[case] height: usize) {
        form.open_start_picker();
        let input = DateInput::new(NaiveDate::from_ymd_opt(2024, 5, 20).expect("valid date"));
        let ctx = SearchModalViewContext {
            visible_height: height,
            ..context(&form, Some(&input), Some("invalid date"))
        };

        let output = render(&ctx);

        assert!(output.lines().count() <= height);
        assert!(output.contains("Start date: 2024-05-20_\n"));
        assert!(output.contains("  invalid date\n"));
    }

    #[rstest]
    #[case::closed(PickerState::Closed, false, 0)]
    #[case::open(PickerState::StartOpen, false, 2)]
    #[case::open_with_error(PickerState::EndOpen, true, 3)]
    fn picker_rows_match_rendered_lines(
        #[case] picker: PickerState,
        #[case] has_error: bool,
        #[case] expected: usize,
    ) {
        assert_eq!(SearchModalComponent::picker_rows(picker, has_error), expected);
    }
}
