//! `Model` trait implementation for the journal TUI application.
//!
//! This module contains the `bubbletea_rs::Model` trait implementation for
//! `JournalApp`, handling initialisation, update dispatch, and view rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};
use unicode_width::UnicodeWidthChar;

use super::JournalApp;
use crate::tui::input::map_key_to_message_with_context;
use crate::tui::messages::AppMsg;

impl Model for JournalApp {
    fn init() -> (Self, Option<Cmd>) {
        // Retrieve initial data from module-level storage
        let session = crate::tui::get_initial_session();
        let model = Self::new(session).with_telemetry(crate::tui::get_telemetry_sink());
        (model, None)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context());
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&self.render_help_overlay());
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());

        let body = if self.search_open {
            self.render_search_modal()
        } else {
            self.render_entry_list()
        };
        output.push_str(&fit_body(&body, self.calculate_list_height()));
        output.push_str(&self.render_status_bar());

        self.normalise_viewport(&output)
    }
}

impl JournalApp {
    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after resize.
    fn normalise_viewport(&self, output: &str) -> String {
        let width = self.width.max(1) as usize;
        let safe_width = width.saturating_sub(1).max(1);
        let height = self.height.max(1) as usize;

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| pad_or_truncate_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Resets all terminal styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Pads or truncates `body` to exactly `rows` lines so the status bar stays
/// on the last row.
fn fit_body(body: &str, rows: usize) -> String {
    let mut lines: Vec<&str> = body.lines().take(rows).collect();
    let missing = rows.saturating_sub(lines.len());
    lines.extend(std::iter::repeat_n("", missing));
    let mut fitted = lines.join("\n");
    fitted.push('\n');
    fitted
}

/// Pads or truncates `line` to `width` visible columns.
///
/// ANSI escape sequences take no columns and are copied through. A line cut
/// short while styled is closed with a reset.
fn pad_or_truncate_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut visible_width = 0usize;
    let mut in_escape = false;
    let mut styled = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            output.push(ch);
            in_escape = true;
            styled = true;
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible_width.saturating_add(char_width) > width {
            if styled {
                output.push_str(ANSI_RESET);
            }
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
