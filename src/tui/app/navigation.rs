//! Navigation handlers for the entry list.
//!
//! Each handler moves the cursor and then scrolls so the cursor stays in
//! the visible window.

use bubbletea_rs::Cmd;

use super::JournalApp;
use crate::tui::messages::AppMsg;

impl JournalApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        let max_index = self.filtered_count().saturating_sub(1);
        let page = self.entry_list.visible_height().max(1);
        match msg {
            AppMsg::CursorUp => self.cursor.up(1),
            AppMsg::CursorDown => self.cursor.down(1, max_index),
            AppMsg::PageUp => self.cursor.up(page),
            AppMsg::PageDown => self.cursor.down(page, max_index),
            AppMsg::Home => self.cursor.home(),
            AppMsg::End => self.cursor.end(max_index),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                return None;
            }
        }
        self.cursor.keep_visible(self.entry_list.visible_height());
        None
    }
}
