//! Lifecycle and window handlers for the journal TUI.

use bubbletea_rs::Cmd;

use super::JournalApp;
use crate::tui::messages::AppMsg;

impl JournalApp {
    /// Dispatches lifecycle and window messages to their handlers.
    pub(super) fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => self.handle_resize(*width, *height),
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let list_height = self.calculate_list_height();
        self.entry_list.set_visible_height(list_height);
        self.cursor.keep_visible(list_height);
        self.emotion_cursor.keep_visible(self.emotion_list_height());
        None
    }
}
