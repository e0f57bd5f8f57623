//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions and window events.

/// Messages for the journal TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one entry.
    CursorUp,
    /// Move cursor down one entry.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to first entry.
    Home,
    /// Move cursor to last entry.
    End,

    // Search form
    /// Show the search form.
    OpenSearch,
    /// Move emotion focus to the next catalog entry.
    FocusNextEmotion,
    /// Move emotion focus to the previous catalog entry.
    FocusPreviousEmotion,
    /// Toggle the focused emotion.
    ToggleFocusedEmotion,
    /// Flip the bookmarked-only flag.
    ToggleBookmarked,
    /// Open the start-date picker.
    OpenStartPicker,
    /// Open the end-date picker.
    OpenEndPicker,
    /// Reset every filter value in the form.
    ClearFilters,
    /// Submit the form.
    SubmitSearch,
    /// Close the form without searching.
    DismissSearch,
    /// Drop the applied search and show every entry.
    ResetResults,

    // Date picker
    /// Type a character into the open picker.
    PickerInput(char),
    /// Delete the last character in the open picker.
    PickerBackspace,
    /// Commit the typed date.
    PickerCommit,
    /// Commit "no date" for the open picker's bound.
    PickerUnset,
    /// Close the picker without changing its bound.
    PickerCancel,

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for entry list cursor movement.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for search form interactions.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(
            self,
            Self::OpenSearch
                | Self::FocusNextEmotion
                | Self::FocusPreviousEmotion
                | Self::ToggleFocusedEmotion
                | Self::ToggleBookmarked
                | Self::OpenStartPicker
                | Self::OpenEndPicker
                | Self::ClearFilters
                | Self::SubmitSearch
                | Self::DismissSearch
                | Self::ResetResults
        )
    }

    /// Returns true for date picker editing.
    #[must_use]
    pub const fn is_picker(&self) -> bool {
        matches!(
            self,
            Self::PickerInput(_)
                | Self::PickerBackspace
                | Self::PickerCommit
                | Self::PickerUnset
                | Self::PickerCancel
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::AppMsg;

    #[rstest]
    #[case(AppMsg::CursorDown, true, false, false)]
    #[case(AppMsg::SubmitSearch, false, true, false)]
    #[case(AppMsg::PickerInput('1'), false, false, true)]
    #[case(AppMsg::Quit, false, false, false)]
    fn messages_belong_to_one_category(
        #[case] msg: AppMsg,
        #[case] navigation: bool,
        #[case] search: bool,
        #[case] picker: bool,
    ) {
        assert_eq!(msg.is_navigation(), navigation);
        assert_eq!(msg.is_search(), search);
        assert_eq!(msg.is_picker(), picker);
    }
}
