// UiState holds ephemeral UI-only state (text drafts and the transient
// notice). None of it survives a screen transition's semantics: drafts are
// cleared on successful submission, and the notice is cleared by the next
// handled action.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) notice: Option<Notice>,
    pub(crate) drafts: InputDrafts,
}

impl UiState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Default)]
pub(crate) struct InputDrafts {
    pub(crate) size: String,
    pub(crate) phrase: String,
}

/// A transient user-facing message raised by a rejected input.
///
/// Notices replace the source platform's toast popups: they stay visible
/// until the next handled action rather than expiring on a timer, since
/// the app runs no timers at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub(crate) enum Notice {
    #[display("Grid size cannot be empty")]
    SizeMissing,
    #[display("Grid size must be a positive integer")]
    SizeInvalid,
    #[display("Maximum number of phrases ({capacity}) reached")]
    CollectorFull { capacity: usize },
    #[display("Please fill out all phrases first ({filled} / {required})")]
    BoardIncomplete { filled: usize, required: usize },
}

#[cfg(test)]
mod tests {
    use super::Notice;

    #[test]
    fn notices_render_user_facing_text() {
        assert_eq!(
            Notice::CollectorFull { capacity: 9 }.to_string(),
            "Maximum number of phrases (9) reached"
        );
        assert_eq!(
            Notice::BoardIncomplete {
                filled: 3,
                required: 9,
            }
            .to_string(),
            "Please fill out all phrases first (3 / 9)"
        );
    }
}
