//! User-authored bingo phrases.

use std::fmt;

/// A single user-authored text string occupying one board cell.
///
/// Phrases are stored exactly as entered; the only validation is that a
/// phrase must contain at least one non-whitespace character.
///
/// # Examples
///
/// ```
/// use wordbingo_core::Phrase;
///
/// let phrase = Phrase::new("Safety Car").unwrap();
/// assert_eq!(phrase.as_str(), "Safety Car");
///
/// assert!(Phrase::new("").is_err());
/// assert!(Phrase::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase(String);

impl Phrase {
    /// Creates a phrase from text.
    ///
    /// The text is kept exactly as entered, including surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BlankPhraseError`] if the text is empty or whitespace-only.
    pub fn new(text: impl Into<String>) -> Result<Self, BlankPhraseError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(BlankPhraseError);
        }
        Ok(Self(text))
    }

    /// Returns the phrase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.0
    }
}

/// Error returned when constructing a phrase from blank text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("phrase cannot be blank")]
pub struct BlankPhraseError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_text_as_entered() {
        let phrase = Phrase::new("  Red Flag  ").unwrap();
        assert_eq!(phrase.as_str(), "  Red Flag  ");
        assert_eq!(phrase.to_string(), "  Red Flag  ");
        assert_eq!(String::from(phrase), "  Red Flag  ");
    }

    #[test]
    fn new_rejects_blank_text() {
        assert_eq!(Phrase::new(""), Err(BlankPhraseError));
        assert_eq!(Phrase::new(" \t \n "), Err(BlankPhraseError));
    }

    #[test]
    fn single_visible_character_is_enough() {
        assert!(Phrase::new("x").is_ok());
        assert!(Phrase::new(" . ").is_ok());
    }
}
