use std::fmt;

/// A single stored text entry. Notes carry no identity beyond their
/// current position in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub text: String,
}

impl Note {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Builds a note from whitespace-split words, rejoined with single spaces.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let text = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        Self { text }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A note paired with its 1-based position, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub position: usize,
    pub note: Note,
}
