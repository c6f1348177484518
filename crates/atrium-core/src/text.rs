//! Rotating word lists.

/// Cursor over an ordered word list, wrapping past the end.
///
/// Owns no timing. Whatever clock drives the animation calls [`advance`]
/// and re-reads [`current`].
///
/// [`advance`]: WordRotation::advance
/// [`current`]: WordRotation::current
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRotation {
    words: Vec<String>,
    position: usize,
}

impl WordRotation {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            position: 0,
        }
    }

    /// Word currently shown, `None` for an empty rotation.
    pub fn current(&self) -> Option<&str> {
        self.words.get(self.position).map(String::as_str)
    }

    /// Step to the next word, wrapping after the last one.
    pub fn advance(&mut self) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        self.position = (self.position + 1) % self.words.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_rotation_has_no_word() {
        let mut rotation = WordRotation::new(Vec::<String>::new());

        assert_eq!(rotation.current(), None);
        assert_eq!(rotation.advance(), None);
    }

    #[test]
    fn test_single_word_stays_put() {
        let mut rotation = WordRotation::new(["fast"]);

        assert_eq!(rotation.current(), Some("fast"));
        assert_eq!(rotation.advance(), Some("fast"));
        assert_eq!(rotation.advance(), Some("fast"));
    }

    #[test]
    fn test_advance_wraps_past_the_end() {
        let mut rotation = WordRotation::new(["fast", "simple", "typed"]);

        assert_eq!(rotation.current(), Some("fast"));
        assert_eq!(rotation.advance(), Some("simple"));
        assert_eq!(rotation.advance(), Some("typed"));
        assert_eq!(rotation.advance(), Some("fast"));
    }

    #[test]
    fn test_rotation_length_reflects_word_count() {
        let rotation = WordRotation::new(["one", "two"]);

        assert_eq!(rotation.len(), 2);
        assert!(!rotation.is_empty());
        assert!(WordRotation::new(Vec::<String>::new()).is_empty());
    }
}
