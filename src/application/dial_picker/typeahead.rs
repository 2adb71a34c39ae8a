use std::time::{Duration, Instant};

use crate::domain::catalog::entity::{CountryDialOption, DialCodeCatalog};

/// Keystrokes this far apart start a new search query.
pub const TYPEAHEAD_RESET_WINDOW: Duration = Duration::from_millis(700);

/// Keyboard-search buffer for the dial-code picker. Keystrokes within the
/// reset window extend the query; the first one after it starts over.
pub struct TypeaheadBuffer {
    query: String,
    window: Duration,
    last_keystroke: Option<Instant>,
}

impl TypeaheadBuffer {
    pub fn new(window: Duration) -> Self {
        Self {
            query: String::new(),
            window,
            last_keystroke: None,
        }
    }

    pub fn push(&mut self, key: char, at: Instant) -> &str {
        let expired = self
            .last_keystroke
            .is_some_and(|last| at.duration_since(last) > self.window);
        if expired {
            self.query.clear();
        }
        self.last_keystroke = Some(at);
        self.query.push(key.to_ascii_lowercase());
        &self.query
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.last_keystroke = None;
    }
}

impl Default for TypeaheadBuffer {
    fn default() -> Self {
        Self::new(TYPEAHEAD_RESET_WINDOW)
    }
}

/// First option whose label starts with the buffered query, ignoring case.
pub fn find_label_match<'a>(
    catalog: &'a DialCodeCatalog,
    query: &str,
) -> Option<&'a CountryDialOption> {
    if query.is_empty() {
        return None;
    }
    catalog
        .options()
        .iter()
        .find(|option| option.label.to_lowercase().starts_with(query))
}
