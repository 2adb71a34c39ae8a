pub mod typeahead;

pub use typeahead::{TYPEAHEAD_RESET_WINDOW, TypeaheadBuffer, find_label_match};
