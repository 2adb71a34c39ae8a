pub mod address_suggest;

pub use address_suggest::{AddressSuggestClient, AddressSuggestion};
