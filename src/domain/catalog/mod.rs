pub mod entity;
pub mod source;

pub use entity::{CountryDialOption, CountryDialingRecord, DialCodeCatalog};
pub use source::CountryDialingSource;
