pub mod formatter;
pub mod length_rules;
pub mod parser;
pub mod service;
pub mod validator;
pub mod value_objects;

/// Dial code of the default market, handled on dedicated fast paths.
pub const HUNGARY_DIAL_CODE: &str = "+36";

pub use self::formatter::{NationalFormatter, build_phone_value, format_phone_local};
pub use self::length_rules::{LengthResolver, LengthVerdict, PhoneConfig, PhoneLengthOracle};
pub use self::parser::parse_phone_value;
pub use self::service::PhoneFormService;
pub use self::validator::{NumberVerifier, is_valid_phone_number};
pub use self::value_objects::{DialCode, ParsedPhone, PhoneLengthBounds};
