pub mod country_api;
pub mod geocoding;
pub mod phone;
