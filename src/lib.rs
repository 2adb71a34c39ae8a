//! Shared form core of the delivery web client: international phone-number
//! normalization parametrized by a dial-code catalog fetched once per page
//! session, plus the address-autocomplete and dial-picker affordances the
//! checkout and profile forms build on.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
