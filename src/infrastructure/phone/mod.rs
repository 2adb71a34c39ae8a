pub mod libphone;

pub use libphone::Libphone;
