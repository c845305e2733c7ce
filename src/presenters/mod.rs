pub mod errors;
pub mod factory;
pub mod file;
