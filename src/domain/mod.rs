pub mod errors;
pub mod payload;
pub mod ports;
