pub mod overlap;
pub mod validate;
