pub mod delegation;

pub use delegation::*;
