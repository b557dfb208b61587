pub mod set_delegate;
pub mod clear_delegate;

pub use set_delegate::*;
pub use clear_delegate::*;
