pub mod dispatch;
pub mod ops;
pub mod polynomial;
pub mod sampling;

pub use dispatch::*;
pub use polynomial::*;
