pub mod fixed_width;
pub mod literal;
#[cfg(feature = "regex")]
pub mod pattern;

pub use fixed_width::{FixedWidth, fixed_width};
pub use literal::{Literal, literal};
#[cfg(feature = "regex")]
pub use pattern::{Pattern, pattern};
