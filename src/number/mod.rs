#[cfg(feature = "dates")]
pub mod date;
pub mod integer;

#[cfg(feature = "dates")]
pub use date::date_yyyymmdd;
pub use integer::{integer, integer_of_size, to_integer};
