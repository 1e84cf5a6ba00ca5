//! Common formatting helpers for extended `std` types
//!
//! These are left public for convenience, e.g. printing tally results and bin
//! edges in a consistent scientific format.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod option_ext;
mod string_ext;
mod value_ext;

// Flatten
pub use option_ext::OptionExt;
pub use string_ext::StringExt;
pub use value_ext::ValueExt;
