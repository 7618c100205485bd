//! Shared error message constants
//!
//! A widget signals "this action is not mine" with ERR_UNSUPPORTED_ACTION so
//! the registry keeps trying the remaining widgets.

pub const ERR_UNSUPPORTED_ACTION: &str = "Unsupported action type";

pub const ERR_CATEGORY_MISMATCH: &str = "Units do not belong to the requested category";
pub const ERR_INVALID_HEX: &str = "Invalid hex color";
pub const ERR_DATE_OUT_OF_RANGE: &str = "Date out of supported range";
