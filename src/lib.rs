//! Design-utility widget engines.
//!
//! Pure, synchronous computation cores for a browser-based widget shell:
//! unit conversion, VAT and BMR calculators, Gregorian/Hijri calendar
//! conversion and nearest-color matching. The shell owns all reactive state;
//! every engine here takes its parameters explicitly and has no side effects.

pub mod core;
pub mod shared;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::core::features::{execute_widget_action, get_all_command_items, Widget, WidgetKind};
pub use crate::shared::error::{AppError, AppResult};
