//! centum presentation layer.
//!
//! The pipeline crates emit plain numbers and operator tags; this crate
//! owns everything locale-shaped: comma thousands separators, natural
//! decimal display, the normalized expression form, and the `%` suffix
//! on percentage results.

mod comma;
mod render;

pub use comma::group_thousands;
pub use render::{format_expression, format_value};
