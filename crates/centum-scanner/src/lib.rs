//! centum scanner: sequential rune access over one expression string.

mod scanner;

pub use scanner::{is_numeric, is_separator, Scanner};
