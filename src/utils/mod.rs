pub mod constants;
pub mod numeric;
pub mod progress;

pub use constants::*;
pub use numeric::{cell_opt_string, cell_string, parse_int, parse_locale_float, parse_locale_str};
pub use progress::ProgressReporter;
