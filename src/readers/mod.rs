pub mod discovery;
pub mod sheet;

pub use discovery::discover_spreadsheets;
pub use sheet::{Sheet, SheetReader};
