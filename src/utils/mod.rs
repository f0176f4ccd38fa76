pub mod formatting;
pub mod logging;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_duration;
