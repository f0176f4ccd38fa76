pub mod clock_format;
pub mod day_summary;
pub mod quota;
pub mod session;
