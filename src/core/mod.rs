pub mod calculator;
pub mod extract;
pub mod logic;
pub mod sessions;
pub mod time_token;
pub mod workday;
