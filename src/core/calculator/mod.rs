pub mod expected;
pub mod gaps;
pub mod remaining;
pub mod span;
pub mod timeline;
