pub mod host;
pub mod listener;
pub mod page;
