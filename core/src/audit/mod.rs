pub mod canonical;
pub mod event;
pub mod log;
