pub mod annotate;
pub mod conversation;
pub mod model;
pub mod responses;
