pub mod advisor;
pub mod audit;
pub mod ids;
pub mod store;
pub mod views;

pub mod error;
