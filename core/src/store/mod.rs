pub mod fixtures;
pub mod model;
pub mod repository;
