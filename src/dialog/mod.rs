pub mod builder;
pub mod config;
pub mod model;
pub mod modification;
