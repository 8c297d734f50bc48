pub mod seed;
pub mod service;
