pub mod config;
pub mod languages;
pub mod models;
pub mod ports;
