pub mod cli;
pub mod core;
pub mod fs;
pub mod models;
