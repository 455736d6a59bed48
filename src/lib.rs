pub mod api;
pub mod board;
pub mod cli;
pub mod core;
