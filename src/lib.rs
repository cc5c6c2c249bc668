pub mod cli;
pub mod config;
pub mod error;
pub mod es;
pub mod renderer;
