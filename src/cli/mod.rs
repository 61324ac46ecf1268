//! CLI argument structures

pub mod args;

pub use args::Cli;
