// ABOUTME: Library root for plainchat — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod chat;
pub mod config;
pub mod generate;
pub mod logging;
pub mod tui;
pub mod worker;
