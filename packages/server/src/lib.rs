//! Task Forge REST API Server
//!
//! Thin HTTP glue over [`taskforge_core::NodeStore`]: axum routes map
//! requests to store calls and store results to status codes. The binary in
//! `main.rs` wires up logging, reads the port from the environment and hands
//! a fresh store to [`api::start_server`].

pub mod api;
