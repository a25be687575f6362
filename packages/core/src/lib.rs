//! Task Forge Core
//!
//! This crate provides the data model and the in-memory node store behind the
//! Task Forge REST API.
//!
//! # Architecture
//!
//! - **One record type**: tasks and projects share the `Node` shape, told
//!   apart by the `is_project` flag
//! - **In-memory only**: the store is a `Vec` plus an id counter; nothing
//!   survives a restart
//! - **Tree by reference**: hierarchy hangs off `parent_id` strings with no
//!   referential-integrity enforcement; delete cascades through the tree
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, NodeDraft, NodeUpdate)
//! - [`store`] - The in-memory NodeStore

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::*;
pub use store::NodeStore;
