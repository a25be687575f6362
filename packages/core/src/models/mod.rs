//! Data Models
//!
//! This module contains the data structures shared across Task Forge:
//!
//! - `Node` - a task or project record
//! - `NodeDraft` - creation payload with store-filled defaults
//! - `NodeUpdate` - sparse update payload (double-Option for nullable fields)

mod node;

pub use node::{Node, NodeDraft, NodeUpdate, DEFAULT_PRIORITY};
