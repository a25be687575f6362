//! In-Memory Node Store
//!
//! `NodeStore` is the sole authority over node lifecycle: it assigns ids,
//! stamps timestamps, applies sparse updates, cascades deletes through the
//! `parent_id` tree, and answers substring searches.
//!
//! # Architecture
//!
//! - **Owned state**: a plain `Vec<Node>` in insertion order plus a `u64`
//!   id counter starting at 1. Nothing is persisted; a restart starts empty.
//! - **Synchronous and total**: every operation is a plain method call with
//!   no error type. Absence is `Option`, delete always reports success.
//! - **Single writer**: callers serialize all access (reads included) through
//!   one lock; id assignment and cascade delete both mutate shared state.
//!
//! Returned nodes are clones. The store never hands out references into its
//! own `Vec`, so callers can hold results across later mutations.
//!
//! # Examples
//!
//! ```rust
//! use taskforge_core::{NodeDraft, NodeStore};
//!
//! let mut store = NodeStore::new();
//! let node = store.create(NodeDraft {
//!     title: Some("Buy milk".to_string()),
//!     ..Default::default()
//! });
//!
//! assert_eq!(node.id, "1");
//! assert_eq!(node.priority, "medium");
//! assert_eq!(store.all().len(), 1);
//! ```

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::{Node, NodeDraft, NodeUpdate, DEFAULT_PRIORITY};

/// In-memory store holding every live node for the process lifetime.
#[derive(Debug)]
pub struct NodeStore {
    /// All live nodes, in creation order
    nodes: Vec<Node>,

    /// Next auto-assigned id; only advances when the caller didn't supply one
    next_id: u64,
}

impl Default for NodeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Default due date for nodes created without one (RFC 3339, microseconds).
fn default_due_date(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl NodeStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a node from a draft, filling defaults for absent fields.
    ///
    /// The id comes from the counter (stringified, then incremented) unless
    /// the draft carries one, in which case the counter is left untouched.
    /// `created_at` and `updated_at` are set to the same instant. Absent
    /// fields default to: `due_date` now, `priority` "medium", `tags` empty,
    /// both flags false, `title` the empty string. The store performs no
    /// validation; rejecting a missing title is the API layer's job.
    ///
    /// # Returns
    ///
    /// The created node, exactly as stored.
    pub fn create(&mut self, draft: NodeDraft) -> Node {
        let now = Utc::now();

        let id = match draft.id {
            Some(id) => id,
            None => {
                let id = self.next_id.to_string();
                self.next_id += 1;
                id
            }
        };

        let node = Node {
            id,
            title: draft.title.unwrap_or_default(),
            description: draft.description,
            due_date: draft.due_date.unwrap_or_else(|| default_due_date(now)),
            priority: draft
                .priority
                .unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            tags: draft.tags.unwrap_or_default(),
            notes: draft.notes,
            parent_id: draft.parent_id,
            is_project: draft.is_project.unwrap_or(false),
            is_completed: draft.is_completed.unwrap_or(false),
            created_at: now,
            updated_at: now,
        };

        self.nodes.push(node.clone());
        tracing::debug!("Created node {} ({})", node.id, node.title);
        node
    }

    /// Every node in the store, in creation order.
    pub fn all(&self) -> Vec<Node> {
        self.nodes.to_vec()
    }

    /// Look up a single node by id.
    ///
    /// Linear scan; `None` when no node carries the id.
    pub fn get(&self, id: &str) -> Option<Node> {
        self.nodes.iter().find(|node| node.id == id).cloned()
    }

    /// Apply a sparse update to the node with the given id.
    ///
    /// Only fields present in the update are touched; `description`, `notes`
    /// and `parent_id` distinguish "clear" from "keep" via the double-Option
    /// pattern (see [`NodeUpdate`]). `updated_at` is refreshed whenever the
    /// node exists, even for an empty update.
    ///
    /// # Returns
    ///
    /// The updated node, or `None` when the id is unknown.
    pub fn update(&mut self, id: &str, update: NodeUpdate) -> Option<Node> {
        let node = self.nodes.iter_mut().find(|node| node.id == id)?;

        if let Some(title) = update.title {
            node.title = title;
        }
        if let Some(description) = update.description {
            node.description = description;
        }
        if let Some(due_date) = update.due_date {
            node.due_date = due_date;
        }
        if let Some(priority) = update.priority {
            node.priority = priority;
        }
        if let Some(tags) = update.tags {
            node.tags = tags;
        }
        if let Some(notes) = update.notes {
            node.notes = notes;
        }
        if let Some(parent_id) = update.parent_id {
            node.parent_id = parent_id;
        }
        if let Some(is_project) = update.is_project {
            node.is_project = is_project;
        }
        if let Some(is_completed) = update.is_completed {
            node.is_completed = is_completed;
        }
        node.updated_at = Utc::now();

        let node = node.clone();
        tracing::debug!("Updated node {}", node.id);
        Some(node)
    }

    /// Delete a node and its entire subtree.
    ///
    /// Children are removed before their parent, depth-first over the
    /// `parent_id` tree. A visited-id set makes the traversal terminate even
    /// when `parent_id` edges form a cycle; every node on the cycle is
    /// removed.
    ///
    /// # Returns
    ///
    /// Always `true`, including for an unknown id (idempotent at this layer;
    /// existence checks belong to the API layer).
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        let mut visited = HashSet::new();
        self.remove_subtree(id, &mut visited);
        tracing::debug!(
            "Cascade delete of {} removed {} node(s)",
            id,
            before - self.nodes.len()
        );
        true
    }

    fn remove_subtree(&mut self, id: &str, visited: &mut HashSet<String>) {
        // A parent_id cycle would otherwise recurse forever
        if !visited.insert(id.to_string()) {
            return;
        }

        // 1. Collect direct children (ids only, the Vec shifts underneath us)
        let children: Vec<String> = self
            .nodes
            .iter()
            .filter(|node| node.parent_id.as_deref() == Some(id))
            .map(|node| node.id.clone())
            .collect();

        // 2. Cascade into each child before touching the node itself
        for child_id in children {
            self.remove_subtree(&child_id, visited);
        }

        // 3. Remove the node
        self.nodes.retain(|node| node.id != id);
    }

    /// Case-insensitive substring search over title, description and tags.
    ///
    /// A node matches when ANY of the three fields contains the query
    /// (description only when present). Results keep creation order.
    /// Empty-query handling is the API layer's concern; an empty string
    /// trivially matches every node here.
    pub fn search(&self, query: &str) -> Vec<Node> {
        let needle = query.to_lowercase();

        self.nodes
            .iter()
            .filter(|node| {
                node.title.to_lowercase().contains(&needle)
                    || node
                        .description
                        .as_ref()
                        .is_some_and(|description| description.to_lowercase().contains(&needle))
                    || node.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
