//! In-memory tree of folders and files.
//!
//! The tree owns its nodes through a single root folder; navigation state is
//! a stack of folder names kept beside it. All operations resolve names
//! relative to the current position.

mod node;
mod tree;

pub use node::{Node, NodeKind};
pub use tree::{StoreError, TreeStore};
