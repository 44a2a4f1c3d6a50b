use hashlink::LinkedHashMap;
use snafu::prelude::*;
use tracing::debug;

use crate::store::node::{Node, NodeKind};

/// Path separator used when rendering the current position.
const SEPARATOR: &str = "/";

/// The `cd` argument that moves one level up.
const PARENT: &str = "..";

/// An in-memory tree of folders and files plus a navigation position.
///
/// The store owns the whole tree through its root folder. The current
/// position is tracked as a stack of folder names from the root; every name
/// on the stack was validated as a folder when it was pushed, and nodes are
/// never removed, so re-resolving the stack against the root cannot fail.
///
/// Every operation either fully succeeds or leaves the tree untouched.
#[derive(Debug, Clone)]
pub struct TreeStore {
    root: Node,
    path_stack: Vec<String>,
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    /// Creates a store containing only the root folder, positioned at it.
    pub fn new() -> Self {
        TreeStore {
            root: Node::folder(),
            path_stack: Vec::new(),
        }
    }

    /// Creates an empty folder named `name` under the current position.
    ///
    /// Folders and files share one namespace, so this fails with
    /// [`StoreError::AlreadyExists`] if any child has the name.
    pub fn create_folder(&mut self, name: &str) -> Result<(), StoreError> {
        let children = self.children_mut();
        ensure!(!children.contains_key(name), AlreadyExistsSnafu { name });
        children.insert(name.to_string(), Node::folder());
        debug!("Created folder '{}' under '{}'", name, self.current_path());
        Ok(())
    }

    /// Creates a file named `name` with empty content under the current
    /// position. Same namespace rule as [`TreeStore::create_folder`].
    pub fn create_file(&mut self, name: &str) -> Result<(), StoreError> {
        let children = self.children_mut();
        ensure!(!children.contains_key(name), AlreadyExistsSnafu { name });
        children.insert(name.to_string(), Node::file());
        debug!("Created file '{}' under '{}'", name, self.current_path());
        Ok(())
    }

    /// Enumerates the direct children of the current position in insertion
    /// order. Re-invoking the method re-enumerates live state.
    pub fn list_children(&self) -> impl Iterator<Item = (&str, NodeKind)> {
        self.children()
            .iter()
            .map(|(name, node)| (name.as_str(), node.kind()))
    }

    /// Moves the current position into the child folder `name`, or one level
    /// up for `".."`. Moving up while at the root is a no-op.
    pub fn change_directory(&mut self, name: &str) -> Result<(), StoreError> {
        if name == PARENT {
            match self.path_stack.pop() {
                Some(left) => debug!("Left folder '{}', now at '{}'", left, self.current_path()),
                None => debug!("Already at root, '{}' ignored", PARENT),
            }
            return Ok(());
        }

        match self.children().get(name) {
            None => NotFoundSnafu { name }.fail(),
            Some(Node::File { .. }) => NotADirectorySnafu { name }.fail(),
            Some(Node::Folder { .. }) => {
                self.path_stack.push(name.to_string());
                debug!("Entered folder '{}'", self.current_path());
                Ok(())
            }
        }
    }

    /// Renders the absolute path of the current position. The root alone is
    /// rendered as `"/"`.
    pub fn current_path(&self) -> String {
        let mut path = String::from(SEPARATOR);
        path.push_str(&self.path_stack.join(SEPARATOR));
        path
    }

    /// Replaces the entire content of the file `name` under the current
    /// position with `text`.
    pub fn write_file(&mut self, name: &str, text: &str) -> Result<(), StoreError> {
        match self.children_mut().get_mut(name) {
            None => NotFoundSnafu { name }.fail(),
            Some(Node::Folder { .. }) => IsADirectorySnafu { name }.fail(),
            Some(Node::File { content }) => {
                *content = text.to_string();
                debug!("Wrote {} bytes to file '{}'", text.len(), name);
                Ok(())
            }
        }
    }

    /// Returns the content of the file `name` under the current position.
    /// A file that was never written reads as the empty string.
    pub fn read_file(&self, name: &str) -> Result<&str, StoreError> {
        match self.children().get(name) {
            None => NotFoundSnafu { name }.fail(),
            Some(Node::Folder { .. }) => IsADirectorySnafu { name }.fail(),
            Some(Node::File { content }) => Ok(content),
        }
    }

    /// Resolves the path stack to the children map of the current folder.
    fn children(&self) -> &LinkedHashMap<String, Node> {
        let mut node = &self.root;
        for name in &self.path_stack {
            node = match node {
                Node::Folder { children } => children.get(name),
                Node::File { .. } => None,
            }
            .unwrap_or_else(|| {
                unreachable!("Path stack entry '{name}' no longer denotes a folder")
            });
        }
        match node {
            Node::Folder { children } => children,
            Node::File { .. } => unreachable!("Current position must denote a folder"),
        }
    }

    fn children_mut(&mut self) -> &mut LinkedHashMap<String, Node> {
        let mut node = &mut self.root;
        for name in &self.path_stack {
            node = match node {
                Node::Folder { children } => children.get_mut(name),
                Node::File { .. } => None,
            }
            .unwrap_or_else(|| {
                unreachable!("Path stack entry '{name}' no longer denotes a folder")
            });
        }
        match node {
            Node::Folder { children } => children,
            Node::File { .. } => unreachable!("Current position must denote a folder"),
        }
    }
}

#[derive(Debug, Snafu, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[snafu(display("'{}' already exists", name))]
    AlreadyExists { name: String },
    #[snafu(display("'{}' not found", name))]
    NotFound { name: String },
    #[snafu(display("'{}' is not a folder", name))]
    NotADirectory { name: String },
    #[snafu(display("'{}' is a folder, not a file", name))]
    IsADirectory { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn listing(store: &TreeStore) -> Vec<(String, NodeKind)> {
        store
            .list_children()
            .map(|(name, kind)| (name.to_string(), kind))
            .collect()
    }

    #[test]
    fn fresh_store_is_at_root_with_no_children() {
        let store = TreeStore::new();
        assert_eq!(store.current_path(), "/");
        assert_eq!(store.list_children().count(), 0);
    }

    #[test]
    fn created_children_are_listed_in_insertion_order_with_kinds() {
        let mut store = TreeStore::new();
        store.create_folder("docs").unwrap();
        store.create_file("notes.txt").unwrap();
        store.create_folder("images").unwrap();

        assert_eq!(
            listing(&store),
            vec![
                ("docs".to_string(), NodeKind::Folder),
                ("notes.txt".to_string(), NodeKind::File),
                ("images".to_string(), NodeKind::Folder),
            ]
        );
    }

    #[test]
    fn each_created_child_is_usable_per_its_kind() {
        let mut store = TreeStore::new();
        store.create_folder("docs").unwrap();
        store.create_file("notes.txt").unwrap();

        assert!(store.change_directory("docs").is_ok());
        assert!(store.change_directory("..").is_ok());
        assert!(store.write_file("notes.txt", "hello").is_ok());
        assert_eq!(store.read_file("notes.txt").unwrap(), "hello");
    }

    #[test]
    fn duplicate_folder_creation_fails_and_leaves_tree_unchanged() {
        let mut store = TreeStore::new();
        store.create_folder("docs").unwrap();
        store.change_directory("docs").unwrap();
        store.create_file("inner.txt").unwrap();
        store.change_directory("..").unwrap();

        let before = listing(&store);
        let result = store.create_folder("docs");
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
        assert_eq!(listing(&store), before);

        // The existing folder keeps its children
        store.change_directory("docs").unwrap();
        assert_eq!(
            listing(&store),
            vec![("inner.txt".to_string(), NodeKind::File)]
        );
    }

    #[test]
    fn file_and_folder_names_share_one_namespace() {
        let mut store = TreeStore::new();
        store.create_folder("thing").unwrap();

        let result = store.create_file("thing");
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));

        store.create_file("other").unwrap();
        let result = store.create_folder("other");
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
    }

    #[test]
    fn duplicate_file_creation_does_not_clobber_content() {
        let mut store = TreeStore::new();
        store.create_file("log.txt").unwrap();
        store.write_file("log.txt", "kept").unwrap();

        let result = store.create_file("log.txt");
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
        assert_eq!(store.read_file("log.txt").unwrap(), "kept");
    }

    #[test]
    fn moving_up_at_root_is_a_no_op() {
        let mut store = TreeStore::new();
        let before = store.current_path();
        store.change_directory("..").unwrap();
        assert_eq!(store.current_path(), before);
        assert_eq!(store.current_path(), "/");
    }

    #[rstest]
    #[case("hello world")]
    #[case("")]
    #[case("special chars: äöü🚀")]
    #[case("multiline\ncontent\nwith\nnewlines")]
    #[case("  leading and trailing whitespace  ")]
    fn write_then_read_round_trips_content(#[case] text: &str) {
        let mut store = TreeStore::new();
        store.create_file("payload").unwrap();
        store.write_file("payload", text).unwrap();
        assert_eq!(store.read_file("payload").unwrap(), text);
    }

    #[test]
    fn writing_replaces_prior_content_entirely() {
        let mut store = TreeStore::new();
        store.create_file("payload").unwrap();
        store.write_file("payload", "first version").unwrap();
        store.write_file("payload", "second").unwrap();
        assert_eq!(store.read_file("payload").unwrap(), "second");

        store.write_file("payload", "").unwrap();
        assert_eq!(store.read_file("payload").unwrap(), "");
    }

    #[test]
    fn unwritten_file_reads_as_empty_string() {
        let mut store = TreeStore::new();
        store.create_file("blank").unwrap();
        assert_eq!(store.read_file("blank").unwrap(), "");
    }

    #[test]
    fn path_reflects_nested_navigation_and_moving_up() {
        let mut store = TreeStore::new();
        store.create_folder("a").unwrap();
        store.change_directory("a").unwrap();
        store.create_folder("b").unwrap();
        store.change_directory("b").unwrap();
        assert_eq!(store.current_path(), "/a/b");

        store.change_directory("..").unwrap();
        assert_eq!(store.current_path(), "/a");

        store.change_directory("..").unwrap();
        assert_eq!(store.current_path(), "/");
    }

    #[test]
    fn operations_resolve_against_the_current_folder_only() {
        let mut store = TreeStore::new();
        store.create_folder("a").unwrap();
        store.create_file("top.txt").unwrap();
        store.change_directory("a").unwrap();

        // Siblings of the parent are not visible here
        let result = store.read_file("top.txt");
        assert!(matches!(result, Err(StoreError::NotFound { .. })));

        store.create_file("top.txt").unwrap();
        store.write_file("top.txt", "nested").unwrap();
        store.change_directory("..").unwrap();
        assert_eq!(store.read_file("top.txt").unwrap(), "");
    }

    #[test]
    fn reading_or_writing_a_folder_is_rejected() {
        let mut store = TreeStore::new();
        store.create_folder("docs").unwrap();

        assert!(matches!(
            store.read_file("docs"),
            Err(StoreError::IsADirectory { .. })
        ));
        assert!(matches!(
            store.write_file("docs", "text"),
            Err(StoreError::IsADirectory { .. })
        ));
    }

    #[test]
    fn entering_a_file_is_rejected() {
        let mut store = TreeStore::new();
        store.create_file("notes.txt").unwrap();

        let result = store.change_directory("notes.txt");
        assert!(matches!(result, Err(StoreError::NotADirectory { .. })));
        assert_eq!(store.current_path(), "/");
    }

    #[rstest]
    #[case::change_directory("cd")]
    #[case::write_file("write")]
    #[case::read_file("read")]
    fn missing_names_are_reported_as_not_found(#[case] operation: &str) {
        let mut store = TreeStore::new();
        let result = match operation {
            "cd" => store.change_directory("ghost").map(|_| ()),
            "write" => store.write_file("ghost", "text").map(|_| ()),
            "read" => store.read_file("ghost").map(|_| ()),
            _ => unreachable!(),
        };
        assert!(matches!(result, Err(StoreError::NotFound { name }) if name == "ghost"));
    }

    #[test]
    fn failed_navigation_does_not_move_the_position() {
        let mut store = TreeStore::new();
        store.create_folder("a").unwrap();
        store.change_directory("a").unwrap();

        assert!(store.change_directory("missing").is_err());
        assert_eq!(store.current_path(), "/a");
    }

    #[test]
    fn sibling_folders_with_nested_children_stay_independent() {
        let mut store = TreeStore::new();
        store.create_folder("left").unwrap();
        store.create_folder("right").unwrap();

        store.change_directory("left").unwrap();
        store.create_file("only-left.txt").unwrap();
        store.change_directory("..").unwrap();

        store.change_directory("right").unwrap();
        assert_eq!(store.list_children().count(), 0);
        assert!(matches!(
            store.read_file("only-left.txt"),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn listing_is_restartable_and_tracks_live_state() {
        let mut store = TreeStore::new();
        store.create_file("a.txt").unwrap();
        assert_eq!(store.list_children().count(), 1);
        assert_eq!(store.list_children().count(), 1);

        store.create_file("b.txt").unwrap();
        assert_eq!(store.list_children().count(), 2);
    }

    #[test]
    fn error_display_names_the_offending_entry() {
        let error = StoreError::AlreadyExists {
            name: "docs".to_string(),
        };
        assert_eq!(error.to_string(), "'docs' already exists");

        let error = StoreError::IsADirectory {
            name: "docs".to_string(),
        };
        assert_eq!(error.to_string(), "'docs' is a folder, not a file");
    }
}
