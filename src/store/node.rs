use derive_more::Display;
use hashlink::LinkedHashMap;

/// A single entry in the tree: a folder owning named children, or a file
/// holding a text payload. The variant carries only the fields valid for it,
/// so a file can never have children and a folder can never have content.
///
/// Children live in a [`LinkedHashMap`], so enumerating a folder always
/// yields entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Folder { children: LinkedHashMap<String, Node> },
    File { content: String },
}

impl Node {
    pub fn folder() -> Self {
        Node::Folder {
            children: LinkedHashMap::new(),
        }
    }

    pub fn file() -> Self {
        Node::File {
            content: String::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Folder { .. } => NodeKind::Folder,
            Node::File { .. } => NodeKind::File,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }
}

/// Classification of a node, as reported by listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NodeKind {
    #[display("folder")]
    Folder,
    #[display("file")]
    File,
}
