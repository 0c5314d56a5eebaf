//! The rooted specification tree
//!
//! [`A2UISpec`] wraps a component tree whose root is guaranteed to be a
//! `dashboard` node. The guarantee is structural: the only constructors
//! build the dashboard themselves, and deserialization rejects any other
//! root, so downstream code never has to re-check it.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::component::ComponentNode;

/// Errors from resolving a subtree path
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("empty path: the dashboard root cannot be replaced")]
    Empty,

    #[error("invalid path segment '{segment}': expected a child index")]
    BadSegment { segment: String },

    #[error("child index {index} out of range (node has {len} children)")]
    OutOfRange { index: usize, len: usize },

    #[error("cannot descend into a {kind} node: not a container")]
    NotAContainer { kind: String },
}

/// A complete dashboard specification for one query
///
/// Immutable once assembled, except for [`replace_at`](Self::replace_at)
/// which backs the `ui.update` protocol event. Serializes transparently
/// as the root node object.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct A2UISpec {
    root: ComponentNode,
}

impl A2UISpec {
    /// Build a spec with a fresh dashboard root owning `children`
    pub fn dashboard(title: impl Into<String>, subtitle: Option<String>, children: Vec<ComponentNode>) -> Self {
        Self {
            root: ComponentNode::Dashboard {
                title: title.into(),
                subtitle,
                children,
            },
        }
    }

    pub fn root(&self) -> &ComponentNode {
        &self.root
    }

    /// Dashboard title
    pub fn title(&self) -> &str {
        match &self.root {
            ComponentNode::Dashboard { title, .. } => title,
            // Unreachable: both constructors guarantee a dashboard root
            _ => "",
        }
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Resolve a slash-separated child-index path, e.g. "1" or "0/2"
    pub fn node_at(&self, path: &str) -> Result<&ComponentNode, PathError> {
        let mut node = &self.root;
        for index in parse_path(path)? {
            let children = node.children().ok_or_else(|| PathError::NotAContainer {
                kind: node.kind().to_string(),
            })?;
            node = children.get(index).ok_or(PathError::OutOfRange {
                index,
                len: children.len(),
            })?;
        }
        Ok(node)
    }

    /// Replace the subtree at `path` with `node`
    ///
    /// The path addresses children relative to the dashboard root; the
    /// root itself cannot be replaced (the tree must keep its dashboard
    /// root). On error the tree is left unchanged.
    pub fn replace_at(&mut self, path: &str, node: ComponentNode) -> Result<(), PathError> {
        let indices = parse_path(path)?;
        let Some((&last, rest)) = indices.split_last() else {
            return Err(PathError::Empty);
        };

        let mut parent = &mut self.root;
        for &index in rest {
            let kind = parent.kind().to_string();
            let children = parent.children_mut().ok_or(PathError::NotAContainer { kind })?;
            let len = children.len();
            parent = children
                .get_mut(index)
                .ok_or(PathError::OutOfRange { index, len })?;
        }

        let kind = parent.kind().to_string();
        let children = parent.children_mut().ok_or(PathError::NotAContainer { kind })?;
        let len = children.len();
        let slot = children.get_mut(last).ok_or(PathError::OutOfRange { index: last, len })?;
        *slot = node;
        Ok(())
    }
}

impl<'de> Deserialize<'de> for A2UISpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = ComponentNode::deserialize(deserializer)?;
        if !matches!(root, ComponentNode::Dashboard { .. }) {
            return Err(D::Error::custom(format!(
                "spec root must be a dashboard, got {}",
                root.kind()
            )));
        }
        Ok(Self { root })
    }
}

fn parse_path(path: &str) -> Result<Vec<usize>, PathError> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }
    path.split('/')
        .map(|segment| {
            segment.parse::<usize>().map_err(|_| PathError::BadSegment {
                segment: segment.to_string(),
            })
        })
        .collect()
}
