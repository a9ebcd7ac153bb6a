use memchr::memchr;

use super::params::{Params, WILDCARD_KEY};
use crate::radix::{Node, StaticMap, Tree};

/// The reference backend: a direct walk of the tree. Every other backend is
/// required to be observably identical to this one.
#[derive(Debug)]
pub struct TreeWalker<'t, T> {
    root: Option<&'t Node<T>>,
    static_map: Option<&'t StaticMap<T>>,
}

impl<'t, T> TreeWalker<'t, T> {
    pub(crate) fn new(tree: &'t Tree<T>) -> Self {
        Self {
            root: tree.root.as_ref(),
            static_map: tree.static_map.as_ref(),
        }
    }

    pub(crate) fn lookup(&self, path: &str, params: &mut Params<'t>) -> Option<&'t T> {
        if let Some(map) = self.static_map
            && let Some(value) = map.get(path)
        {
            return Some(value);
        }

        walk(self.root?, path.as_bytes(), 0, params)
    }
}

/// One node step. Precedence at each node is store, then literal child, then
/// parametric edge, then wildcard; a failed branch falls through to the next
/// option of the same node before failure propagates to the parent.
fn walk<'t, T>(
    node: &'t Node<T>,
    path: &[u8],
    offset: usize,
    params: &mut Params<'t>,
) -> Option<&'t T> {
    let part = node.part.as_bytes();
    let end = offset + part.len();
    if end > path.len() || &path[offset..end] != part {
        return None;
    }

    if end == path.len() {
        if let Some(value) = &node.store {
            return Some(value);
        }
    } else if let Some(children) = &node.inert
        && let Some(child) = children.get(&path[end])
    {
        let checkpoint = params.checkpoint();
        if let Some(value) = walk(child, path, end, params) {
            return Some(value);
        }
        params.truncate(checkpoint);
    }

    if let Some(edge) = &node.param
        && end < path.len()
    {
        match memchr(b'/', &path[end..]) {
            None => {
                // Capture runs to the end of the path and is non-empty
                if let Some(value) = &edge.store {
                    params.push(&edge.name, (end, path.len() - end));
                    return Some(value);
                }
            }
            // An empty capture never matches the edge
            Some(0) => {}
            Some(rel) => {
                if let Some(continuation) = &edge.inert {
                    let checkpoint = params.checkpoint();
                    params.push(&edge.name, (end, rel));
                    if let Some(value) = walk(continuation, path, end + rel, params) {
                        return Some(value);
                    }
                    params.truncate(checkpoint);
                }
            }
        }
    }

    if let Some(value) = &node.wildcard_store {
        // The wildcard remainder may be empty
        params.push(WILDCARD_KEY, (end, path.len() - end));
        return Some(value);
    }

    None
}
