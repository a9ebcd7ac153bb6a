use hashbrown::hash_map::Entry;

use super::node::{InertMap, Node, ParamEdge};
use super::{RadixError, RadixResult};
use crate::path::split_route_path;

/// Where a registration walk ended: either on a node (literal or wildcard
/// terminal) or on a trailing parametric edge.
pub(crate) enum Placement<'a, T> {
    Inert(&'a mut Node<T>),
    Param(&'a mut ParamEdge<T>),
}

impl<T> Node<T> {
    /// Walks/extends the trie for `path` (leading `/`, wildcard marker
    /// already stripped) and returns the terminal placement. Parameter names
    /// are validated up front, before any mutation; a name conflict aborts
    /// mid-walk, leaving at most store-less skeleton nodes behind.
    pub(crate) fn insert_path(&mut self, path: &str) -> RadixResult<Placement<'_, T>> {
        let parts = split_route_path(path);
        for name in &parts.param_names {
            validate_param_name(name, path)?;
        }

        let mut node: &mut Node<T> = self;

        for (i, segment) in parts.inert_parts.iter().enumerate() {
            if i > 0 {
                let edge = node.param_edge(parts.param_names[i - 1])?;
                let was_empty = edge.inert.is_none();
                let child = edge.inert.get_or_insert_with(|| Box::new(Node::new(segment)));
                node = child.as_mut();
                if was_empty {
                    // Fresh continuation already carries the whole segment
                    continue;
                }
            }

            node = walk_segment(node, segment);
        }

        if parts.param_names.len() >= parts.inert_parts.len() {
            // Trailing parameter, no literal after it
            let edge = node.param_edge(parts.param_names[parts.inert_parts.len() - 1])?;
            return Ok(Placement::Param(edge));
        }

        Ok(Placement::Inert(node))
    }
}

/// Byte-by-byte walk of one literal segment: descend into children on
/// exhausting a node's part, split on divergence, shorten the node when the
/// segment ends inside it.
fn walk_segment<'a, T>(mut node: &'a mut Node<T>, segment: &str) -> &'a mut Node<T> {
    let mut seg = segment;
    let mut j = 0usize;

    loop {
        if j == seg.len() {
            if j < node.part.len() {
                // Segment ends inside this node's part; move the node down
                node.split_at(j);
            }
            return node;
        }

        if j == node.part.len() {
            let key = seg.as_bytes()[j];
            let children = node.inert.get_or_insert_with(InertMap::default);

            match children.entry(key) {
                Entry::Occupied(existing) => {
                    // Re-run the loop against the existing child
                    node = existing.into_mut().as_mut();
                    seg = &seg[j..];
                    j = 0;
                    continue;
                }
                Entry::Vacant(slot) => {
                    return slot.insert(Box::new(Node::new(&seg[j..]))).as_mut();
                }
            }
        }

        if seg.as_bytes()[j] != node.part.as_bytes()[j] {
            // Divergence: keep the shared prefix, hang both remainders off it
            node.split_at(j);
            let key = seg.as_bytes()[j];
            let children = node.inert.get_or_insert_with(InertMap::default);

            return match children.entry(key) {
                Entry::Vacant(slot) => slot.insert(Box::new(Node::new(&seg[j..]))).as_mut(),
                Entry::Occupied(existing) => existing.into_mut().as_mut(),
            };
        }

        j += 1;
    }
}

pub(crate) fn validate_param_name(name: &str, path: &str) -> RadixResult<()> {
    let invalid = || RadixError::InvalidParamName {
        name: name.to_string(),
        path: path.to_string(),
    };

    if name.is_empty() || name == crate::matcher::WILDCARD_KEY {
        return Err(invalid());
    }

    let bytes = name.as_bytes();
    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return Err(invalid());
    }

    for &b in &bytes[1..] {
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return Err(invalid());
        }
    }

    Ok(())
}
