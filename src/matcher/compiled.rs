use memchr::memchr;
use smallvec::SmallVec;

use super::params::{Params, WILDCARD_KEY};
use crate::radix::{Node, StaticMap, Tree};

/// One lowered node: the literal tail (first byte hoisted into the parent's
/// dispatch table), pre-resolved child indices, and store-table indices for
/// the terminals. The root keeps its full part since nothing dispatches it.
#[derive(Debug)]
struct CompiledNode<'t> {
    tail: &'t [u8],
    children: SmallVec<[(u8, u32); 4]>,
    store: Option<u32>,
    param: Option<CompiledParamEdge<'t>>,
    wildcard: Option<u32>,
}

#[derive(Debug)]
struct CompiledParamEdge<'t> {
    name: &'t str,
    store: Option<u32>,
    continuation: Option<u32>,
}

/// Build-time lowering of the tree into a flat dispatch arena. Matching
/// re-derives nothing per request: parts, child bytes and store slots were
/// all resolved when the matcher was built. Behavior is identical to
/// [`TreeWalker`](super::walker::TreeWalker) by construction and by test.
#[derive(Debug)]
pub struct CompiledMatcher<'t, T> {
    nodes: Vec<CompiledNode<'t>>,
    stores: Vec<&'t T>,
    static_map: Option<&'t StaticMap<T>>,
}

impl<'t, T> CompiledMatcher<'t, T> {
    pub(crate) fn new(tree: &'t Tree<T>) -> Self {
        let mut matcher = Self {
            nodes: Vec::new(),
            stores: Vec::new(),
            static_map: tree.static_map.as_ref(),
        };

        if let Some(root) = tree.root.as_ref() {
            matcher.lower(root, false);
        }
        matcher
    }

    /// Flattens a node pre-order, reserving its slot before descending so
    /// child indices are known when the record is written.
    fn lower(&mut self, node: &'t Node<T>, skip_first: bool) -> u32 {
        let index = self.nodes.len() as u32;
        self.nodes.push(CompiledNode {
            tail: &[],
            children: SmallVec::new(),
            store: None,
            param: None,
            wildcard: None,
        });

        let part = node.part.as_bytes();
        let tail = if skip_first { &part[1..] } else { part };
        let store = node.store.as_ref().map(|value| self.intern(value));
        let wildcard = node.wildcard_store.as_ref().map(|value| self.intern(value));

        let mut children: SmallVec<[(u8, u32); 4]> = SmallVec::new();
        if let Some(inert) = &node.inert {
            for (&byte, child) in inert.iter() {
                children.push((byte, self.lower(child, true)));
            }
            children.sort_unstable_by_key(|&(byte, _)| byte);
        }

        let param = node.param.as_ref().map(|edge| CompiledParamEdge {
            name: &edge.name,
            store: edge.store.as_ref().map(|value| self.intern(value)),
            // The continuation always begins with the separator the capture
            // stopped at, so its first byte is pre-verified too
            continuation: edge.inert.as_ref().map(|node| self.lower(node, true)),
        });

        self.nodes[index as usize] = CompiledNode {
            tail,
            children,
            store,
            param,
            wildcard,
        };
        index
    }

    fn intern(&mut self, value: &'t T) -> u32 {
        let index = self.stores.len() as u32;
        self.stores.push(value);
        index
    }

    pub(crate) fn lookup(&self, path: &str, params: &mut Params<'t>) -> Option<&'t T> {
        if let Some(map) = self.static_map
            && let Some(value) = map.get(path)
        {
            return Some(value);
        }

        if self.nodes.is_empty() {
            return None;
        }

        self.run(0, path.as_bytes(), 0, params)
            .map(|slot| self.stores[slot as usize])
    }

    fn run(&self, index: u32, path: &[u8], offset: usize, params: &mut Params<'t>) -> Option<u32> {
        let node = &self.nodes[index as usize];

        let end = offset + node.tail.len();
        if end > path.len() || &path[offset..end] != node.tail {
            return None;
        }

        if end == path.len() {
            if let Some(slot) = node.store {
                return Some(slot);
            }
        } else if let Ok(at) = node
            .children
            .binary_search_by_key(&path[end], |&(byte, _)| byte)
        {
            let checkpoint = params.checkpoint();
            let (_, child) = node.children[at];
            if let Some(slot) = self.run(child, path, end + 1, params) {
                return Some(slot);
            }
            params.truncate(checkpoint);
        }

        if let Some(edge) = &node.param
            && end < path.len()
        {
            match memchr(b'/', &path[end..]) {
                None => {
                    if let Some(slot) = edge.store {
                        params.push(edge.name, (end, path.len() - end));
                        return Some(slot);
                    }
                }
                Some(0) => {}
                Some(rel) => {
                    if let Some(continuation) = edge.continuation {
                        let checkpoint = params.checkpoint();
                        params.push(edge.name, (end, rel));
                        if let Some(slot) = self.run(continuation, path, end + rel + 1, params) {
                            return Some(slot);
                        }
                        params.truncate(checkpoint);
                    }
                }
            }
        }

        if let Some(slot) = node.wildcard {
            params.push(WILDCARD_KEY, (end, path.len() - end));
            return Some(slot);
        }

        None
    }
}
