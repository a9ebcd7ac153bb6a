use hashbrown::HashMap as FastHashMap;

use super::{RadixError, RadixResult};

/// Literal children keyed by the first byte of their `part`. The insertion
/// walk keeps first bytes distinct, so dispatch is a single map probe.
pub(crate) type InertMap<T> = FastHashMap<u8, Box<Node<T>>>;

/// One trie node. `part` is the literal byte run this node matches relative
/// to its parent's end; it is never empty and the root's is `/`.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) part: Box<str>,
    pub(crate) store: Option<T>,
    pub(crate) inert: Option<InertMap<T>>,
    pub(crate) param: Option<Box<ParamEdge<T>>>,
    pub(crate) wildcard_store: Option<T>,
}

/// The single parametric edge a node may carry. The name is fixed once set;
/// a second registration with a different name at the same position is a
/// conflict, never an overwrite.
#[derive(Debug)]
pub struct ParamEdge<T> {
    pub(crate) name: Box<str>,
    pub(crate) store: Option<T>,
    pub(crate) inert: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn new(part: &str) -> Self {
        Self {
            part: part.into(),
            store: None,
            inert: None,
            param: None,
            wildcard_store: None,
        }
    }

    #[inline(always)]
    pub(crate) fn first_byte(&self) -> u8 {
        self.part.as_bytes()[0]
    }

    /// Registers a child under its first byte. Insertion guarantees the slot
    /// is free; merge goes through `set_inert` instead.
    pub(crate) fn adopt(&mut self, child: Node<T>) {
        let key = child.first_byte();
        self.inert
            .get_or_insert_with(InertMap::default)
            .insert(key, Box::new(child));
    }

    /// Shortens this node to `part[..at]` and moves everything it held
    /// (store, children, edges) into a new child carrying the remainder.
    pub(crate) fn split_at(&mut self, at: usize) {
        let remainder = Node {
            part: self.part[at..].into(),
            store: self.store.take(),
            inert: self.inert.take(),
            param: self.param.take(),
            wildcard_store: self.wildcard_store.take(),
        };

        self.part = self.part[..at].into();
        self.adopt(remainder);
    }

    /// Fetches or creates the parametric edge, rejecting a name mismatch.
    pub(crate) fn param_edge(&mut self, name: &str) -> RadixResult<&mut ParamEdge<T>> {
        let edge = self.param.get_or_insert_with(|| {
            Box::new(ParamEdge {
                name: name.into(),
                store: None,
                inert: None,
            })
        });

        if &*edge.name != name {
            return Err(RadixError::ParamNameConflict {
                existing: edge.name.to_string(),
                given: name.to_string(),
            });
        }

        Ok(edge)
    }
}
