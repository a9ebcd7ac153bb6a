use hashbrown::hash_map::Entry;

use super::node::{InertMap, Node, ParamEdge};
use super::{RadixError, RadixResult};

impl<T> Node<T> {
    /// Registers a child under its first byte, recursively merging with an
    /// existing child sharing that byte.
    pub(crate) fn set_inert(&mut self, child: Node<T>) -> RadixResult<()> {
        let key = child.first_byte();
        let children = self.inert.get_or_insert_with(InertMap::default);

        match children.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(Box::new(child));
                Ok(())
            }
            Entry::Occupied(existing) => existing.into_mut().merge_with_inert(child),
        }
    }

    /// Grafts a donor tree's root onto this node (the mount point obtained by
    /// the base-path walk). The mount point adopts a donor root store as its
    /// own terminal; everything else hangs off the donor root's separator
    /// part, which becomes an ordinary literal child here.
    pub(crate) fn merge_with_root(&mut self, mut donor: Node<T>) -> RadixResult<()> {
        if self.part.ends_with('/') {
            // Mounting at `/`: both sides are already separator-terminated
            return self.merge_exact(donor);
        }

        if self.store.is_none() {
            self.store = donor.store.take();
        }

        self.set_inert(donor)
    }

    /// Merges a donor node sharing this node's first byte, splitting on the
    /// common prefix as needed.
    pub(crate) fn merge_with_inert(&mut self, donor: Node<T>) -> RadixResult<()> {
        if self.part == donor.part {
            return self.merge_exact(donor);
        }

        let shared = common_prefix_end(&self.part, &donor.part);

        if shared == self.part.len() {
            // self "ab", donor "abc": donor remainder becomes a child
            let mut rest = donor;
            rest.part = rest.part[shared..].into();
            return self.set_inert(rest);
        }

        if shared == donor.part.len() {
            // self "abc", donor "ab": donor takes this position, old self
            // hangs off it with the remainder
            let mut old = std::mem::replace(self, donor);
            old.part = old.part[shared..].into();
            return self.set_inert(old);
        }

        // "abc" vs "abd": keep the shared prefix, both remainders as children
        self.split_at(shared);
        let mut rest = donor;
        rest.part = rest.part[shared..].into();
        self.set_inert(rest)
    }

    /// Field-by-field merge of two nodes occupying the same position. Stores
    /// are first-wins, children are unioned, parametric edges must agree on
    /// the name.
    pub(crate) fn merge_exact(&mut self, donor: Node<T>) -> RadixResult<()> {
        let Node {
            part: _,
            store,
            inert,
            param,
            wildcard_store,
        } = donor;

        if self.store.is_none() {
            self.store = store;
        }
        if self.wildcard_store.is_none() {
            self.wildcard_store = wildcard_store;
        }

        if let Some(children) = inert {
            if self.inert.is_none() {
                self.inert = Some(children);
            } else {
                for (_, child) in children {
                    self.set_inert(*child)?;
                }
            }
        }

        if let Some(donor_edge) = param {
            match &mut self.param {
                None => self.param = Some(donor_edge),
                Some(edge) => edge.merge(*donor_edge)?,
            }
        }

        Ok(())
    }
}

impl<T> ParamEdge<T> {
    /// Merges two parametric edges at the same position; different names are
    /// a merge conflict, never an overwrite.
    pub(crate) fn merge(&mut self, donor: ParamEdge<T>) -> RadixResult<()> {
        if self.name != donor.name {
            return Err(RadixError::MergeParamConflict {
                existing: self.name.to_string(),
                given: donor.name.to_string(),
            });
        }

        if self.store.is_none() {
            self.store = donor.store;
        }

        if let Some(donor_inert) = donor.inert {
            match &mut self.inert {
                None => self.inert = Some(donor_inert),
                Some(inert) => inert.merge_with_inert(*donor_inert)?,
            }
        }

        Ok(())
    }

    /// Grafts a donor root onto a parametric graft point (a mount path ending
    /// in a parameter).
    pub(crate) fn merge_with_root(&mut self, donor: Node<T>) -> RadixResult<()> {
        match &mut self.inert {
            None => {
                self.inert = Some(Box::new(donor));
                Ok(())
            }
            Some(inert) => inert.merge_with_root(donor),
        }
    }
}

fn common_prefix_end(part: &str, other: &str) -> usize {
    let (a, b) = (part.as_bytes(), other.as_bytes());
    let min = a.len().min(b.len());

    // First bytes are equal by construction (same child slot)
    let mut i = 1;
    while i < min && a[i] == b[i] {
        i += 1;
    }
    i
}
