use hashbrown::HashMap as FastHashMap;

use super::insert::Placement;
use super::node::Node;
use super::{RadixError, RadixResult};
use crate::matcher::{MatchOptions, Matcher};
use crate::path::validate_route_path;

pub(crate) type StaticMap<T> = FastHashMap<Box<str>, T>;

/// The route store: a static map for fully literal paths and a radix trie
/// for everything carrying parameters or a wildcard. The two are disjoint by
/// construction. Mutable during the single-threaded registration phase only;
/// building a [`Matcher`] borrows the tree and freezes it for as long as the
/// matcher lives.
#[derive(Debug, Default)]
pub struct Tree<T> {
    pub(crate) root: Option<Node<T>>,
    pub(crate) static_map: Option<StaticMap<T>>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            static_map: None,
        }
    }

    /// Registers a route. First registration wins: storing a second value
    /// under the same path is a no-op, not an error.
    pub fn store(&mut self, path: &str, value: T) -> RadixResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "store", path = %path);
        validate_route_path(path)?;

        let is_wildcard = path.as_bytes()[path.len() - 1] == b'*';

        if !is_wildcard && !path.contains(':') {
            self.static_map
                .get_or_insert_with(StaticMap::default)
                .entry(path.into())
                .or_insert(value);
            return Ok(());
        }

        let walk_path = if is_wildcard {
            &path[..path.len() - 1]
        } else {
            path
        };

        let root = self.root.get_or_insert_with(|| Node::new("/"));
        match root.insert_path(walk_path)? {
            Placement::Inert(node) => {
                if is_wildcard {
                    node.wildcard_store.get_or_insert(value);
                } else {
                    node.store.get_or_insert(value);
                }
            }
            Placement::Param(edge) => {
                edge.store.get_or_insert(value);
            }
        }

        Ok(())
    }

    /// Mounts `donor` under `base_path`, adopting its nodes into this tree.
    /// The donor is consumed; registering `/x` into a donor and merging it
    /// under `/base` is observably identical to registering `/base/x` here
    /// directly.
    pub fn merge(&mut self, base_path: &str, donor: Tree<T>) -> RadixResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "merge", base = %base_path);

        let base = if base_path.len() > 1 && base_path.ends_with('/') {
            &base_path[..base_path.len() - 1]
        } else {
            base_path
        };
        validate_route_path(base)?;
        if base.ends_with('*') {
            return Err(RadixError::WildcardInBasePath {
                base: base_path.to_string(),
            });
        }

        let Tree {
            root: donor_root,
            static_map: donor_static,
        } = donor;

        if let Some(donor_static) = donor_static {
            if base.contains(':') {
                // Joined under a parametric base the keys are no longer
                // fully literal; they belong in the trie
                for (key, value) in donor_static {
                    self.store(&join_route_paths(base, &key), value)?;
                }
            } else {
                let map = self.static_map.get_or_insert_with(StaticMap::default);
                for (key, value) in donor_static {
                    map.entry(join_route_paths(base, &key).into_boxed_str())
                        .or_insert(value);
                }
            }
        }

        if let Some(donor_root) = donor_root {
            let root = self.root.get_or_insert_with(|| Node::new("/"));
            match root.insert_path(base)? {
                Placement::Inert(node) => node.merge_with_root(donor_root)?,
                Placement::Param(edge) => edge.merge_with_root(donor_root)?,
            }
        }

        Ok(())
    }

    /// Builds a matcher over the frozen tree. The fallback value and every
    /// option are fixed here, once.
    pub fn matcher<'t>(
        &'t self,
        options: MatchOptions,
        fallback: Option<&'t T>,
    ) -> RadixResult<Matcher<'t, T>> {
        Matcher::build(self, options, fallback)
    }
}

/// Joins a mount path and a donor static key, collapsing the duplicate
/// separator at the seam.
fn join_route_paths(base: &str, key: &str) -> String {
    if base == "/" {
        return key.to_string();
    }
    if key == "/" {
        return base.to_string();
    }

    let mut joined = String::with_capacity(base.len() + key.len());
    joined.push_str(base);
    joined.push_str(key);
    joined
}
