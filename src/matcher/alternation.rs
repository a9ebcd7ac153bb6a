use regex::Regex;

use super::params::{Params, WILDCARD_KEY};
use crate::radix::{Node, RadixError, RadixResult, StaticMap, Tree};

/// What a capture group in the alternation pattern stands for. Group `i + 1`
/// of the compiled pattern is described by `roles[i]`.
#[derive(Debug)]
enum GroupRole<'t> {
    /// End-anchored empty marker group; participation selects this store.
    Marker(u32),
    Param(&'t str),
    Wildcard,
}

/// The alternation backend: the whole trie lowered into one anchored regex,
/// with a role table resolving the participating groups back to a store and
/// its captures. Named groups cannot be reused across alternatives, so
/// captures are positional.
#[derive(Debug)]
pub struct AlternationMatcher<'t, T> {
    pattern: Option<Regex>,
    roles: Vec<GroupRole<'t>>,
    stores: Vec<&'t T>,
    static_map: Option<&'t StaticMap<T>>,
}

impl<'t, T> AlternationMatcher<'t, T> {
    pub(crate) fn new(tree: &'t Tree<T>) -> RadixResult<Self> {
        let mut matcher = Self {
            pattern: None,
            roles: Vec::new(),
            stores: Vec::new(),
            static_map: tree.static_map.as_ref(),
        };

        if let Some(root) = tree.root.as_ref() {
            let mut source = String::from("(?s)^");
            matcher.fragment(root, &mut source);
            matcher.pattern = Some(Regex::new(&source).map_err(|err| {
                RadixError::AlternationBuild {
                    reason: err.to_string(),
                }
            })?);
        }

        Ok(matcher)
    }

    /// Emits the pattern fragment for one node: escaped literal part followed
    /// by the alternation of its terminals and edges, in precedence order
    /// (store, literal children, parameter, wildcard). Leftmost-first
    /// alternation preserves the tree's precedence.
    fn fragment(&mut self, node: &'t Node<T>, out: &mut String) {
        out.push_str(&regex::escape(&node.part));

        let mut parts: Vec<String> = Vec::new();

        if let Some(value) = &node.store {
            parts.push(self.marker(value));
        }

        if let Some(children) = &node.inert {
            let mut ordered: Vec<&'t Node<T>> = children.values().map(Box::as_ref).collect();
            ordered.sort_unstable_by_key(|child| child.first_byte());
            for child in ordered {
                let mut sub = String::new();
                self.fragment(child, &mut sub);
                parts.push(sub);
            }
        }

        if let Some(edge) = &node.param {
            let mut sub = String::from("([^/]+)");
            self.roles.push(GroupRole::Param(&edge.name));

            let mut tails: Vec<String> = Vec::new();
            if let Some(value) = &edge.store {
                tails.push(self.marker(value));
            }
            if let Some(continuation) = &edge.inert {
                let mut tail = String::new();
                self.fragment(continuation, &mut tail);
                tails.push(tail);
            }

            if !tails.is_empty() {
                sub.push_str(&merge_alternatives(tails));
                parts.push(sub);
            } else {
                // An edge with neither store nor continuation matches nothing
                self.roles.pop();
            }
        }

        if let Some(value) = &node.wildcard_store {
            self.roles.push(GroupRole::Wildcard);
            let mut sub = String::from("(.*)");
            sub.push_str(&self.marker(value));
            parts.push(sub);
        }

        out.push_str(&merge_alternatives(parts));
    }

    fn marker(&mut self, value: &'t T) -> String {
        let slot = self.stores.len() as u32;
        self.stores.push(value);
        self.roles.push(GroupRole::Marker(slot));
        String::from("$()")
    }

    pub(crate) fn lookup(&self, path: &str, params: &mut Params<'t>) -> Option<&'t T> {
        if let Some(map) = self.static_map
            && let Some(value) = map.get(path)
        {
            return Some(value);
        }

        let captures = self.pattern.as_ref()?.captures(path)?;

        // Every participating group belongs to the single winning parse; its
        // captures precede its end marker in group order.
        let checkpoint = params.checkpoint();
        for (i, role) in self.roles.iter().enumerate() {
            let Some(group) = captures.get(i + 1) else {
                continue;
            };
            match role {
                GroupRole::Param(name) => {
                    params.push(name, (group.start(), group.end() - group.start()));
                }
                GroupRole::Wildcard => {
                    params.push(WILDCARD_KEY, (group.start(), group.end() - group.start()));
                }
                GroupRole::Marker(slot) => {
                    return Some(self.stores[*slot as usize]);
                }
            }
        }

        // A pattern match without a participating marker cannot happen; keep
        // the sink clean if it ever does.
        params.truncate(checkpoint);
        None
    }
}

fn merge_alternatives(parts: Vec<String>) -> String {
    match parts.len() {
        0 => String::new(),
        1 => parts.into_iter().next().unwrap_or_default(),
        _ => {
            let mut merged = String::from("(?:");
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    merged.push('|');
                }
                merged.push_str(part);
            }
            merged.push(')');
            merged
        }
    }
}
