use smallvec::SmallVec;
use std::collections::HashMap;

/// Reserved capture key for the wildcard remainder.
pub const WILDCARD_KEY: &str = "$";

/// Capture as (offset, length) into the matched path.
pub type ParamSpan = (usize, usize);

/// Caller-supplied parameter sink. Entries are span captures borrowing their
/// names from the matcher's tree; values are materialized on demand against
/// the matched path. Per-call state: never share one sink between concurrent
/// match calls.
#[derive(Debug, Default, Clone)]
pub struct Params<'t> {
    entries: SmallVec<[(&'t str, ParamSpan); 4]>,
}

impl<'t> Params<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'t str, ParamSpan)> + '_ {
        self.entries.iter().copied()
    }

    /// Span captured for `name`; the deepest write along the matched spine
    /// wins when a name repeats.
    pub fn get(&self, name: &str) -> Option<ParamSpan> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|&(_, span)| span)
    }

    /// Captured text for `name` sliced out of the matched path.
    pub fn value<'p>(&self, path: &'p str, name: &str) -> Option<&'p str> {
        let (start, len) = self.get(name)?;
        let end = start.checked_add(len)?;
        path.get(start..end)
    }

    /// Materializes every capture into an owned map.
    pub fn to_map(&self, path: &str) -> HashMap<String, String> {
        let mut map = HashMap::with_capacity(self.entries.len());
        for &(name, (start, len)) in &self.entries {
            let end = start.saturating_add(len);
            if end <= path.len() {
                map.insert(name.to_string(), path[start..end].to_string());
            }
        }
        map
    }

    #[inline]
    pub(crate) fn push(&mut self, name: &'t str, span: ParamSpan) {
        self.entries.push((name, span));
    }

    #[inline]
    pub(crate) fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn truncate(&mut self, checkpoint: usize) {
        self.entries.truncate(checkpoint);
    }
}
