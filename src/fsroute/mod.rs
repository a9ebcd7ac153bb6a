mod style;

pub use style::PathStyle;

use crate::matcher::{MatchOptions, Matcher};
use crate::radix::{RadixResult, Tree};

/// Builds a route tree from filesystem paths. Each scanned path is rewritten
/// by the chosen style and registered with the value `info` produces for it;
/// paths the style cannot express are skipped.
#[derive(Debug, Default)]
pub struct FsRouter<T> {
    tree: Tree<T>,
}

impl<T> FsRouter<T> {
    pub fn scan<I, S, F>(paths: I, style: PathStyle, mut info: F) -> RadixResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str) -> T,
    {
        tracing::event!(tracing::Level::TRACE, operation = "scan_fs_routes");

        let mut tree = Tree::new();
        for path in paths {
            let path = path.as_ref();
            if let Some(route) = style.transform(path) {
                tree.store(&route, info(path))?;
            }
        }
        Ok(Self { tree })
    }

    #[inline]
    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }

    pub fn matcher(&self, options: MatchOptions) -> RadixResult<Matcher<'_, T>> {
        self.tree.matcher(options, None)
    }
}
