use serde::{Deserialize, Serialize};

/// How a filesystem path is rewritten into a route path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PathStyle {
    /// Rewrites bracket segments: `[id]` becomes `:id` and `[...rest]`
    /// becomes a trailing wildcard. Strips the file extension and folds a
    /// trailing `/index` into its directory.
    #[default]
    Basic,
    /// Keeps the normalized path as-is, extension included.
    Preserve,
}

impl PathStyle {
    /// Turns a filesystem path into a route path, or `None` when the path
    /// cannot be expressed as a route (unbalanced brackets).
    pub fn transform(self, path: &str) -> Option<String> {
        let normalized = normalize_separators(path);
        match self {
            Self::Preserve => Some(normalized),
            Self::Basic => transform_basic(&normalized),
        }
    }
}

/// Collapses backslashes and doubled slashes and guarantees a leading `/`.
fn normalize_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    let mut last_was_slash = false;
    for ch in path.chars() {
        let ch = if ch == '\\' { '/' } else { ch };
        if ch == '/' {
            if last_was_slash {
                continue;
            }
            last_was_slash = true;
        } else {
            last_was_slash = false;
        }
        out.push(ch);
    }
    if !out.starts_with('/') {
        out.insert(0, '/');
    }
    out
}

fn transform_basic(path: &str) -> Option<String> {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        let inner = &rest[open + 1..];
        let close = inner.find(']')?;
        let name = &inner[..close];
        if name.starts_with("...") {
            // A rest segment swallows everything after it.
            out.push('*');
            return Some(finish_basic(out));
        }
        out.push(':');
        out.push_str(name);
        rest = &inner[close + 1..];
    }
    if rest.contains(']') {
        return None;
    }
    out.push_str(rest);

    strip_extension(&mut out);
    Some(finish_basic(out))
}

/// Drops the extension of the final segment, when it has one.
fn strip_extension(path: &mut String) {
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);
    if let Some(dot) = path[segment_start..].rfind('.')
        && dot > 0
    {
        path.truncate(segment_start + dot);
    }
}

/// Folds `/index` into its directory and trims trailing slashes, keeping the
/// root as `/`.
fn finish_basic(mut path: String) -> String {
    if let Some(stem) = path.strip_suffix("/index") {
        path.truncate(stem.len());
    }
    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}
