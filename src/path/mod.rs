mod error;
mod split;

pub use error::{PathError, PathResult};
pub use split::{PathParts, split_route_path};

/// Validates a registration path before any tree mutation. The wildcard
/// marker has not been stripped yet, so `/a/*` passes while `/a/` does not.
pub(crate) fn validate_route_path(path: &str) -> PathResult<()> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let bytes = path.as_bytes();
    if bytes[0] != b'/' {
        return Err(PathError::MissingLeadingSlash {
            path: path.to_string(),
        });
    }

    // The trie walks and splits literal parts byte-wise; non-ASCII paths
    // could split inside a code point
    if !path.is_ascii() {
        return Err(PathError::NonAscii {
            path: path.to_string(),
        });
    }

    if bytes.len() > 1 && bytes[bytes.len() - 1] == b'/' {
        return Err(PathError::TrailingSlash {
            path: path.to_string(),
        });
    }

    Ok(())
}
