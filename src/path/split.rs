use memchr::memchr;
use smallvec::SmallVec;

/// Registration path split into alternating literal segments and parameter
/// names: `segment[0] :name[0] segment[1] :name[1] ...`. An empty literal
/// between two adjacent parameters (or before the first one) is omitted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PathParts<'p> {
    pub inert_parts: SmallVec<[&'p str; 8]>,
    pub param_names: SmallVec<[&'p str; 4]>,
}

/// Splits a registration path in one left-to-right pass. The trailing `*`
/// marker must be stripped by the caller beforehand. Parameter name format is
/// not checked here; the tree validates names before mutating anything.
pub fn split_route_path(path: &str) -> PathParts<'_> {
    let mut parts = PathParts::default();
    let bytes = path.as_bytes();

    let mut start = 0usize;
    let mut colon = memchr(b':', bytes);

    while let Some(at) = colon {
        if at != start {
            parts.inert_parts.push(&path[start..at]);
        }

        let Some(rel) = memchr(b'/', &bytes[at + 1..]) else {
            // Trailing parameter, nothing left to scan
            parts.param_names.push(&path[at + 1..]);
            return parts;
        };

        let boundary = at + 1 + rel;
        parts.param_names.push(&path[at + 1..boundary]);

        start = boundary;
        colon = memchr(b':', &bytes[boundary + 1..]).map(|r| boundary + 1 + r);
    }

    parts.inert_parts.push(&path[start..]);
    parts
}
