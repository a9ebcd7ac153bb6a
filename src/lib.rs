pub mod enums;
pub mod fsroute;
pub mod matcher;
pub mod path;
pub mod radix;
pub mod router;

pub use enums::{HTTP_METHOD_COUNT, HttpMethod};
pub use fsroute::{FsRouter, PathStyle};
pub use matcher::{MatchOptions, MatchStrategy, Matcher, ParamSpan, Params, WILDCARD_KEY};
pub use path::PathError;
pub use radix::{RadixError, RadixResult, Tree};
pub use router::{Dispatcher, Handler, RequestParts, Router};
