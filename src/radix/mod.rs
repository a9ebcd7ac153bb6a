mod error;
mod insert;
mod merge;
mod node;
mod tree;

pub use error::{RadixError, RadixResult};
pub use node::{Node, ParamEdge};
pub use tree::Tree;

pub(crate) use tree::StaticMap;
