mod service;

pub use service::{Dispatcher, Handler, RequestParts, Router};
