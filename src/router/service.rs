use crate::enums::{HTTP_METHOD_COUNT, HttpMethod};
use crate::matcher::{MatchOptions, Matcher, Params};
use crate::radix::{RadixResult, Tree};

/// The minimal request view handed to an invoked handler.
#[derive(Debug)]
pub struct RequestParts<'p, 't> {
    pub path: &'p str,
    pub params: &'p Params<'t>,
}

/// A value the dispatcher can invoke when `invoke_result` is set.
pub trait Handler {
    type Output;

    fn invoke(&self, request: &RequestParts<'_, '_>) -> Self::Output;
}

impl<F, R> Handler for F
where
    F: Fn(&RequestParts<'_, '_>) -> R,
{
    type Output = R;

    fn invoke(&self, request: &RequestParts<'_, '_>) -> R {
        self(request)
    }
}

/// Per-method route trees plus a method-agnostic fallback tree plus a
/// terminal fallback value. Registration-phase object; `build` wires the
/// matchers once.
#[derive(Debug, Default)]
pub struct Router<T> {
    method_trees: [Option<Tree<T>>; HTTP_METHOD_COUNT],
    fallback_tree: Option<Tree<T>>,
    fallback_value: Option<T>,
    options: MatchOptions,
}

impl<T> Router<T> {
    pub fn new(options: MatchOptions) -> Self {
        Self {
            method_trees: std::array::from_fn(|_| None),
            fallback_tree: None,
            fallback_value: None,
            options,
        }
    }

    /// Registers a route for one method. First registration wins.
    pub fn put(&mut self, method: HttpMethod, path: &str, value: T) -> RadixResult<()> {
        self.method_trees[method.index()]
            .get_or_insert_with(Tree::new)
            .store(path, value)
    }

    /// Registers a method-agnostic route, consulted when the method tree
    /// misses.
    pub fn handle(&mut self, path: &str, value: T) -> RadixResult<()> {
        self.fallback_tree
            .get_or_insert_with(Tree::new)
            .store(path, value)
    }

    /// Sets the terminal fallback value. First registration wins.
    pub fn fallback(&mut self, value: T) {
        self.fallback_value.get_or_insert(value);
    }

    /// Mounts another router under `base`, merging every corresponding tree.
    /// The other router is consumed.
    pub fn mount(&mut self, base: &str, other: Router<T>) -> RadixResult<()> {
        let Router {
            method_trees,
            fallback_tree,
            fallback_value,
            options: _,
        } = other;

        for (slot, donor) in self.method_trees.iter_mut().zip(method_trees) {
            if let Some(donor) = donor {
                match slot {
                    None => {
                        let mut tree = Tree::new();
                        tree.merge(base, donor)?;
                        *slot = Some(tree);
                    }
                    Some(tree) => tree.merge(base, donor)?,
                }
            }
        }

        if let Some(donor) = fallback_tree {
            self.fallback_tree
                .get_or_insert_with(Tree::new)
                .merge(base, donor)?;
        }

        if self.fallback_value.is_none() {
            self.fallback_value = fallback_value;
        }

        Ok(())
    }

    /// Builds one matcher per populated tree. Dispatch afterwards is method
    /// lookup, matcher call, fallback chain; nothing is rebuilt per request.
    pub fn build(&self) -> RadixResult<Dispatcher<'_, T>> {
        tracing::event!(tracing::Level::TRACE, operation = "build_router");

        let mut matchers: [Option<Matcher<'_, T>>; HTTP_METHOD_COUNT] =
            std::array::from_fn(|_| None);
        for (slot, tree) in matchers.iter_mut().zip(&self.method_trees) {
            if let Some(tree) = tree {
                *slot = Some(tree.matcher(self.options, None)?);
            }
        }

        let fallback_matcher = match &self.fallback_tree {
            Some(tree) => Some(tree.matcher(self.options, None)?),
            None => None,
        };

        Ok(Dispatcher {
            matchers,
            fallback_matcher,
            fallback_value: self.fallback_value.as_ref(),
            options: self.options,
        })
    }
}

/// The built dispatch surface: method matcher falls back to the
/// method-agnostic matcher, which falls back to the terminal value.
#[derive(Debug)]
pub struct Dispatcher<'t, T> {
    matchers: [Option<Matcher<'t, T>>; HTTP_METHOD_COUNT],
    fallback_matcher: Option<Matcher<'t, T>>,
    fallback_value: Option<&'t T>,
    options: MatchOptions,
}

impl<'t, T> Dispatcher<'t, T> {
    /// Resolves a request to its value. Misses walk the fallback chain; a
    /// `None` means not even a terminal fallback was configured.
    pub fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        params: &mut Params<'t>,
    ) -> Option<&'t T> {
        if let Some(matcher) = &self.matchers[method.index()]
            && let Some(value) = matcher.find(path, params)
        {
            return Some(value);
        }

        if let Some(matcher) = &self.fallback_matcher
            && let Some(value) = matcher.find(path, params)
        {
            return Some(value);
        }

        self.fallback_value
    }

    #[inline]
    pub fn options(&self) -> MatchOptions {
        self.options
    }
}

impl<'t, T: Handler> Dispatcher<'t, T> {
    /// Dispatches and invokes the matched value with the request parts; the
    /// entry point for routers built with `invoke_result`.
    pub fn call(
        &self,
        method: HttpMethod,
        path: &str,
        params: &mut Params<'t>,
    ) -> Option<T::Output> {
        let value = self.dispatch(method, path, params)?;
        let request = RequestParts { path, params };
        Some(value.invoke(&request))
    }
}
