mod alternation;
mod compiled;
mod params;
mod walker;

pub use params::{ParamSpan, Params, WILDCARD_KEY};

use alternation::AlternationMatcher;
use compiled::CompiledMatcher;
use walker::TreeWalker;

use crate::radix::{RadixResult, Tree};

/// Which backend a build produces. All three are observably identical; they
/// trade construction cost against per-request cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum MatchStrategy {
    /// Direct tree walk, the reference semantics.
    Interpreted,
    /// Flat pre-resolved dispatch arena.
    #[default]
    Compiled,
    /// Single regex alternation; cheapest to build.
    Alternation,
}

/// Build-time configuration, fixed once per matcher. Threaded explicitly
/// through build calls; nothing is mutated behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct MatchOptions {
    pub strategy: MatchStrategy,
    /// Whether the orchestrator should invoke a matched value as a handler
    /// rather than hand it back. Consulted by the router layer; a bare
    /// matcher over an opaque `T` always hands the value back.
    pub invoke_result: bool,
}

#[derive(Debug)]
enum Backend<'t, T> {
    Interpreted(TreeWalker<'t, T>),
    Compiled(CompiledMatcher<'t, T>),
    Alternation(AlternationMatcher<'t, T>),
}

/// A built matcher: a pure function of the request path. Borrows the tree it
/// was built from, freezing it; safe for unrestricted concurrent calls since
/// the only mutable state is the caller's own sink.
#[derive(Debug)]
pub struct Matcher<'t, T> {
    backend: Backend<'t, T>,
    fallback: Option<&'t T>,
    options: MatchOptions,
}

impl<'t, T> Matcher<'t, T> {
    pub(crate) fn build(
        tree: &'t Tree<T>,
        options: MatchOptions,
        fallback: Option<&'t T>,
    ) -> RadixResult<Self> {
        tracing::event!(tracing::Level::TRACE, operation = "build_matcher", strategy = ?options.strategy);

        let backend = match options.strategy {
            MatchStrategy::Interpreted => Backend::Interpreted(TreeWalker::new(tree)),
            MatchStrategy::Compiled => Backend::Compiled(CompiledMatcher::new(tree)),
            MatchStrategy::Alternation => Backend::Alternation(AlternationMatcher::new(tree)?),
        };

        Ok(Self {
            backend,
            fallback,
            options,
        })
    }

    /// Resolves a path to its registered value, writing captures into the
    /// sink. The sink is cleared first, so a successful result carries
    /// exactly the winning route's captures. A miss yields the fallback
    /// fixed at build time; captures left in the sink after a miss carry no
    /// meaning.
    pub fn find(&self, path: &str, params: &mut Params<'t>) -> Option<&'t T> {
        params.clear();

        let hit = match &self.backend {
            Backend::Interpreted(walker) => walker.lookup(path, params),
            Backend::Compiled(compiled) => compiled.lookup(path, params),
            Backend::Alternation(alternation) => alternation.lookup(path, params),
        };

        hit.or(self.fallback)
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }
}
