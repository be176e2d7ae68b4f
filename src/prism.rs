//! Partial-extraction combinators.
//!
//! A [`Prism`] can potentially extract a narrower value from a source value,
//! with failure signalled by `None` rather than an error. The combinators
//! compose prisms the way iterator adapters compose iterators: each adapter
//! is a small struct wrapping its parts, so composition carries no dynamic
//! dispatch and evaluates nothing it does not need.
//!
//! This module has no dependency on the AST; the node-shaped prisms live in
//! [`crate::ast::prisms`].

/// A partial function from `&S` to `Option<Self::Out>`.
///
/// Any `Fn(&S) -> Option<T>` closure or fn item is a prism, so the leaf
/// extractors can stay plain functions while still composing through the
/// adapter methods.
pub trait Prism<S> {
    type Out;

    /// Attempts the extraction. `None` means "no match", never an error.
    fn preview(&self, source: &S) -> Option<Self::Out>;

    /// Sequential composition: applies `self`, then feeds a success into
    /// `next`. Fails if either step fails.
    ///
    /// A.K.A. left-to-right Kleisli composition of `Option`.
    fn then<G>(self, next: G) -> Then<Self, G>
    where
        Self: Sized,
        G: Prism<Self::Out>,
    {
        Then { first: self, second: next }
    }

    /// Prioritized choice: tries `self`, and only on failure tries `other`
    /// on the original source. Left-biased and short-circuiting; `other` is
    /// not evaluated when `self` succeeds.
    fn or<G>(self, other: G) -> OrElse<Self, G>
    where
        Self: Sized,
        G: Prism<S, Out = Self::Out>,
    {
        OrElse { first: self, second: other }
    }

    /// Fan-out: applies both prisms to the same source, succeeding with the
    /// pair of results only when both succeed.
    fn fan_out<G>(self, other: G) -> FanOut<Self, G>
    where
        Self: Sized,
        G: Prism<S>,
    {
        FanOut { first: self, second: other }
    }

    /// Constrains `self` by `test`: succeeds with `self`'s result iff
    /// applying `test` to that result also succeeds. The tested value is
    /// inspected, not consumed or replaced.
    fn containing<G>(self, test: G) -> Containing<Self, G>
    where
        Self: Sized,
        G: Prism<Self::Out>,
    {
        Containing { first: self, second: test }
    }

    /// Post-maps a successful extraction through a total function.
    fn map<U, M>(self, mapper: M) -> MapOut<Self, M>
    where
        Self: Sized,
        M: Fn(Self::Out) -> U,
    {
        MapOut { prism: self, mapper }
    }
}

impl<S, T, F> Prism<S> for F
where
    F: Fn(&S) -> Option<T>,
{
    type Out = T;

    fn preview(&self, source: &S) -> Option<T> {
        self(source)
    }
}

/// See [`Prism::then`].
pub struct Then<F, G> {
    first: F,
    second: G,
}

impl<S, F, G> Prism<S> for Then<F, G>
where
    F: Prism<S>,
    G: Prism<F::Out>,
{
    type Out = G::Out;

    fn preview(&self, source: &S) -> Option<G::Out> {
        self.first
            .preview(source)
            .and_then(|mid| self.second.preview(&mid))
    }
}

/// See [`Prism::or`].
pub struct OrElse<F, G> {
    first: F,
    second: G,
}

impl<S, F, G> Prism<S> for OrElse<F, G>
where
    F: Prism<S>,
    G: Prism<S, Out = F::Out>,
{
    type Out = F::Out;

    fn preview(&self, source: &S) -> Option<F::Out> {
        self.first
            .preview(source)
            .or_else(|| self.second.preview(source))
    }
}

/// See [`Prism::fan_out`].
pub struct FanOut<F, G> {
    first: F,
    second: G,
}

impl<S, F, G> Prism<S> for FanOut<F, G>
where
    F: Prism<S>,
    G: Prism<S>,
{
    type Out = (F::Out, G::Out);

    fn preview(&self, source: &S) -> Option<(F::Out, G::Out)> {
        let left = self.first.preview(source)?;
        let right = self.second.preview(source)?;
        Some((left, right))
    }
}

/// See [`Prism::containing`].
pub struct Containing<F, G> {
    first: F,
    second: G,
}

impl<S, F, G> Prism<S> for Containing<F, G>
where
    F: Prism<S>,
    G: Prism<F::Out>,
{
    type Out = F::Out;

    fn preview(&self, source: &S) -> Option<F::Out> {
        self.first
            .preview(source)
            .filter(|extracted| self.second.preview(extracted).is_some())
    }
}

/// See [`Prism::map`].
pub struct MapOut<F, M> {
    prism: F,
    mapper: M,
}

impl<S, U, F, M> Prism<S> for MapOut<F, M>
where
    F: Prism<S>,
    M: Fn(F::Out) -> U,
{
    type Out = U;

    fn preview(&self, source: &S) -> Option<U> {
        self.prism.preview(source).map(&self.mapper)
    }
}

/// Accepts only values equal to `reference`.
pub fn of_value<T>(reference: T) -> impl Fn(&T) -> Option<T>
where
    T: PartialEq + Clone,
{
    move |candidate: &T| (*candidate == reference).then(|| candidate.clone())
}
