//! Decorators and their explicit composition.

/// Wraps a target, producing a new callable with augmented behavior.
pub trait Decorator<F> {
    type Wrapped;

    fn decorate(&self, target: F) -> Self::Wrapped;
}

/// Two decorators applied in sequence, `inner` first.
#[derive(Clone, Debug)]
pub struct Composed<D1, D2> {
    inner: D1,
    outer: D2,
}

impl<D1, D2> Composed<D1, D2> {
    pub fn new(inner: D1, outer: D2) -> Self {
        Self { inner, outer }
    }
}

impl<F, D1, D2> Decorator<F> for Composed<D1, D2>
where
    D1: Decorator<F>,
    D2: Decorator<D1::Wrapped>,
{
    type Wrapped = D2::Wrapped;

    fn decorate(&self, target: F) -> Self::Wrapped {
        let wrapped = self.inner.decorate(target);
        self.outer.decorate(wrapped)
    }
}

/// Chaining for decorators, read innermost first.
pub trait DecoratorExt: Sized {
    /// Apply `outer` on top of whatever this decorator produces.
    fn then<D>(self, outer: D) -> Composed<Self, D> {
        Composed::new(self, outer)
    }
}

impl<D1, D2> DecoratorExt for Composed<D1, D2> {}
