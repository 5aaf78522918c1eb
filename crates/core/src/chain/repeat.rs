use crate::config::RepeatConfig;
use crate::decorator::{Decorator, DecoratorExt};
use crate::invoke::Invoke;
use crate::repr::Repr;

/// Runs the target `count` times per call and reports every result.
#[derive(Clone, Copy, Debug)]
pub struct RepeatDecorator {
    config: RepeatConfig,
}

impl RepeatDecorator {
    pub fn new(config: RepeatConfig) -> Self {
        Self { config }
    }
}

impl DecoratorExt for RepeatDecorator {}

impl<F> Decorator<F> for RepeatDecorator {
    type Wrapped = Repeated<F>;

    fn decorate(&self, target: F) -> Repeated<F> {
        Repeated {
            count: self.config.count,
            inner: target,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Repeated<F> {
    count: usize,
    inner: F,
}

impl<F, Args> Invoke<Args> for Repeated<F>
where
    F: Invoke<Args>,
    F::Output: Repr,
    Args: Clone,
{
    type Output = String;

    /// Returns `outer_dec [r1, r2, ...]` with results in call order.
    fn invoke(&self, args: Args) -> String {
        let results: Vec<F::Output> = (0..self.count)
            .map(|_| self.inner.invoke(args.clone()))
            .collect();
        format!("outer_dec {}", results.repr())
    }
}
