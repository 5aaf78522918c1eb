use crate::config::DocConfig;
use crate::decorator::{Decorator, DecoratorExt};
use crate::invoke::Invoke;

/// Attaches description metadata without touching call behavior.
#[derive(Clone, Debug, Default)]
pub struct DocDecorator {
    config: DocConfig,
}

impl DocDecorator {
    pub fn new(config: DocConfig) -> Self {
        Self { config }
    }
}

impl DecoratorExt for DocDecorator {}

impl<F> Decorator<F> for DocDecorator {
    type Wrapped = Documented<F>;

    fn decorate(&self, target: F) -> Documented<F> {
        Documented {
            doc: self.config.doc.clone(),
            inner: target,
        }
    }
}

/// A target carrying a description; calls are forwarded unchanged.
#[derive(Clone, Debug)]
pub struct Documented<F> {
    doc: String,
    inner: F,
}

impl<F, Args> Invoke<Args> for Documented<F>
where
    F: Invoke<Args>,
{
    type Output = F::Output;

    fn invoke(&self, args: Args) -> F::Output {
        self.inner.invoke(args)
    }

    fn description(&self) -> Option<&str> {
        Some(&self.doc)
    }
}
