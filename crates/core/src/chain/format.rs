use crate::decorator::{Decorator, DecoratorExt};
use crate::invoke::Invoke;

/// Formats a string-like result as `inner_dec: "<result>"`.
///
/// Results that are not string-like do not satisfy the `AsRef<str>` bound,
/// so wrapping such a target is rejected when the call is compiled.
#[derive(Clone, Copy, Debug, Default)]
pub struct FormatDecorator;

impl DecoratorExt for FormatDecorator {}

impl<F> Decorator<F> for FormatDecorator {
    type Wrapped = Formatted<F>;

    fn decorate(&self, target: F) -> Formatted<F> {
        Formatted { inner: target }
    }
}

#[derive(Clone, Debug)]
pub struct Formatted<F> {
    inner: F,
}

impl<F, Args> Invoke<Args> for Formatted<F>
where
    F: Invoke<Args>,
    F::Output: AsRef<str>,
{
    type Output = String;

    fn invoke(&self, args: Args) -> String {
        let result = self.inner.invoke(args);
        format!("inner_dec: \"{}\"", result.as_ref())
    }
}
