//! The common "invoke" capability shared by plain functions and wrappers.

/// Something that can be called with a tuple of positional arguments.
pub trait Invoke<Args> {
    type Output;

    fn invoke(&self, args: Args) -> Self::Output;

    /// Description metadata exposed by the callable, if any.
    fn description(&self) -> Option<&str> {
        None
    }
}

/// A plain function or closure lifted into [`Invoke`].
#[derive(Copy, Clone)]
pub struct Target<F> {
    f: F,
}

/// Lift a function of up to four arguments into an [`Invoke`] target.
///
/// ```
/// use decorators_core::{target, Invoke};
///
/// let add = target(|a: i32, b: i32| a + b);
/// assert_eq!(add.invoke((2, 3)), 5);
/// ```
pub fn target<F>(f: F) -> Target<F> {
    Target { f }
}

macro_rules! impl_invoke_fn {
    ($($arg:ident $value:ident),*) => {
        impl<F, O, $($arg),*> Invoke<($($arg,)*)> for Target<F>
        where
            F: Fn($($arg),*) -> O,
        {
            type Output = O;

            fn invoke(&self, ($($value,)*): ($($arg,)*)) -> O {
                (self.f)($($value),*)
            }
        }
    };
}

impl_invoke_fn!();
impl_invoke_fn!(A a);
impl_invoke_fn!(A a, B b);
impl_invoke_fn!(A a, B b, C c);
impl_invoke_fn!(A a, B b, C c, D d);
