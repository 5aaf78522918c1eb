use crate::repr::Repr;

/// Arguments of a logged call.
///
/// Positional arguments are the tuple passed to `invoke`. Rust has no
/// keyword arguments, so tuples report an empty mapping; argument types
/// that model named parameters can override [`CallArgs::keywords`].
pub trait CallArgs {
    fn positional(&self) -> String;

    fn keywords(&self) -> String {
        "{}".to_string()
    }
}

macro_rules! impl_call_args_tuple {
    ($($arg:ident),*) => {
        impl<$($arg: Repr),*> CallArgs for ($($arg,)*) {
            fn positional(&self) -> String {
                self.repr()
            }
        }
    };
}

impl_call_args_tuple!();
impl_call_args_tuple!(A);
impl_call_args_tuple!(A, B);
impl_call_args_tuple!(A, B, C);
impl_call_args_tuple!(A, B, C, D);

/// Render named arguments as `{'name': value, ...}`.
pub fn keywords_repr(pairs: &[(&str, &dyn Repr)]) -> String {
    let items: Vec<String> = pairs
        .iter()
        .map(|(name, value)| format!("{}: {}", name.repr(), value.repr()))
        .collect();
    format!("{{{}}}", items.join(", "))
}

/// Arguments rendered before the target consumes them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedArgs {
    pub positional: String,
    pub keywords: String,
}

impl RenderedArgs {
    pub fn of<A: CallArgs + ?Sized>(args: &A) -> Self {
        Self {
            positional: args.positional(),
            keywords: args.keywords(),
        }
    }
}
