use std::any::{type_name, Any};

use crate::repr::Repr;

/// How a logged call ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Returned {
        type_name: &'static str,
        value: String,
    },
    Raised {
        type_name: &'static str,
        args: String,
    },
}

impl Outcome {
    pub fn returned<T: Repr>(value: &T) -> Self {
        Outcome::Returned {
            type_name: type_name::<T>(),
            value: value.repr(),
        }
    }

    /// The error's type and its argument tuple, `('<message>',)`.
    pub fn raised<E: std::error::Error>(error: &E) -> Self {
        Outcome::Raised {
            type_name: type_name::<E>(),
            args: (error.to_string(),).repr(),
        }
    }

    /// A panic caught from the target, with its message when it has one.
    pub fn panicked(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| message.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());

        Outcome::Raised {
            type_name: "panic",
            args: (message,).repr(),
        }
    }

    pub fn is_raised(&self) -> bool {
        matches!(self, Outcome::Raised { .. })
    }
}

/// Classifies a target's output as a returned value or a raised error.
pub trait CallOutcome {
    fn outcome(&self) -> Outcome;
}

impl<T: Repr, E: std::error::Error> CallOutcome for Result<T, E> {
    fn outcome(&self) -> Outcome {
        match self {
            Ok(value) => Outcome::returned(value),
            Err(error) => Outcome::raised(error),
        }
    }
}

macro_rules! impl_call_outcome_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CallOutcome for $ty {
                fn outcome(&self) -> Outcome {
                    Outcome::returned(self)
                }
            }
        )*
    };
}

impl_call_outcome_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl CallOutcome for &str {
    fn outcome(&self) -> Outcome {
        Outcome::returned(self)
    }
}

impl<T: Repr> CallOutcome for Option<T> {
    fn outcome(&self) -> Outcome {
        Outcome::returned(self)
    }
}

impl<T: Repr> CallOutcome for Vec<T> {
    fn outcome(&self) -> Outcome {
        Outcome::returned(self)
    }
}

impl CallOutcome for () {
    fn outcome(&self) -> Outcome {
        Outcome::Returned {
            type_name: type_name::<()>(),
            value: "None".to_string(),
        }
    }
}
