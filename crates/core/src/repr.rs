//! Printable representations of call arguments and results.
//!
//! Renders values the way the decorator output and the call log show
//! them: strings quoted, lists in brackets, tuples in parentheses with a
//! trailing comma for a single element.

/// A value with a printable representation.
pub trait Repr {
    fn repr(&self) -> String;
}

impl<T: Repr + ?Sized> Repr for &T {
    fn repr(&self) -> String {
        (**self).repr()
    }
}

impl Repr for str {
    fn repr(&self) -> String {
        quote(self)
    }
}

impl Repr for String {
    fn repr(&self) -> String {
        quote(self)
    }
}

impl Repr for char {
    fn repr(&self) -> String {
        quote(self.encode_utf8(&mut [0; 4]))
    }
}

impl Repr for bool {
    fn repr(&self) -> String {
        let text = if *self { "True" } else { "False" };
        text.to_string()
    }
}

macro_rules! impl_repr_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                fn repr(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_repr_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Repr for f64 {
    fn repr(&self) -> String {
        if self.is_nan() {
            "nan".to_string()
        } else if self.is_infinite() {
            let text = if *self > 0.0 { "inf" } else { "-inf" };
            text.to_string()
        } else {
            // Debug keeps the trailing `.0` on integral values.
            let text = format!("{self:?}");
            match text.split_once('e') {
                Some((mantissa, exponent)) => {
                    let (sign, digits) = match exponent.strip_prefix('-') {
                        Some(digits) => ('-', digits),
                        None => ('+', exponent),
                    };
                    format!("{mantissa}e{sign}{digits:0>2}")
                }
                None => text,
            }
        }
    }
}

impl Repr for f32 {
    fn repr(&self) -> String {
        f64::from(*self).repr()
    }
}

impl<T: Repr> Repr for Option<T> {
    fn repr(&self) -> String {
        match self {
            Some(value) => value.repr(),
            None => "None".to_string(),
        }
    }
}

impl<T: Repr> Repr for [T] {
    fn repr(&self) -> String {
        let items: Vec<String> = self.iter().map(Repr::repr).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Repr> Repr for Vec<T> {
    fn repr(&self) -> String {
        self.as_slice().repr()
    }
}

impl Repr for () {
    fn repr(&self) -> String {
        "()".to_string()
    }
}

impl<A: Repr> Repr for (A,) {
    fn repr(&self) -> String {
        format!("({},)", self.0.repr())
    }
}

macro_rules! impl_repr_tuple {
    ($($name:ident $value:ident),+) => {
        impl<$($name: Repr),+> Repr for ($($name,)+) {
            fn repr(&self) -> String {
                let ($($value,)+) = self;
                let items = [$($value.repr()),+];
                format!("({})", items.join(", "))
            }
        }
    };
}

impl_repr_tuple!(A a, B b);
impl_repr_tuple!(A a, B b, C c);
impl_repr_tuple!(A a, B b, C c, D d);

/// Quote a string, preferring single quotes.
///
/// Double quotes are used only when the text holds a single quote and no
/// double quote, so the result never needs to escape the other style.
fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else {
                    out.push_str(&format!("\\u{code:04x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}
