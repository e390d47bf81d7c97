use std::fmt;

use crate::{lookup, reflect::Reflect};

// === Formatting fallbacks === //

/// Writes the name of `value`, or its decimal integer when it has none.
pub fn write_name_or_integer<E: Reflect>(f: &mut fmt::Formatter<'_>, value: E) -> fmt::Result {
    match lookup::name(value) {
        Some(name) => f.write_str(name),
        None => fmt::Display::fmt(&value.to_repr(), f),
    }
}

/// Writes `Type::NAME` for declared enumerators and `Type(integer)` otherwise.
pub fn write_debug<E: Reflect>(f: &mut fmt::Formatter<'_>, value: E) -> fmt::Result {
    let type_name = lookup::type_name::<E>();
    match lookup::static_name(value) {
        Some(name) => write!(f, "{type_name}::{name}"),
        None => write!(f, "{type_name}({:?})", value.to_repr()),
    }
}

/// Displays the contained value the way its `Display` impl would, and `None` as nothing.
pub fn display_option<E: Reflect>(value: Option<E>) -> impl fmt::Display {
    FormatterFn(move |f: &mut fmt::Formatter<'_>| match value {
        Some(value) => write_name_or_integer(f, value),
        None => Ok(()),
    })
}

// === FormatterFn === //

#[derive(Debug, Copy, Clone)]
pub struct FormatterFn<F>(pub F);

impl<F: Fn(&mut fmt::Formatter) -> fmt::Result> fmt::Display for FormatterFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
