//! Runtime entry points over any [`Reflect`] type. Each one is a fresh probe or scan
//! of the type's tables; nothing is cached.

use crate::{
    error::{ReflectError, ReflectResult},
    extract,
    iter::EnumIter,
    probe::{probe, resolve},
    reflect::Reflect,
    repr::Repr,
    scan::{find_name, find_name_ignore_case},
    window::Bounds,
};

fn integer_of<E: Reflect>(value: E) -> i128 {
    value.to_repr().to_i128()
}

fn bounds<E: Reflect>() -> Bounds {
    Bounds::of::<E::Repr>()
}

// === Value -> name === //

/// Name of `value` if it is a named value inside the type's window.
pub fn name<E: Reflect>(value: E) -> Option<&'static str> {
    probe(E::DECLARED, E::WINDOW, bounds::<E>(), integer_of(value)).map(|hit| hit.name)
}

/// Name of `value` as declared, without consulting the window.
pub fn static_name<E: Reflect>(value: E) -> Option<&'static str> {
    resolve(E::DECLARED, integer_of(value)).map(|hit| hit.name)
}

/// Declared name of a reflected enum value, usable in constants.
///
/// The expression is evaluated, so constants, array elements and combined flags all
/// resolve through their value: `enum_name!(Color::RED | Color::BLUE)` is `None` unless
/// some enumerator carries that integer. Like `static_name`, the window is not
/// consulted.
#[macro_export]
macro_rules! enum_name {
    ($value:expr) => {
        ($value).static_name()
    };
}

pub fn contains<E: Reflect>(value: E) -> bool {
    name(value).is_some()
}

// === Name -> value === //

pub fn from_name<E: Reflect>(name: &str) -> Option<E> {
    let found = find_name(E::DECLARED, E::WINDOW, bounds::<E>(), name);
    if found.is_none() {
        log::trace!("no `{}` enumerator is named {:?}", type_name::<E>(), name);
    }
    found.map(|index| E::DECLARED[index].value)
}

/// Like [`from_name`], comparing ASCII letters case-insensitively. The lowest matching
/// integer wins.
pub fn from_name_ignore_case<E: Reflect>(name: &str) -> Option<E> {
    let found = find_name_ignore_case(E::DECLARED, E::WINDOW, bounds::<E>(), name);
    if found.is_none() {
        log::trace!(
            "no `{}` enumerator is named {:?} in any case",
            type_name::<E>(),
            name
        );
    }
    found.map(|index| E::DECLARED[index].value)
}

/// Backs the generated `FromStr` impls.
pub fn parse<E: Reflect>(text: &str) -> ReflectResult<E> {
    from_name(text).ok_or_else(|| ReflectError::unknown_name::<E>(text))
}

// === Integer -> value === //

pub fn from_integer<E: Reflect>(integer: i128) -> Option<E> {
    match probe(E::DECLARED, E::WINDOW, bounds::<E>(), integer) {
        Some(hit) => Some(E::DECLARED[hit.index].value),
        None => {
            log::trace!("{} is not a named `{}` value", integer, type_name::<E>());
            None
        }
    }
}

pub fn to_integer<E: Reflect>(value: E) -> E::Repr {
    value.to_repr()
}

// === Listing === //

pub const fn count<E: Reflect>() -> usize {
    E::COUNT
}

/// The `index`-th named value in ascending order.
///
/// ## Panics
///
/// Panics if `index >= count::<E>()`.
pub fn value_at<E: Reflect>(index: usize) -> E {
    match E::ENTRIES.get(index) {
        Some(&(value, _)) => value,
        None => panic!(
            "`{}` has {} named values but value {} was requested",
            type_name::<E>(),
            E::COUNT,
            index
        ),
    }
}

/// Position of `value` among the named values.
pub fn index_of<E: Reflect>(value: E) -> Option<usize> {
    let integer = integer_of(value);
    E::ENTRIES
        .binary_search_by_key(&integer, |&(entry, _)| integer_of(entry))
        .ok()
}

pub fn entries<E: Reflect>() -> &'static [(E, &'static str)] {
    E::ENTRIES
}

pub fn values<E: Reflect>() -> impl ExactSizeIterator<Item = E> + DoubleEndedIterator + Clone {
    EnumIter::<E>::new().map(|(value, _)| value)
}

pub fn names<E: Reflect>(
) -> impl ExactSizeIterator<Item = &'static str> + DoubleEndedIterator + Clone {
    EnumIter::<E>::new().map(|(_, name)| name)
}

pub fn type_name<E: Reflect>() -> &'static str {
    extract::type_name::<E>()
}
