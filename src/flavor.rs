use crate::reflect::Reflect;

/// How a reflected enum was declared.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Flavor {
    /// Enumerators are only reachable as `Type::NAME`. Unscoped enums also bring
    /// every enumerator into the enclosing scope.
    pub scoped: bool,
    /// The representation is fixed: always for scoped enums, and for unscoped ones
    /// only when spelled out (`unscoped enum Color: u8`).
    pub fixed: bool,
    /// Any integer of the representation is a value (a newtype), as opposed to a
    /// native Rust enum that only holds its variants.
    pub open: bool,
}

pub const fn is_scoped<E: Reflect>() -> bool {
    E::FLAVOR.scoped
}

pub const fn is_unscoped<E: Reflect>() -> bool {
    !E::FLAVOR.scoped
}

pub const fn is_fixed<E: Reflect>() -> bool {
    E::FLAVOR.fixed
}

pub const fn is_open<E: Reflect>() -> bool {
    E::FLAVOR.open
}
