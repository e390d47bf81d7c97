use std::{fmt, hash::Hash};

use crate::{extract::Enumerator, flavor::Flavor, repr::Repr, window::Window};

// === Reflect === //

/// An enum whose enumerators were registered with [`reflect_enum!`](crate::reflect_enum).
///
/// Implementations are generated; the associated constants are the compile-time
/// tables every lookup in this crate reads from.
pub trait Reflect: 'static + Sized + Copy + Eq + Hash + Send + Sync + fmt::Debug {
    type Repr: Repr;

    const FLAVOR: Flavor;

    /// Integers probed for names.
    const WINDOW: Window;

    /// Every enumerator, in declaration order, regardless of the window.
    const DECLARED: &'static [Enumerator<Self>];

    /// Named values inside the window, ascending by integer.
    const ENTRIES: &'static [(Self, &'static str)];

    const COUNT: usize = Self::ENTRIES.len();

    fn to_repr(self) -> Self::Repr;

    /// `None` only for closed enums given an integer no variant carries.
    fn try_from_repr(repr: Self::Repr) -> Option<Self>;
}
