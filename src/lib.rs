//! Name reflection for C-like enums.
//!
//! [`reflect_enum!`] declares an enum and registers the compiler's spelling of every
//! enumerator. From that registration the crate answers, at compile time where the
//! query is a `const fn` and at run time otherwise:
//!
//! - value to name ([`name`], `Type::name`) and name to value ([`from_name`],
//!   `Type::from_name`, [`FromStr`](std::str::FromStr));
//! - integer to value ([`from_integer`]) and value to integer ([`to_integer`]);
//! - the ordered list of named values ([`entries`], [`values`], [`names`], [`count`]).
//!
//! Only integers inside a bounded search window are ever named. The window defaults
//! to `[-MAX_SEARCH_DEPTH, MAX_SEARCH_DEPTH]` (`[0, MAX_SEARCH_DEPTH]` for unsigned
//! representations) and can be overridden per enum:
//!
//! ```
//! use enum_reflect::{reflect_enum, Reflect};
//!
//! reflect_enum! {
//!     #[allow(non_camel_case_types)]
//!     pub enum number: u64 in 100..=300 { one = 100, two = 200, three = 300, four = 400 }
//! }
//!
//! assert_eq!(number::three.name(), Some("three"));
//! assert_eq!(number::four.name(), None);
//! assert_eq!(number::four.static_name(), Some("four"));
//! assert_eq!(<number as Reflect>::COUNT, 3);
//! ```
//!
//! Building without the default `names` feature keeps every table but makes each
//! name query answer `None`.

pub mod error;
pub mod extract;
pub mod flavor;
pub mod fmt;
pub mod iter;
pub mod lookup;
mod macros;
pub mod ops;
pub mod probe;
mod reflect;
pub mod repr;
pub mod scan;
pub mod window;

pub use crate::{
    error::{ReflectError, ReflectResult},
    extract::Enumerator,
    flavor::{is_fixed, is_open, is_scoped, is_unscoped, Flavor},
    iter::EnumIter,
    lookup::{
        contains, count, entries, from_integer, from_name, from_name_ignore_case, index_of, name,
        names, static_name, to_integer, type_name, value_at, values,
    },
    reflect::Reflect,
    repr::Repr,
    window::{Bounds, Window, MAX_SEARCH_DEPTH},
};
