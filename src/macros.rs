/// Declares an enum and registers its enumerators for reflection.
///
/// ```
/// enum_reflect::reflect_enum! {
///     /// Open enum: a newtype over `i32` with one constant per enumerator.
///     pub enum Color: i32 in -120..=120 {
///         RED = -12,
///         GREEN = 7,
///         BLUE = 15,
///     }
/// }
///
/// assert_eq!(Color::RED.name(), Some("RED"));
/// assert_eq!(Color::from_repr(0).name(), None);
/// assert_eq!(Color::from_name("BLUE"), Some(Color::BLUE));
/// ```
///
/// Three flavors are accepted:
///
/// - `enum Name: Repr { .. }` declares an *open* enum, a `#[repr(transparent)]` newtype
///   that can hold any integer of `Repr`. It also gets the bit operators.
/// - `unscoped enum Name: Repr { .. }` is the same but additionally defines every
///   enumerator as a constant in the enclosing scope.
/// - `closed enum Name: Repr { .. }` declares a native Rust enum.
///
/// `: Repr` defaults to `i32`; only an unscoped enum without one is reported as not
/// fixed by [`is_fixed`](crate::is_fixed). `in MIN..=MAX` defaults to the window of
/// [`Window::of`](crate::window::Window::of). Enumerators may not be named `name`,
/// `static_name`, `from_name`, `from_repr` or `to_repr`.
#[macro_export]
macro_rules! reflect_enum {
    // === Internal rules === //

    // Scoped enums always have a fixed representation, spelled out or not.
    (@repr $kind:ident $scoped:tt $attrs:tt $vis:tt $name:ident [] $window:tt $body:tt) => {
        $crate::reflect_enum!(@emit $kind $scoped $scoped $attrs $vis $name i32 $window $body);
    };
    (@repr $kind:ident $scoped:tt $attrs:tt $vis:tt $name:ident [$repr:ident] $window:tt $body:tt) => {
        $crate::reflect_enum!(@emit $kind $scoped true $attrs $vis $name $repr $window $body);
    };

    (@emit open $scoped:tt $fixed:tt [$($attr:tt)*] [$vis:vis] $name:ident $repr:ident $window:tt {
        $($(#[$var_attr:meta])* $variant:ident = $value:expr),*
    }) => {
        $($attr)*
        #[repr(transparent)]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name($repr);

        #[allow(non_upper_case_globals)]
        impl $name {
            $(
                $(#[$var_attr])*
                pub const $variant: $name = $name($value);
            )*

            /// Any integer is a value of an open enum, named or not.
            pub const fn from_repr(repr: $repr) -> Self {
                Self(repr)
            }

            pub const fn to_repr(self) -> $repr {
                self.0
            }
        }

        impl ::core::convert::From<$repr> for $name {
            fn from(repr: $repr) -> Self {
                Self(repr)
            }
        }

        $crate::__impl_bitwise!($name);

        $crate::reflect_enum!(@enclosing $scoped [$vis] $name { $($variant)* });
        $crate::reflect_enum!(@common open $scoped $fixed $name $repr $window { $($variant)* });
    };

    (@emit closed $scoped:tt $fixed:tt [$($attr:tt)*] [$vis:vis] $name:ident $repr:ident $window:tt {
        $($(#[$var_attr:meta])* $variant:ident = $value:expr),*
    }) => {
        $($attr)*
        #[repr($repr)]
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$var_attr])*
                $variant = $value,
            )*
        }

        impl $name {
            /// The variant carrying `repr`, if any.
            pub const fn from_repr(repr: $repr) -> ::core::option::Option<Self> {
                $(
                    if repr == $name::$variant as $repr {
                        return ::core::option::Option::Some($name::$variant);
                    }
                )*
                ::core::option::Option::None
            }

            pub const fn to_repr(self) -> $repr {
                self as $repr
            }
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::ReflectError;

            fn try_from(repr: $repr) -> ::core::result::Result<Self, Self::Error> {
                Self::from_repr(repr)
                    .ok_or_else(|| $crate::ReflectError::unnamed_value::<Self>(repr as i128))
            }
        }

        $crate::reflect_enum!(@enclosing $scoped [$vis] $name { $($variant)* });
        $crate::reflect_enum!(@common closed $scoped $fixed $name $repr $window { $($variant)* });
    };

    (@enclosing true [$vis:vis] $name:ident { $($variant:ident)* }) => {};
    (@enclosing false [$vis:vis] $name:ident { $($variant:ident)* }) => {
        $(
            #[allow(non_upper_case_globals, dead_code)]
            $vis const $variant: $name = $name::$variant;
        )*
    };

    (@window $repr:ident []) => {
        $crate::window::Window::of::<$repr>()
    };
    (@window $repr:ident [$min:literal, $max:literal]) => {
        $crate::window::Window::new($min, $max)
    };

    (@try_from_repr open $repr:ident) => {
        ::core::option::Option::Some(Self::from_repr($repr))
    };
    (@try_from_repr closed $repr:ident) => {
        Self::from_repr($repr)
    };

    (@common $kind:ident $scoped:tt $fixed:tt $name:ident $repr:ident $window:tt {
        $($variant:ident)*
    }) => {
        #[doc(hidden)]
        impl $name {
            const __REFLECT_WINDOW: $crate::window::Window =
                $crate::reflect_enum!(@window $repr $window);

            const __REFLECT_BOUNDS: $crate::window::Bounds = $crate::window::Bounds::of::<$repr>();

            const __REFLECT_COUNT: usize = $crate::scan::count(
                <$name as $crate::Reflect>::DECLARED,
                $name::__REFLECT_WINDOW,
                $name::__REFLECT_BOUNDS,
            );

            const __REFLECT_HITS: [$crate::probe::Hit; $name::__REFLECT_COUNT] = $crate::scan::hits(
                <$name as $crate::Reflect>::DECLARED,
                $name::__REFLECT_WINDOW,
                $name::__REFLECT_BOUNDS,
            );

            const __REFLECT_ENTRIES: [($name, &'static str); $name::__REFLECT_COUNT] =
                $crate::scan::entries(<$name as $crate::Reflect>::DECLARED, &$name::__REFLECT_HITS);
        }

        impl $name {
            /// Name of this value if it is a named value inside the search window.
            pub const fn name(self) -> ::core::option::Option<&'static str> {
                match $crate::probe::probe(
                    <$name as $crate::Reflect>::DECLARED,
                    $name::__REFLECT_WINDOW,
                    $name::__REFLECT_BOUNDS,
                    self.to_repr() as i128,
                ) {
                    ::core::option::Option::Some(hit) => ::core::option::Option::Some(hit.name),
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }

            /// Name of this value as declared, wherever it lies relative to the window.
            pub const fn static_name(self) -> ::core::option::Option<&'static str> {
                match $crate::probe::resolve(<$name as $crate::Reflect>::DECLARED, self.to_repr() as i128) {
                    ::core::option::Option::Some(hit) => ::core::option::Option::Some(hit.name),
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }

            /// The named value spelled exactly `name`.
            pub const fn from_name(name: &str) -> ::core::option::Option<Self> {
                match $crate::scan::find_name(
                    <$name as $crate::Reflect>::DECLARED,
                    $name::__REFLECT_WINDOW,
                    $name::__REFLECT_BOUNDS,
                    name,
                ) {
                    ::core::option::Option::Some(index) => {
                        ::core::option::Option::Some(<$name as $crate::Reflect>::DECLARED[index].value)
                    }
                    ::core::option::Option::None => ::core::option::Option::None,
                }
            }
        }

        impl $crate::Reflect for $name {
            type Repr = $repr;

            const FLAVOR: $crate::Flavor = $crate::Flavor {
                scoped: $scoped,
                fixed: $fixed,
                open: $crate::reflect_enum!(@is_open $kind),
            };

            const WINDOW: $crate::window::Window = $name::__REFLECT_WINDOW;

            const DECLARED: &'static [$crate::extract::Enumerator<Self>] = &[$(
                $crate::extract::Enumerator::new(
                    $name::$variant,
                    $name::$variant.to_repr() as i128,
                    ::core::stringify!($name::$variant),
                ),
            )*];

            const ENTRIES: &'static [(Self, &'static str)] = &$name::__REFLECT_ENTRIES;

            fn to_repr(self) -> $repr {
                $name::to_repr(self)
            }

            fn try_from_repr(repr: $repr) -> ::core::option::Option<Self> {
                $crate::reflect_enum!(@try_from_repr $kind repr)
            }
        }

        impl ::core::convert::From<$name> for $repr {
            fn from(value: $name) -> Self {
                value.to_repr()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::fmt::write_name_or_integer(f, *self)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::fmt::write_debug(f, *self)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ReflectError;

            fn from_str(text: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::lookup::parse(text)
            }
        }
    };

    (@is_open open) => { true };
    (@is_open closed) => { false };

    // === Entry points === //

    (
        $(#[$attr:meta])*
        $vis:vis unscoped enum $name:ident $(: $repr:ident)? $(in $min:literal ..= $max:literal)? {
            $($(#[$var_attr:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $crate::reflect_enum!(@repr open false [$(#[$attr])*] [$vis] $name [$($repr)?] [$($min, $max)?] {
            $($(#[$var_attr])* $variant = $value),*
        });
    };
    (
        $(#[$attr:meta])*
        $vis:vis closed enum $name:ident $(: $repr:ident)? $(in $min:literal ..= $max:literal)? {
            $($(#[$var_attr:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $crate::reflect_enum!(@repr closed true [$(#[$attr])*] [$vis] $name [$($repr)?] [$($min, $max)?] {
            $($(#[$var_attr])* $variant = $value),*
        });
    };
    (
        $(#[$attr:meta])*
        $vis:vis enum $name:ident $(: $repr:ident)? $(in $min:literal ..= $max:literal)? {
            $($(#[$var_attr:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $crate::reflect_enum!(@repr open true [$(#[$attr])*] [$vis] $name [$($repr)?] [$($min, $max)?] {
            $($(#[$var_attr])* $variant = $value),*
        });
    };
}
