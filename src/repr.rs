use std::{fmt, hash::Hash, ops};

// === Repr === //

/// A primitive integer usable as the underlying representation of a reflected enum.
pub trait Repr:
    'static
    + Sized
    + Copy
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
    + ops::BitAnd<Output = Self>
    + ops::BitOr<Output = Self>
    + ops::BitXor<Output = Self>
    + ops::Not<Output = Self>
{
    const MIN: i128;
    const MAX: i128;
    const SIGNED: bool;

    fn to_i128(self) -> i128;

    fn try_from_i128(value: i128) -> Option<Self>;
}

macro_rules! impl_repr {
    ($($ty:ty => $signed:expr),*$(,)?) => {$(
        impl Repr for $ty {
            const MIN: i128 = <$ty>::MIN as i128;
            const MAX: i128 = <$ty>::MAX as i128;
            const SIGNED: bool = $signed;

            fn to_i128(self) -> i128 {
                self as i128
            }

            fn try_from_i128(value: i128) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )*};
}

impl_repr! {
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    i128 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
}

#[test]
fn bounds_widen_losslessly() {
    assert_eq!(<u64 as Repr>::MAX, u64::MAX as i128);
    assert_eq!(<i8 as Repr>::MIN, -128);
    assert_eq!(<u8 as Repr>::MIN, 0);
    assert!(!<usize as Repr>::SIGNED);
}

#[test]
fn narrowing_rejects_out_of_range() {
    assert_eq!(u8::try_from_i128(255), Some(255));
    assert_eq!(u8::try_from_i128(256), None);
    assert_eq!(u32::try_from_i128(-1), None);
    assert_eq!(i16::try_from_i128(-42), Some(-42));
}
