//! Bit operators for open enums. They act on the representation alone, so combining
//! flags freely produces values with no name.

#[doc(hidden)]
#[macro_export]
macro_rules! __impl_bitwise {
    ($name:ident) => {
        $crate::__impl_bitwise!(@binary $name, BitAnd, bitand, BitAndAssign, bitand_assign, &);
        $crate::__impl_bitwise!(@binary $name, BitOr, bitor, BitOrAssign, bitor_assign, |);
        $crate::__impl_bitwise!(@binary $name, BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

        impl ::core::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0)
            }
        }
    };
    (@binary $name:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl ::core::ops::$trait for $name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self(self.0 $op rhs.0)
            }
        }

        impl ::core::ops::$assign_trait for $name {
            fn $assign_method(&mut self, rhs: Self) {
                *self = ::core::ops::$trait::$method(*self, rhs);
            }
        }
    };
}
