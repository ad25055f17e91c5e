//! Capabilities checked by the assertion helpers.

use std::time::Duration;

/// Types with a distinguished zero value.
///
/// # Examples
///
/// ```rust
/// use domain_kit::assertion::Zeroable;
///
/// assert!(0_u32.is_zero());
/// assert!(String::new().is_zero());
/// assert!(!Some(1).is_zero());
/// ```
pub trait Zeroable {
    /// Returns `true` if `self` is the zero value of its type.
    fn is_zero(&self) -> bool;
}

/// Types that can check their own validity.
pub trait Validatable {
    /// Returns `true` if `self` is valid.
    fn is_valid(&self) -> bool;
}

macro_rules! impl_zeroable_for_integer {
    ($($type:ty),*) => {
        $(
            impl Zeroable for $type {
                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

impl_zeroable_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Zeroable for f32 {
    #[inline]
    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Zeroable for f64 {
    #[inline]
    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl Zeroable for bool {
    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zeroable for str {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zeroable for String {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zeroable for Duration {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl<T> Zeroable for Option<T> {
    #[inline]
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: Zeroable + ?Sized> Zeroable for &T {
    #[inline]
    fn is_zero(&self) -> bool {
        (**self).is_zero()
    }
}
