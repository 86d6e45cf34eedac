use num_traits::CheckedAdd;

/// A value [`sum`](crate::sum) knows how to add without losing the exact
/// result.
///
/// Integers refuse to overflow. Floats always add, since ±infinity and NaN
/// are ordinary IEEE results rather than errors.
pub trait Summand: Sized {
    /// `self + rhs`, or `None` when the result doesn't fit in `Self`.
    fn add_exact(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_summand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summand for $ty {
                #[inline]
                fn add_exact(self, rhs: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &rhs)
                }
            }
        )*
    };
}

macro_rules! float_summand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summand for $ty {
                #[inline]
                fn add_exact(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

checked_summand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_summand!(f32, f64);
