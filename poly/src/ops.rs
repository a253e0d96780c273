use crate::polynomial::{Coeff, Polynomial};
use itertools::izip;
use std::cmp::min;
use std::ops::Add;

impl<T: Coeff> Polynomial<T> {
    /// Returns the sum with another polynomial. The coefficient places the
    /// two polynomials have in common are added element-wise, then the high
    /// degree coefficients of the higher degree summand are carried over
    /// unchanged. The result is never re-normalized, so cancellation can
    /// leave zero leading coefficients behind.
    pub fn add_poly(&self, other: &Self) -> Self {
        let common: usize = min(self.degree(), other.degree()) + 1;
        let mut coefs: Vec<T> = Vec::with_capacity(self.0.len().max(other.0.len()));
        izip!(&self.0[..common], &other.0[..common]).for_each(|(&a, &b)| coefs.push(a + b));
        coefs.extend_from_slice(&self.0[common..]);
        coefs.extend_from_slice(&other.0[common..]);
        Polynomial(coefs)
    }

    /// Returns the sum with a scalar: only the constant term changes.
    pub fn add_scalar(&self, other: T) -> Self {
        let mut coefs: Vec<T> = self.0.clone();
        coefs[0] = coefs[0] + other;
        Polynomial(coefs)
    }
}

impl<T: Coeff> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: &Polynomial<T>) -> Polynomial<T> {
        self.add_poly(other)
    }
}

impl<T: Coeff> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: Polynomial<T>) -> Polynomial<T> {
        self.add_poly(&other)
    }
}

impl<T: Coeff> Add<T> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: T) -> Polynomial<T> {
        self.add_scalar(other)
    }
}

impl<T: Coeff> Add<T> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: T) -> Polynomial<T> {
        self.add_scalar(other)
    }
}

// Coherence forbids a blanket `impl Add<Polynomial<T>> for T`, so the
// reflected form is implemented per primitive numeric type. Each one
// delegates to the scalar case: addition commutes.
macro_rules! impl_reflected_add {
    ($($t:ty),*) => {$(
        impl Add<Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, other: Polynomial<$t>) -> Polynomial<$t> {
                other.add_scalar(self)
            }
        }

        impl Add<&Polynomial<$t>> for $t {
            type Output = Polynomial<$t>;

            fn add(self, other: &Polynomial<$t>) -> Polynomial<$t> {
                other.add_scalar(self)
            }
        }
    )*};
}

impl_reflected_add!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
