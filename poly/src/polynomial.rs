use num_traits::{FromPrimitive, Num};
use std::fmt;

/// Coefficient types a [Polynomial] can be built over.
pub trait Coeff: Num + Copy + fmt::Display + fmt::Debug + 'static {}

impl<T> Coeff for T where T: Num + Copy + fmt::Display + fmt::Debug + 'static {}

/// [Polynomial] represents a dense univariate polynomial: the i-th entry of
/// the backing vector is the coefficient of the term of degree i.
///
/// The backing vector must be non-empty (a single zero entry is the zero
/// polynomial) and is never normalized: trailing zero coefficients are kept,
/// so [Polynomial::degree] reports the stored length minus one even when the
/// leading coefficients are zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T>(pub Vec<T>);

impl<T: Coeff> Polynomial<T> {
    pub fn new(coefs: Vec<T>) -> Self {
        Self(coefs)
    }

    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    /// Evaluates the polynomial at x with Horner's rule.
    pub fn eval(&self, x: T) -> T {
        let mut acc: T = T::zero();
        self.0.iter().rev().for_each(|&c| acc = acc * x + c);
        acc
    }

    /// Formal derivative. The derivative of a constant is the zero
    /// polynomial.
    pub fn derivative(&self) -> Polynomial<T>
    where
        T: FromPrimitive,
    {
        if self.degree() == 0 {
            return Polynomial(vec![T::zero()]);
        }
        Polynomial(
            self.0
                .iter()
                .enumerate()
                .skip(1)
                .map(|(d, &c)| c * T::from_usize(d).unwrap())
                .collect(),
        )
    }
}

impl<T: Coeff> From<Vec<T>> for Polynomial<T> {
    fn from(coefs: Vec<T>) -> Self {
        Self(coefs)
    }
}

impl<T: Coeff> From<&[T]> for Polynomial<T> {
    fn from(coefs: &[T]) -> Self {
        Self(coefs.to_vec())
    }
}

impl<T: Coeff> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefs: &[T] = &self.0;
        let mut terms: Vec<String> = Vec::new();

        // Factors of 1 are conventionally omitted on the x^d terms.
        for d in (2..=self.degree()).rev() {
            let c: T = coefs[d];
            if !c.is_zero() {
                if c.is_one() {
                    terms.push(format!("x^{}", d));
                } else {
                    terms.push(format!("{}x^{}", c, d));
                }
            }
        }

        // Degree 1 and 0 terms have their own representation. The degree 1
        // coefficient is always written out, even when it is 1.
        if self.degree() > 0 && !coefs[1].is_zero() {
            terms.push(format!("{}x", coefs[1]));
        }
        if !coefs[0].is_zero() {
            terms.push(format!("{}", coefs[0]));
        }

        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}
