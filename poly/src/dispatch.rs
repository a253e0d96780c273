use crate::polynomial::{Coeff, Polynomial};
use std::any::Any;
use std::error::Error;
use std::fmt;

/// Outcome of an addition attempted against a runtime-typed operand.
#[derive(Clone, Debug, PartialEq)]
pub enum CoercedAdd<T: Coeff> {
    Sum(Polynomial<T>),
    /// The operand is neither a polynomial nor a scalar of the coefficient
    /// type. The caller may still attempt the reflected form on the other
    /// operand before giving up.
    NotImplemented,
}

/// Neither operand could resolve the addition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedOperand;

impl fmt::Display for UnsupportedOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported operand type(s) for polynomial addition")
    }
}

impl Error for UnsupportedOperand {}

impl<T: Coeff> Polynomial<T> {
    /// Adds a runtime-typed operand: another [Polynomial] over the same
    /// coefficient type, or a bare scalar of that type. Anything else yields
    /// the [CoercedAdd::NotImplemented] sentinel rather than an error.
    pub fn coerce_add(&self, other: &dyn Any) -> CoercedAdd<T> {
        if let Some(p) = other.downcast_ref::<Polynomial<T>>() {
            CoercedAdd::Sum(self.add_poly(p))
        } else if let Some(&s) = other.downcast_ref::<T>() {
            CoercedAdd::Sum(self.add_scalar(s))
        } else {
            CoercedAdd::NotImplemented
        }
    }

    /// Reflected form, for when the polynomial sits on the right of `+`.
    /// Addition commutes, so it resolves through the same coercion.
    pub fn coerce_radd(&self, other: &dyn Any) -> CoercedAdd<T> {
        self.coerce_add(other)
    }
}

/// Resolves `lhs + rhs` the way a numeric tower would: the forward form on
/// the left operand is attempted first, then the reflected form on the right
/// operand, and only if both decline does the addition fail.
pub fn add_operands<T: Coeff>(
    lhs: &dyn Any,
    rhs: &dyn Any,
) -> Result<Polynomial<T>, UnsupportedOperand> {
    if let Some(p) = lhs.downcast_ref::<Polynomial<T>>() {
        if let CoercedAdd::Sum(sum) = p.coerce_add(rhs) {
            return Ok(sum);
        }
    }
    if let Some(p) = rhs.downcast_ref::<Polynomial<T>>() {
        if let CoercedAdd::Sum(sum) = p.coerce_radd(lhs) {
            return Ok(sum);
        }
    }
    Err(UnsupportedOperand)
}
