//! Operator overloads built on the mutating primitives.
//!
//! Binary operators take the left operand by value and return the result,
//! leaving the caller's copy alone. The right operand is anything that
//! converts into an [`Operand`], so `v * 2.0` and `v * other` both work.
//! The traits are implemented with full paths and never imported, so method
//! calls such as `v.add(1.0)` keep resolving to the in-place methods.

use super::operand::Operand;
use super::vector::PVector;

macro_rules! binary_operator {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident => $inherent:ident;)*) => {
        $(
            impl<T: Into<Operand>> std::ops::$trait<T> for PVector {
                type Output = PVector;

                fn $method(mut self, rhs: T) -> PVector {
                    PVector::$inherent(&mut self, rhs);
                    self
                }
            }

            impl<T: Into<Operand>> std::ops::$assign_trait<T> for PVector {
                fn $assign_method(&mut self, rhs: T) {
                    PVector::$inherent(self, rhs);
                }
            }
        )*
    };
}

binary_operator! {
    Add::add, AddAssign::add_assign => add;
    Sub::sub, SubAssign::sub_assign => sub;
    Mul::mul, MulAssign::mul_assign => mult;
    Div::div, DivAssign::div_assign => div;
}

impl std::ops::Mul<PVector> for f64 {
    type Output = PVector;

    fn mul(self, mut rhs: PVector) -> PVector {
        rhs.mult(self);
        rhs
    }
}

impl std::ops::Neg for PVector {
    type Output = PVector;

    fn neg(mut self) -> PVector {
        self.invert();
        self
    }
}
