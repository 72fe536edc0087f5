//! Capability-based inequality checks over heterogeneous type pairs.
//!
//! [`differs!`](crate::differs) picks the richest comparison capability a
//! pair of types supports, resolved entirely at compile time. The precedence
//! is fixed: `PartialEq` first, then the crate's relation traits for types
//! that expose an ordering without equality ([`PartialLess`],
//! [`PartialGreater`], [`PartialLessEqual`], [`PartialGreaterEqual`]).
//! A pair that supports none of them fails to compile with a "no method
//! named `differs`" error at the call site.
//!
//! The selection mechanism is autoref precedence: each capability is
//! implemented at a different reference depth on [`Comparand`], and method
//! resolution peels references until it finds an applicable rung.

/// Probe wrapper holding the two operands of a comparison.
///
/// Only useful through the [`differs!`](crate::differs) macro, which wraps
/// the operands at the reference depth the rung impls expect.
pub struct Comparand<'a, T: ?Sized, U: ?Sized>(pub &'a T, pub &'a U);

/// Strict less-than relation for types that order without defining equality.
pub trait PartialLess<Rhs: ?Sized = Self> {
    fn less(&self, other: &Rhs) -> bool;
}

/// Strict greater-than relation for types that order without defining equality.
pub trait PartialGreater<Rhs: ?Sized = Self> {
    fn greater(&self, other: &Rhs) -> bool;
}

/// Non-strict less-or-equal relation.
pub trait PartialLessEqual<Rhs: ?Sized = Self> {
    fn less_equal(&self, other: &Rhs) -> bool;
}

/// Non-strict greater-or-equal relation.
pub trait PartialGreaterEqual<Rhs: ?Sized = Self> {
    fn greater_equal(&self, other: &Rhs) -> bool;
}

pub trait ViaPartialEq {
    fn differs(&self) -> bool;
}

impl<T, U> ViaPartialEq for &&&&Comparand<'_, T, U>
where
    T: PartialEq<U> + ?Sized,
    U: ?Sized,
{
    fn differs(&self) -> bool {
        !(*self.0 == *self.1)
    }
}

pub trait ViaPartialLess {
    fn differs(&self) -> bool;
}

impl<T, U> ViaPartialLess for &&&Comparand<'_, T, U>
where
    T: PartialLess<U> + ?Sized,
    U: PartialLess<T> + ?Sized,
{
    fn differs(&self) -> bool {
        // Neither strictly below the other means equivalent under the order.
        self.0.less(self.1) || self.1.less(self.0)
    }
}

pub trait ViaPartialGreater {
    fn differs(&self) -> bool;
}

impl<T, U> ViaPartialGreater for &&Comparand<'_, T, U>
where
    T: PartialGreater<U> + ?Sized,
    U: PartialGreater<T> + ?Sized,
{
    fn differs(&self) -> bool {
        self.0.greater(self.1) || self.1.greater(self.0)
    }
}

pub trait ViaPartialLessEqual {
    fn differs(&self) -> bool;
}

impl<T, U> ViaPartialLessEqual for &Comparand<'_, T, U>
where
    T: PartialLessEqual<U> + ?Sized,
    U: PartialLessEqual<T> + ?Sized,
{
    fn differs(&self) -> bool {
        !self.0.less_equal(self.1) || !self.1.less_equal(self.0)
    }
}

pub trait ViaPartialGreaterEqual {
    fn differs(&self) -> bool;
}

impl<T, U> ViaPartialGreaterEqual for Comparand<'_, T, U>
where
    T: PartialGreaterEqual<U> + ?Sized,
    U: PartialGreaterEqual<T> + ?Sized,
{
    fn differs(&self) -> bool {
        !self.0.greater_equal(self.1) || !self.1.greater_equal(self.0)
    }
}

/// True when the two values are unequal under the best comparison capability
/// their types support.
///
/// Compile-time dispatch, no runtime cost. Fails to compile when the pair
/// supports no capability at all.
// The receiver carries one reference more than the deepest rung impl: the
// `&self` receiver of the equality rung is then exactly the step-zero type,
// and each later rung only comes up a deref step further down. With one
// reference fewer, the less rung would match by value at step zero and
// shadow equality, which is only reachable there by autoref.
#[macro_export]
macro_rules! differs {
    ($left:expr, $right:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::compare::{
            ViaPartialEq as _, ViaPartialGreater as _, ViaPartialGreaterEqual as _,
            ViaPartialLess as _, ViaPartialLessEqual as _,
        };
        (&&&&&$crate::compare::Comparand(&$left, &$right)).differs()
    }};
}
