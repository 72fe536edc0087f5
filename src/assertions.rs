//! The assertion engine: compare two values, and on inequality build a
//! failure whose message shows both operands in their diagnostic form.
//!
//! [`assert_equal!`](crate::assert_equal) requires, at compile time, that
//! the operand pair supports a comparison capability (see
//! [`crate::compare`]) and that both operands are
//! [`Render`](crate::render::Render); a missing capability surfaces as a
//! build error at the call site, never at run time.

use thiserror::Error;

/// A failed assertion, carrying the composed diagnostic message.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn new(left: String, right: String, hint: impl AsRef<str>) -> Self {
        let hint = hint.as_ref();
        let mut message = format!("Assertion failed: {left} != {right}");
        if !hint.is_empty() {
            message.push_str("\nHint: ");
            message.push_str(hint);
        }
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Compares two values with the best available capability; on inequality
/// evaluates to `Err(AssertionError)` with both operands rendered.
///
/// Succeeding silently, it composes with `?` inside test actions.
#[macro_export]
macro_rules! assert_equal {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_equal!($left, $right, "")
    };
    ($left:expr, $right:expr, $hint:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::render::Render as _;
        let left = &$left;
        let right = &$right;
        if $crate::differs!(*left, *right) {
            ::core::result::Result::Err($crate::assertions::AssertionError::new(
                left.render(),
                right.render(),
                $hint,
            ))
        } else {
            ::core::result::Result::Ok(())
        }
    }};
}

/// Sugar for `assert_equal!(value, true, hint)`.
#[macro_export]
macro_rules! assert_true {
    ($value:expr $(,)?) => {
        $crate::assert_equal!($value, true)
    };
    ($value:expr, $hint:expr $(,)?) => {
        $crate::assert_equal!($value, true, $hint)
    };
}

/// [`assert_equal!`](crate::assert_equal) with an auto-composed hint naming
/// the compared expressions and the call site.
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_equal!(
            $left,
            $right,
            concat!(
                stringify!($left),
                " != ",
                stringify!($right),
                "\n",
                file!(),
                " : ",
                line!()
            )
        )
    };
}

/// [`assert_true!`](crate::assert_true) with an auto-composed hint naming
/// the checked expression and the call site.
#[macro_export]
macro_rules! check {
    ($value:expr $(,)?) => {
        $crate::assert_true!(
            $value,
            concat!(stringify!($value), " is false", "\n", file!(), " : ", line!())
        )
    };
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::adapters::Stack;
    use crate::assertions::AssertionError;

    #[test]
    fn equal_values_pass_silently() {
        let outcome: Result<(), AssertionError> = crate::assert_equal!(1, 1);
        assert_matches!(outcome, Ok(()));
    }

    #[test]
    fn unequal_scalars_report_both_operands() {
        let outcome = crate::assert_equal!(1, 2);
        let err = outcome.unwrap_err();
        assert_eq!(err.message(), "Assertion failed: 1 != 2");
    }

    #[test]
    fn unequal_sequences_report_rendered_forms() {
        let filled = vec![1];
        let empty: Vec<i32> = Vec::new();
        let err = crate::assert_equal!(filled, empty).unwrap_err();
        assert_eq!(err.message(), "Assertion failed: [1] != []");
    }

    #[test]
    fn unequal_maps_report_braced_pairs() {
        let mut filled = std::collections::BTreeMap::new();
        filled.insert(1, 1);
        let empty: std::collections::BTreeMap<i32, i32> = std::collections::BTreeMap::new();
        let err = crate::assert_equal!(filled, empty).unwrap_err();
        assert_eq!(err.message(), "Assertion failed: [{1:1}] != []");
    }

    #[test]
    fn unequal_adapters_report_backing_sequences() {
        let mut filled = Stack::new();
        filled.push(1);
        let empty: Stack<i32> = Stack::new();
        let err = crate::assert_equal!(filled, empty).unwrap_err();
        assert_eq!(err.message(), "Assertion failed: [1] != []");
    }

    #[test]
    fn hint_is_appended_on_its_own_line() {
        let err = crate::assert_equal!(1, 2, "counter drifted").unwrap_err();
        assert_eq!(
            err.message(),
            "Assertion failed: 1 != 2\nHint: counter drifted"
        );
    }

    #[test]
    fn empty_hint_is_omitted() {
        let err = crate::assert_equal!(1, 2, "").unwrap_err();
        assert!(!err.message().contains("Hint"));
    }

    #[test]
    fn assert_true_is_equality_against_true() {
        assert_matches!(crate::assert_true!(1 < 2), Ok(()));
        let err = crate::assert_true!(1 > 2, "ordering broke").unwrap_err();
        assert_eq!(
            err.message(),
            "Assertion failed: false != true\nHint: ordering broke"
        );
    }

    #[test]
    fn check_eq_names_expressions_and_call_site() {
        let err = crate::check_eq!(1 + 1, 3).unwrap_err();
        let message = err.message();
        assert!(message.starts_with("Assertion failed: 2 != 3\nHint: 1 + 1 != 3\n"));
        assert!(message.contains("assertions.rs"));
    }

    #[test]
    fn check_names_expression_and_call_site() {
        let err = crate::check!(1 > 2).unwrap_err();
        let message = err.message();
        assert!(message.contains("1 > 2 is false"));
        assert!(message.contains("assertions.rs"));
    }

    #[test]
    fn heterogeneous_operands() {
        let err = crate::assert_equal!(String::from("left"), "right").unwrap_err();
        assert_eq!(err.message(), "Assertion failed: left != right");
    }
}
