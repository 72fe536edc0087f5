//! Diagnostic rendering of scalars and container-shaped values.
//!
//! Every printable type gets exactly one shape:
//!
//! - scalars render through their native `Display` form;
//! - sequence shapes render as `[e0, e1, ..., en]`;
//! - map shapes render as `[{k0:v0}, {k1:v1}, ...]`;
//! - adapter shapes (containers that hide iteration, see
//!   [`crate::adapters`]) render like the sequence backing them, reached
//!   through the read-only [`DebugView`] capability.
//!
//! Rendering is pure: same value, same text, no side effects.

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A value with a canonical diagnostic text form.
pub trait Render {
    fn render(&self) -> String;
}

/// Read-only diagnostic access to the backing sequence of an adapter
/// container.
///
/// Adapter containers intentionally keep iteration out of their public
/// contract; this capability exists solely so failure messages can show
/// their contents. Implementations yield the backing elements in storage
/// order and must never expose mutation.
pub trait DebugView {
    type Item;

    fn debug_view(&self) -> impl Iterator<Item = &Self::Item>;
}

/// Renders an ordered run of elements as `[e0, e1, ..., en]`.
pub fn render_sequence<'a, T, I>(items: I) -> String
where
    T: Render + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut out = String::from("[");
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.render());
    }
    out.push(']');
    out
}

/// Renders key/value pairs as `[{k0:v0}, {k1:v1}, ...]`.
pub fn render_map<'a, K, V, I>(pairs: I) -> String
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut out = String::from("[");
    for (index, (key, value)) in pairs.into_iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        out.push('{');
        out.push_str(&key.render());
        out.push(':');
        out.push_str(&value.render());
        out.push('}');
    }
    out.push(']');
    out
}

/// Renders an adapter container through its [`DebugView`].
pub fn render_adapter<A>(adapter: &A) -> String
where
    A: DebugView,
    A::Item: Render,
{
    render_sequence(adapter.debug_view())
}

macro_rules! render_via_display {
    ($($scalar:ty),* $(,)?) => {$(
        impl Render for $scalar {
            fn render(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

render_via_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
);

impl Render for str {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Render for &str {
    fn render(&self) -> String {
        self.to_string()
    }
}

macro_rules! render_as_sequence {
    ($($container:ident),* $(,)?) => {$(
        impl<T: Render> Render for $container<T> {
            fn render(&self) -> String {
                render_sequence(self.iter())
            }
        }
    )*};
}

render_as_sequence!(Vec, VecDeque, LinkedList, BTreeSet, HashSet, BinaryHeap);

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        render_sequence(self.iter())
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        render_sequence(self.iter())
    }
}

macro_rules! render_as_map {
    ($($map:ident),* $(,)?) => {$(
        impl<K: Render, V: Render> Render for $map<K, V> {
            fn render(&self) -> String {
                render_map(self.iter())
            }
        }
    )*};
}

render_as_map!(BTreeMap, HashMap);
