//! Sequence encoders: one JSON array element per input element, in order.

use serde_json::Value;

use crate::Encoder;

/// Lifts an element encoder to any ordered collection.
///
/// `L` is anything whose shared reference iterates `&T`: `Vec<T>`,
/// `VecDeque<T>`, `BTreeSet<T>`, `[T; N]` and so on.
///
/// ```
/// use jsonenc::{int, list, Encoder};
/// use std::collections::VecDeque;
///
/// let e: Encoder<VecDeque<i64>> = list(int());
/// let v = e.encode(&VecDeque::from([3, 1, 2]));
/// assert_eq!(v, serde_json::json!([3, 1, 2]));
/// ```
pub fn list<T, L>(element: Encoder<T>) -> Encoder<L>
where
    T: ?Sized + 'static,
    L: ?Sized + 'static,
    for<'a> &'a L: IntoIterator<Item = &'a T>,
{
    Encoder::new(move |items: &L| {
        Value::Array(items.into_iter().map(|item| element.encode(item)).collect())
    })
}

/// Lifts an element encoder to slices.
pub fn array<T: 'static>(element: Encoder<T>) -> Encoder<[T]> {
    Encoder::new(move |items: &[T]| {
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(element.encode(item));
        }
        Value::Array(out)
    })
}
