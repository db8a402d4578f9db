use serde_json::{Map, Value};

use crate::Encoder;

/// Encodes a string-keyed map as a JSON object with one member per key.
///
/// `M` is anything whose shared reference iterates `(&K, &V)`, such as
/// `HashMap<String, V>` or `BTreeMap<&str, V>`. Members follow the map's
/// iteration order.
pub fn dict_object<K, V, M>(value_encoder: Encoder<V>) -> Encoder<M>
where
    K: AsRef<str> + 'static,
    V: ?Sized + 'static,
    M: ?Sized + 'static,
    for<'a> &'a M: IntoIterator<Item = (&'a K, &'a V)>,
{
    Encoder::new(move |map: &M| {
        let mut out = Map::new();
        for (k, v) in map {
            out.insert(k.as_ref().to_owned(), value_encoder.encode(v));
        }
        Value::Object(out)
    })
}

/// `None` becomes JSON `null`; `Some(v)` is encoded with `encoder`.
///
/// The result is always a value. To drop an object member instead, use
/// [`crate::maybe_entry`].
pub fn nullable<T: 'static>(encoder: Encoder<T>) -> Encoder<Option<T>> {
    Encoder::new(move |value: &Option<T>| match value {
        Some(v) => encoder.encode(v),
        None => Value::Null,
    })
}

/// Reuses an encoder for `B` on inputs of type `A` by projecting them first.
///
/// `transform` must be total. A projection that can fail should return
/// `Option<B>` and go through [`nullable`].
pub fn adapt<A, B, F>(transform: F, encoder: Encoder<B>) -> Encoder<A>
where
    A: ?Sized + 'static,
    B: 'static,
    F: Fn(&A) -> B + Send + Sync + 'static,
{
    Encoder::new(move |value: &A| encoder.encode(&transform(value)))
}
