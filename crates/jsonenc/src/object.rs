//! Record encoders built from named, possibly omitted fields.
//!
//! Presence is decided per value: one `object` description serves every
//! instance of a type, including instances where some optional fields are
//! missing.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::Encoder;

type FieldFn<T> = dyn Fn(&T) -> Option<Value> + Send + Sync;

/// One named field of an object encoder.
///
/// Evaluating the entry against a value yields `None` when the field should be
/// left out of the object, or `Some(json)` when it should be written.
pub struct ObjectEntry<T: ?Sized> {
    name: Arc<str>,
    field: Arc<FieldFn<T>>,
}

impl<T: ?Sized> Clone for ObjectEntry<T> {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
            field: Arc::clone(&self.field),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ObjectEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectEntry").field("name", &self.name).finish()
    }
}

impl<T: ?Sized + 'static> ObjectEntry<T> {
    /// Builds an entry from a raw field function.
    ///
    /// Use this for fields whose presence depends on something other than an
    /// `Option` in the input, e.g. skipping empty collections.
    pub fn new<F>(name: impl Into<Arc<str>>, field: F) -> Self
    where
        F: Fn(&T) -> Option<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            field: Arc::new(field),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Evaluates the field against `value`.
    #[inline]
    pub fn evaluate(&self, value: &T) -> Option<Value> {
        (self.field)(value)
    }
}

/// A field that is always written.
pub fn entry<T, U, F>(name: impl Into<Arc<str>>, accessor: F, encoder: Encoder<U>) -> ObjectEntry<T>
where
    T: ?Sized + 'static,
    U: ?Sized + 'static,
    F: Fn(&T) -> &U + Send + Sync + 'static,
{
    ObjectEntry::new(name, move |value: &T| Some(encoder.encode(accessor(value))))
}

/// A field that is written only when `accessor` yields `Some`.
pub fn maybe_entry<T, U, F>(
    name: impl Into<Arc<str>>,
    accessor: F,
    encoder: Encoder<U>,
) -> ObjectEntry<T>
where
    T: ?Sized + 'static,
    U: ?Sized + 'static,
    F: Fn(&T) -> Option<&U> + Send + Sync + 'static,
{
    ObjectEntry::new(name, move |value: &T| accessor(value).map(|u| encoder.encode(u)))
}

/// Like [`entry`], for accessors that compute an owned value.
pub fn entry_with<T, U, F>(
    name: impl Into<Arc<str>>,
    accessor: F,
    encoder: Encoder<U>,
) -> ObjectEntry<T>
where
    T: ?Sized + 'static,
    U: 'static,
    F: Fn(&T) -> U + Send + Sync + 'static,
{
    ObjectEntry::new(name, move |value: &T| Some(encoder.encode(&accessor(value))))
}

/// Like [`maybe_entry`], for accessors that compute an owned value.
///
/// A projection that can fail belongs here: `None` drops the field.
pub fn maybe_entry_with<T, U, F>(
    name: impl Into<Arc<str>>,
    accessor: F,
    encoder: Encoder<U>,
) -> ObjectEntry<T>
where
    T: ?Sized + 'static,
    U: 'static,
    F: Fn(&T) -> Option<U> + Send + Sync + 'static,
{
    ObjectEntry::new(name, move |value: &T| accessor(value).map(|u| encoder.encode(&u)))
}

/// Assembles entries into an encoder producing a JSON object.
///
/// Members appear in entry order, restricted to the entries present for the
/// encoded value. No entries, or none present, gives `{}`. If two present
/// entries share a name the later value wins and keeps the earlier position.
///
/// ```
/// use jsonenc::{entry, int, maybe_entry, object, string};
/// use serde_json::json;
///
/// struct User { id: i64, nick: Option<String> }
///
/// let user = object([
///     entry("id", |u: &User| &u.id, int()),
///     maybe_entry("nick", |u: &User| u.nick.as_deref(), string()),
/// ]);
///
/// assert_eq!(user.encode(&User { id: 1, nick: None }), json!({"id": 1}));
/// assert_eq!(
///     user.encode(&User { id: 2, nick: Some("ann".into()) }),
///     json!({"id": 2, "nick": "ann"})
/// );
/// ```
pub fn object<T, I>(entries: I) -> Encoder<T>
where
    T: ?Sized + 'static,
    I: IntoIterator<Item = ObjectEntry<T>>,
{
    let entries: Arc<[ObjectEntry<T>]> = entries.into_iter().collect();
    Encoder::new(move |value: &T| {
        let mut out = Map::with_capacity(entries.len());
        for e in entries.iter() {
            if let Some(v) = e.evaluate(value) {
                out.insert(e.name().to_owned(), v);
            }
        }
        Value::Object(out)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{int, string};
    use serde_json::json;

    #[test]
    fn entry_name_is_fixed() {
        let e: ObjectEntry<i64> = entry("n", |n: &i64| n, int());
        assert_eq!(e.name(), "n");
        assert_eq!(e.evaluate(&3), Some(json!(3)));
        assert_eq!(e.clone().name(), "n");
    }

    #[test]
    fn maybe_entry_absent_and_present() {
        let e: ObjectEntry<Option<i64>> = maybe_entry("n", |v: &Option<i64>| v.as_ref(), int());
        assert_eq!(e.evaluate(&None), None);
        assert_eq!(e.evaluate(&Some(7)), Some(json!(7)));
    }

    #[test]
    fn custom_entry_skips_empty_strings() {
        let e = ObjectEntry::new("s", |s: &String| {
            (!s.is_empty()).then(|| string().encode(s))
        });
        let o = object([e]);
        assert_eq!(o.encode(&String::new()), json!({}));
        assert_eq!(o.encode(&"x".to_string()), json!({"s": "x"}));
    }

    #[test]
    fn duplicate_names_last_value_wins() {
        let o = object([
            entry("a", |n: &i64| n, int()),
            entry("b", |n: &i64| n, int()),
            ObjectEntry::new("a", |n: &i64| Some(json!(n + 100))),
        ]);
        let v = o.encode(&1);
        assert_eq!(v, json!({"a": 101, "b": 1}));
        let keys: Vec<&String> = v.as_object().map(|m| m.keys().collect()).unwrap_or_default();
        assert_eq!(keys, ["a", "b"]);
    }
}
