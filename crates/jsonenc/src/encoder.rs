//! The `Encoder` function object every combinator consumes and produces.

use std::borrow::Borrow;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

use serde_json::Value;

use crate::{Result, options::Options};

type EncodeFn<T> = dyn Fn(&T) -> Value + Send + Sync;

/// A pure function from `&T` to a JSON value.
///
/// Encoders are cheap to clone (the function is shared behind an `Arc`) and are
/// safe to call from several threads at once. Build them once and reuse them.
pub struct Encoder<T: ?Sized> {
    run: Arc<EncodeFn<T>>,
}

impl<T: ?Sized> Clone for Encoder<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Encoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoder")
            .field("input", &core::any::type_name::<T>())
            .finish()
    }
}

impl<T: ?Sized + 'static> Encoder<T> {
    /// Wraps a closure as an encoder.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Applies the encoder to `value`.
    #[inline]
    pub fn encode(&self, value: &T) -> Value {
        (self.run)(value)
    }

    /// Reuses this encoder for another type by projecting inputs first.
    ///
    /// Method form of [`crate::adapt`].
    pub fn adapt<A, F>(self, transform: F) -> Encoder<A>
    where
        A: ?Sized + 'static,
        F: Fn(&A) -> T + Send + Sync + 'static,
        T: Sized,
    {
        crate::combinators::adapt(transform, self)
    }

    /// Reuses this encoder for any type that borrows as `T`, without copying.
    ///
    /// Typical use is `string().borrowed::<String>()`.
    pub fn borrowed<A>(self) -> Encoder<A>
    where
        A: Borrow<T> + ?Sized + 'static,
    {
        Encoder::new(move |a: &A| self.encode(<A as Borrow<T>>::borrow(a)))
    }

    /// Method form of [`crate::nullable`].
    pub fn nullable(self) -> Encoder<Option<T>>
    where
        T: Sized,
    {
        crate::combinators::nullable(self)
    }

    /// Encodes `value` and renders it as JSON text.
    pub fn encode_to_string(&self, value: &T, options: &Options) -> Result<String> {
        let v = self.encode(value);
        let mut s = if options.is_pretty() {
            serde_json::to_string_pretty(&v)?
        } else {
            serde_json::to_string(&v)?
        };
        if options.trailing_newline {
            s.push('\n');
        }
        Ok(s)
    }

    /// Encodes `value` and renders it as JSON bytes.
    pub fn encode_to_vec(&self, value: &T, options: &Options) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode_to_writer(&mut out, value, options)?;
        Ok(out)
    }

    /// Encodes `value` and writes the rendered JSON to `writer`.
    pub fn encode_to_writer<W: Write>(&self, mut writer: W, value: &T, options: &Options) -> Result<()> {
        let v = self.encode(value);
        if options.is_pretty() {
            serde_json::to_writer_pretty(&mut writer, &v)?;
        } else {
            serde_json::to_writer(&mut writer, &v)?;
        }
        if options.trailing_newline {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}
