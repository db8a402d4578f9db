#![doc = include_str!("../README.md")]

pub mod error;
pub mod options;
pub mod encoder;
pub mod primitives;
pub mod containers;
pub mod object;
pub mod combinators;

#[cfg(feature = "chrono")]
pub mod datetime;

pub use crate::combinators::{adapt, dict_object, nullable};
pub use crate::containers::{array, list};
pub use crate::encoder::Encoder;
pub use crate::error::{Error, Result};
pub use crate::object::{ObjectEntry, entry, entry_with, maybe_entry, maybe_entry_with, object};
pub use crate::options::{Format, Options};
pub use crate::primitives::{bool, constant, float, int, null, string, uint, value};

pub use serde_json::Value;
