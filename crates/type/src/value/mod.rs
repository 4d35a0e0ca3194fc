// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

mod coerce;
mod datetime;
mod into;
mod ordered_f64;
mod r#type;

pub use datetime::DateTime;
pub use ordered_f64::OrderedF64;
pub use r#type::Type;

/// A dynamic scalar, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// An 8-byte signed integer
	Int8(i64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A date and time value with nanosecond precision in UTC
	DateTime(DateTime),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	/// Build a float value. NaN collapses to [`Value::Undefined`]; a buffer
	/// never stores a NaN.
	pub fn float8(value: f64) -> Self {
		OrderedF64::try_from(value).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn utf8(value: impl Into<String>) -> Self {
		Value::Utf8(value.into())
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float8(_) => Type::Float8,
			Value::Int8(_) => Type::Int8,
			Value::Utf8(_) => Type::Utf8,
			Value::DateTime(_) => Type::DateTime,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Boolean(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Utf8(value) => f.write_str(value),
			Value::DateTime(value) => Display::fmt(value, f),
		}
	}
}
