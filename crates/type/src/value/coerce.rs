// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{DateTime, Type, Value};

impl Value {
	/// Reconcile a dynamic value with a declared field type.
	///
	/// Returns the schema-conformant value, or `None` when the kinds are
	/// irreconcilable. Undefined passes through every target: a field with
	/// no value is representable under any declaration.
	///
	/// Widening rules beyond identity:
	/// - `Int8` -> `Float8`
	/// - `Int8` (epoch milliseconds) -> `DateTime`
	/// - `Utf8` (parseable literal) -> `DateTime`
	pub fn coerce(self, target: Type) -> Option<Value> {
		if self.is_undefined() {
			return Some(Value::Undefined);
		}
		if self.get_type() == target {
			return Some(self);
		}
		match (self, target) {
			(Value::Int8(value), Type::Float8) => Some(Value::float8(value as f64)),
			(Value::Int8(millis), Type::DateTime) => {
				DateTime::from_timestamp_millis(millis).map(Value::DateTime)
			}
			(Value::Utf8(literal), Type::DateTime) => {
				DateTime::parse(&literal).ok().map(Value::DateTime)
			}
			_ => None,
		}
	}
}
