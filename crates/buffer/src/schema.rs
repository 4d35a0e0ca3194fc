// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use relay_type::{Type, Value};
use serde::{Deserialize, Serialize};

use crate::row::Row;

/// A single named, typed column declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
	pub name: String,
	#[serde(rename = "type")]
	pub ty: Type,
}

impl Field {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

/// An ordered, named field declaration that dynamic rows are matched
/// against.
///
/// Declaration order is semantically significant: field `i` maps to tuple
/// slot `i`, and the mapping is fixed at construction. Schemas are immutable
/// and shared by reference; see [`crate::Namespace`] for interning.
#[derive(Debug)]
pub struct Schema {
	fields: Vec<Field>,
	positions: HashMap<String, usize>,
	signature: String,
}

impl Schema {
	/// Field names must be unique within the schema; violating that is a
	/// caller bug.
	pub fn new(fields: Vec<Field>) -> Self {
		let mut positions = HashMap::with_capacity(fields.len());
		for (index, field) in fields.iter().enumerate() {
			let previous = positions.insert(field.name.clone(), index);
			assert!(previous.is_none(), "duplicate field name '{}'", field.name);
		}
		let signature = signature_of(&fields);
		Self {
			fields,
			positions,
			signature,
		}
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Positional index of a declared field name.
	pub fn position(&self, name: &str) -> Option<usize> {
		self.positions.get(name).copied()
	}

	/// Interning identity, a deterministic function of the ordered
	/// (name, kind) pairs. Never used for business logic.
	pub fn signature(&self) -> &str {
		&self.signature
	}

	/// Match a dynamic row against the declared fields.
	///
	/// A positional row must carry exactly one value per field; a named row
	/// may omit fields (they fill with [`Value::Undefined`]) but must not
	/// carry unknown keys. Each present value is coerced to its field's
	/// declared kind; one irreconcilable value fails the whole row.
	///
	/// Pure: on success the returned tuple is freshly built and exclusively
	/// owned by the caller.
	pub fn match_row(&self, row: &Row) -> Option<Vec<Value>> {
		match row {
			Row::Positional(values) => {
				if values.len() != self.fields.len() {
					return None;
				}
				self.fields
					.iter()
					.zip(values)
					.map(|(field, value)| value.clone().coerce(field.ty))
					.collect()
			}
			Row::Named(entries) => {
				if entries.keys().any(|key| !self.positions.contains_key(key)) {
					return None;
				}
				self.fields
					.iter()
					.map(|field| match entries.get(&field.name) {
						Some(value) => value.clone().coerce(field.ty),
						None => Some(Value::Undefined),
					})
					.collect()
			}
		}
	}
}

/// Signature of an ordered field declaration, shared by [`Schema::new`] and
/// the registry lookup path so the two can never drift.
pub(crate) fn signature_of(fields: &[Field]) -> String {
	let mut signature = String::with_capacity(fields.len() * 16);
	for field in fields {
		signature.push_str(&field.name);
		signature.push(':');
		signature.push_str(field.ty.name());
		signature.push(';');
	}
	signature
}
