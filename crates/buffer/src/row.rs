// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use relay_type::Value;
use serde::{Deserialize, Serialize};

/// A dynamic row payload, as produced by the inbound value decoder.
///
/// The two shapes a producer may send: a sequence already aligned with the
/// schema's declared field order, or a map keyed by field name. Untagged on
/// the wire, so a JSON array decodes as `Positional` and a JSON object as
/// `Named`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Row {
	Positional(Vec<Value>),
	Named(HashMap<String, Value>),
}

impl Row {
	pub fn positional<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
		Row::Positional(values.into_iter().map(Into::into).collect())
	}

	pub fn named<K: Into<String>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
		Row::Named(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_untagged_decode() {
		let positional: Row = serde_json::from_str(r#"[{"Int8":1},{"Utf8":"a"}]"#).unwrap();
		assert_eq!(positional, Row::positional([Value::Int8(1), Value::utf8("a")]));

		let named: Row = serde_json::from_str(r#"{"price":{"Float8":1.5}}"#).unwrap();
		assert_eq!(named, Row::named([("price", 1.5)]));
	}
}
