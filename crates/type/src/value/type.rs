// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The declared kind of a schema field.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// An 8-byte floating point
	Float8,
	/// An 8-byte signed integer
	Int8,
	/// A UTF-8 encoded text
	Utf8,
	/// A date and time value with nanosecond precision in UTC
	DateTime,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	/// The lowercase wire name, as used in schema declarations.
	pub fn name(&self) -> &'static str {
		match self {
			Type::Boolean => "bool",
			Type::Float8 => "float",
			Type::Int8 => "int",
			Type::Utf8 => "str",
			Type::DateTime => "datetime",
			Type::Undefined => "undefined",
		}
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_number(&self) -> bool {
		matches!(self, Type::Float8 | Type::Int8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::DateTime)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Type {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"bool" => Ok(Type::Boolean),
			"float" => Ok(Type::Float8),
			"int" => Ok(Type::Int8),
			"str" => Ok(Type::Utf8),
			"datetime" => Ok(Type::DateTime),
			"undefined" => Ok(Type::Undefined),
			_ => Err(TypeError::UnknownType(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_name_round_trip() {
		for ty in [Type::Boolean, Type::Float8, Type::Int8, Type::Utf8, Type::DateTime, Type::Undefined] {
			assert_eq!(ty.name().parse::<Type>().unwrap(), ty);
		}
	}

	#[test]
	fn test_unknown_name() {
		assert_eq!("decimal".parse::<Type>(), Err(TypeError::UnknownType("decimal".to_string())));
	}

	#[test]
	fn test_predicates() {
		assert!(Type::Boolean.is_bool());
		assert!(Type::Float8.is_number());
		assert!(Type::Int8.is_number());
		assert!(Type::Utf8.is_utf8());
		assert!(Type::DateTime.is_temporal());
		assert!(!Type::Undefined.is_number());
	}
}
