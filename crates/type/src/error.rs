// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

/// Errors produced by value construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
	/// NaN has no place in a total order and is never stored.
	#[error("NaN is not a representable float value")]
	NotANumber,
	/// A temporal literal did not parse.
	#[error("invalid datetime literal '{literal}': {reason}")]
	InvalidDateTime { literal: String, reason: &'static str },
	/// An unknown type name was requested, e.g. while decoding a schema.
	#[error("unknown type name '{0}'")]
	UnknownType(String),
}
