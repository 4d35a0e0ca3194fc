// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

/// Data-integrity faults detected while restoring a descriptor.
///
/// Runtime mutations are silently dropped when malformed; a descriptor that
/// disagrees with itself is different. It is attributable to the
/// persistence collaborator and is surfaced instead of repaired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
	#[error("descriptor declares capacity {declared} but carries {actual} tuples")]
	CapacityMismatch { declared: i64, actual: usize },
	#[error("tuple at slot {index} has {actual} values, schema declares {expected} fields")]
	TupleArity { index: usize, expected: usize, actual: usize },
}
