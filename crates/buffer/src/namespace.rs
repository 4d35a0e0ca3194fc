// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::schema::{Field, Schema, signature_of};

/// A session-scoped schema interning registry.
///
/// Structurally identical field declarations resolve to exactly one live
/// [`Schema`] instance for the registry's lifetime, so buffers loaded at
/// different times can share and compare schemas by identity
/// (`Arc::ptr_eq`) instead of deep structural equality.
///
/// The namespace is an explicit object passed into every load; independent
/// sessions each hold their own and cannot cross-contaminate schemas.
#[derive(Debug, Default)]
pub struct Namespace {
	schemas: DashMap<String, Arc<Schema>>,
}

impl Namespace {
	pub fn new() -> Self {
		Self::default()
	}

	/// Resolve `fields` to the canonical schema instance, registering a new
	/// one on first use.
	///
	/// Registration is an atomic insert-if-absent: two sessions racing to
	/// intern the same new schema converge on the winner's instance, and
	/// the loser receives it.
	pub fn make(&self, fields: Vec<Field>) -> Arc<Schema> {
		let signature = signature_of(&fields);
		if let Some(existing) = self.schemas.get(&signature) {
			return Arc::clone(existing.value());
		}
		let entry = self.schemas.entry(signature).or_insert_with(|| {
			debug!(fields = fields.len(), "registering schema");
			Arc::new(Schema::new(fields))
		});
		Arc::clone(entry.value())
	}

	/// Number of distinct schemas registered so far.
	pub fn len(&self) -> usize {
		self.schemas.len()
	}

	pub fn is_empty(&self) -> bool {
		self.schemas.is_empty()
	}
}
