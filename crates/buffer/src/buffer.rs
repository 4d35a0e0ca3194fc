// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use relay_type::Value;
use tracing::trace;

use crate::{
	cursor::Cursor,
	descriptor::BufferDescriptor,
	error::DescriptorError,
	namespace::Namespace,
	row::Row,
	schema::Schema,
};

/// Capacity used when a restored descriptor declares no usable capacity.
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed-capacity, positionally indexed container of schema-matched
/// tuples.
///
/// The slot array is allocated at construction and never resized; the index
/// domain is exactly `[0, capacity)`. A slot either holds a tuple matching
/// the schema or is absent.
///
/// Mutations never fail loudly: a batch of the wrong length, an unparseable
/// key, an out-of-range index or a row the schema rejects are all complete
/// no-ops, observable only by re-reading the slot. One malformed update
/// from a producer must not interrupt delivery to other viewers.
#[derive(Debug)]
pub struct FixedBuffer {
	schema: Arc<Schema>,
	slots: Vec<Option<Vec<Value>>>,
}

impl FixedBuffer {
	/// A fresh buffer with `capacity` absent slots.
	pub fn new(schema: Arc<Schema>, capacity: usize) -> Self {
		Self {
			schema,
			slots: vec![None; capacity],
		}
	}

	pub fn schema(&self) -> &Arc<Schema> {
		&self.schema
	}

	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	/// Replace every slot in one batch.
	///
	/// The batch length must equal the capacity exactly, otherwise nothing
	/// is applied: a partially applied batch would present an inconsistent
	/// view mid-sync. Within an accepted batch each element goes through
	/// [`set_at`](Self::set_at) individually, so elements the schema
	/// rejects leave their own slot unchanged while the others still land.
	pub fn put(&mut self, rows: Vec<Option<Row>>) {
		if rows.len() != self.slots.len() {
			trace!(expected = self.slots.len(), actual = rows.len(), "put dropped, batch length != capacity");
			return;
		}
		for (index, row) in rows.into_iter().enumerate() {
			self.set_at(index, row);
		}
	}

	/// Wire entry point: the key is the stringified slot index. This buffer
	/// kind is positional-only, so a key that does not parse as a
	/// non-negative integer is dropped; key-addressed buffers are a
	/// different kind.
	pub fn set(&mut self, key: &str, row: Option<Row>) {
		match key.parse::<usize>() {
			Ok(index) => self.set_at(index, row),
			Err(_) => trace!(key, "set dropped, key is not a slot index"),
		}
	}

	/// Set one slot by index. `None` clears the slot unconditionally; a row
	/// replaces the slot only if the schema matches it.
	pub fn set_at(&mut self, index: usize, row: Option<Row>) {
		if index >= self.slots.len() {
			trace!(index, capacity = self.slots.len(), "set dropped, index out of range");
			return;
		}
		match row {
			None => self.slots[index] = None,
			Some(row) => match self.schema.match_row(&row) {
				Some(tuple) => self.slots[index] = Some(tuple),
				None => trace!(index, "set dropped, row does not match schema"),
			},
		}
	}

	/// Read by stringified index key.
	pub fn get(&self, key: &str) -> Option<Cursor<'_>> {
		self.get_at(key.parse::<usize>().ok()?)
	}

	/// Read by index. `None` for an out-of-range index and for an absent
	/// slot; never panics.
	pub fn get_at(&self, index: usize) -> Option<Cursor<'_>> {
		let tuple = self.slots.get(index)?.as_deref()?;
		Some(Cursor::new(&self.schema, tuple))
	}

	/// Snapshot the buffer: field declarations in order, every slot (absent
	/// slots included) and the capacity.
	pub fn dump(&self) -> BufferDescriptor {
		BufferDescriptor {
			fields: self.schema.fields().to_vec(),
			tuples: self.slots.clone(),
			capacity: self.slots.len() as i64,
		}
	}

	/// Restore a buffer from a descriptor, resolving the schema through the
	/// namespace so structurally equal schemas share one instance.
	///
	/// An empty tuple sequence yields a fresh buffer at the declared
	/// capacity ([`DEFAULT_CAPACITY`] when the declaration is zero or
	/// negative). A non-empty sequence is adopted as the live slot storage
	/// after integrity checks: the declared capacity must agree with the
	/// tuple count and every present tuple must have the schema's arity.
	/// Value kinds are not re-validated; restore trusts its own dumps.
	pub fn load(namespace: &Namespace, descriptor: BufferDescriptor) -> Result<Self, DescriptorError> {
		let schema = namespace.make(descriptor.fields);
		if descriptor.tuples.is_empty() {
			let capacity = if descriptor.capacity <= 0 {
				DEFAULT_CAPACITY
			} else {
				descriptor.capacity as usize
			};
			return Ok(Self::new(schema, capacity));
		}
		if descriptor.capacity != descriptor.tuples.len() as i64 {
			return Err(DescriptorError::CapacityMismatch {
				declared: descriptor.capacity,
				actual: descriptor.tuples.len(),
			});
		}
		for (index, tuple) in descriptor.tuples.iter().enumerate() {
			if let Some(tuple) = tuple {
				if tuple.len() != schema.len() {
					return Err(DescriptorError::TupleArity {
						index,
						expected: schema.len(),
						actual: tuple.len(),
					});
				}
			}
		}
		Ok(Self {
			schema,
			slots: descriptor.tuples,
		})
	}
}
