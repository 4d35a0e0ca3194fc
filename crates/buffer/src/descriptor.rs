// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use relay_type::Value;
use serde::{Deserialize, Serialize};

use crate::schema::Field;

/// The serializable snapshot of a fixed buffer, and the only structure
/// committed to external collaborators.
///
/// Field order is significant and must survive a dump/load round trip
/// verbatim. Absent slots are carried explicitly as `None` so the slot
/// layout is reproduced exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BufferDescriptor {
	pub fields: Vec<Field>,
	pub tuples: Vec<Option<Vec<Value>>>,
	/// Declared capacity. Signed because restored descriptors may declare
	/// zero or a negative value, which reads as "use the default" when no
	/// tuples are carried.
	pub capacity: i64,
}
