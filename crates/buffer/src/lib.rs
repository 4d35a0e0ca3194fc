// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Fixed-capacity tuple buffers and their schema machinery.
//!
//! This crate is the storage core of the Relay sync engine: inbound row
//! payloads are matched against a declared [`Schema`], stored positionally
//! in a [`FixedBuffer`], read back through [`Cursor`]s, and snapshotted to
//! [`BufferDescriptor`]s for persistence. A [`Namespace`] interns schemas so
//! buffers restored at different times share one schema instance.
//!
//! Mutations follow the live-sync contract: a malformed update is dropped
//! silently instead of interrupting delivery to other viewers. Restoring a
//! descriptor is the one fallible path, see [`DescriptorError`].

mod buffer;
mod cursor;
mod descriptor;
mod error;
mod namespace;
mod row;
mod schema;

pub use buffer::{DEFAULT_CAPACITY, FixedBuffer};
pub use cursor::Cursor;
pub use descriptor::BufferDescriptor;
pub use error::DescriptorError;
pub use namespace::Namespace;
pub use row::Row;
pub use schema::{Field, Schema};
