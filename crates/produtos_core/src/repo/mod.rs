//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for product records.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - All statements are parameterized; data values are never concatenated
//!   into SQL text.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod product_repo;
