//! Domain model for the product inventory.
//!
//! # Responsibility
//! - Define the canonical record persisted to the `produto` table.
//!
//! # Invariants
//! - `id` is storage-assigned; unsaved records carry no id.
//! - `price >= 0` is enforced at registration time by the service layer.

pub mod product;
