//! Service layer providing the in-memory post collection on top of models.
//! - Owns all posts behind a single lock.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod post_store;
