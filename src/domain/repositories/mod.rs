//! Repository trait definitions for the domain layer.
//!
//! The redirect service reaches the package index only through
//! [`IndexRepository`], so tests can substitute a `mockall` mock for the
//! network.

pub mod index_repository;

pub use index_repository::{IndexError, IndexRepository};

#[cfg(test)]
pub use index_repository::MockIndexRepository;
