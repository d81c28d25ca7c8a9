//! Storage traits owned by the domain layer.
//!
//! The domain defines what it needs from storage as traits; the concrete
//! backends in `crate::infrastructure::persistence` implement them. Services
//! are tested against `mockall` mocks generated from the same traits.
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Short URL mapping storage and lookup

pub mod mapping_repository;

pub use mapping_repository::MappingRepository;

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
