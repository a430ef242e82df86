pub mod fixtures;
pub mod memory;
pub mod models;
pub mod repository;

pub use memory::MemoryRepository;
pub use repository::{Mutation, Record, RecordPredicate, Repository, RepositoryError};
