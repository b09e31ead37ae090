pub mod memory_repo;
pub mod mongo_repo;

pub use memory_repo::*;
pub use mongo_repo::*;
