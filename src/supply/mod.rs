//! External collaborators: job supply and result caching

pub mod cache;
pub mod supplier;

pub use cache::{Cache, MemoryCache, NoopCache};
pub use supplier::{FailingJobSupplier, JobSupplier, JsonFileSupplier, StaticJobSupplier};
