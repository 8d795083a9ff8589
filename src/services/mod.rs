// Service exports
pub mod matching;
pub mod postgres;
pub mod store;

pub use matching::{MatchingService, ServiceError};
pub use postgres::PostgresProfileStore;
pub use store::{InMemoryProfileStore, ProfileStore, StoreError};
