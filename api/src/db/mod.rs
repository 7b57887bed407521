// Database access layer for the wallet API

pub mod error;
mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::Repositories;
