pub mod reactor;

pub use crate::domain::model::{CleanupOutcome, UserDeletedEvent};
pub use crate::domain::ports::{ConfigProvider, ProfileStore, TokenProvider};
pub use crate::utils::error::Result;
