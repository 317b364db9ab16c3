pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

#[cfg(feature = "lambda")]
pub use config::lambda::LambdaConfig;

pub use adapters::{FirestoreStore, MetadataTokenProvider, StaticTokenProvider};
pub use crate::core::reactor::DeletionReactor;
pub use domain::model::{CleanupOutcome, UserDeletedEvent};
pub use utils::error::{CleanupError, Result};
