// Adapters layer: concrete implementations for external systems (the profile
// document store and the credential source backing it).

pub mod firestore;
pub mod gcp_auth;

pub use firestore::FirestoreStore;
pub use gcp_auth::{MetadataTokenProvider, StaticTokenProvider};
