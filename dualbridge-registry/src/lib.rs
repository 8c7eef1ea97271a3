pub mod authz;
pub mod cache;
pub mod error;
pub mod helpers;
pub mod registry;
pub mod state;

pub use authz::{authorize, Mutation, Unauthorized};
pub use cache::CacheStorage;
pub use error::RegistryError;
pub use registry::TokenPairRegistry;
pub use state::{OwnerKind, TokenPair};
