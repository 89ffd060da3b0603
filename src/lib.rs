pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod provision;
pub mod render;
pub mod router;
pub mod types;

pub use config::Config;
pub use error::RegistryError;
pub use router::{RegistryState, registry_router};
