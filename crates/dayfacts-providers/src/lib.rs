// Error types
pub mod error;

// Timeout-bounded HTTP client
pub mod client;

// Provider implementations
pub mod jikan;
pub mod tmdb;
pub mod wikipedia;

// Provider registry
pub mod registry;

// Client
pub use client::{DEFAULT_TIMEOUT_MS, HttpClient};

// Registry
pub use registry::{ProviderMetadata, get_all_providers, get_provider_metadata};

// Error types
pub use error::{Error, Result};

/// Shown when a provider item carries no usable image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/6/65/No-Image-Placeholder.svg";
