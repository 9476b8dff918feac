pub mod credential_service;
pub use credential_service::{AdminId, CredentialError, CredentialService};

pub mod credential_service_impl;
pub use credential_service_impl::SeaOrmCredentialService;
