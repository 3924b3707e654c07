mod auth;
mod base;
mod domain;
mod status;

use auth::AuthClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use domain::DomainClient;
pub use domain::{DomainInput, EditDomainInput};
pub use renewal_keeper_api_structs::dtos::*;
pub use renewal_keeper_domain::Priority;
use status::StatusClient;
use std::sync::Arc;

// Domain
pub use renewal_keeper_api_structs::dtos::DomainDTO as Domain;
pub use renewal_keeper_api_structs::dtos::DomainWithStatusDTO as DomainWithStatus;

/// Renewal Keeper SDK
///
/// The SDK contains methods for interacting with the Renewal Keeper server
/// API. Everything except `auth` and `status` needs a session token.
#[derive(Clone)]
pub struct KeeperSDK {
    pub auth: AuthClient,
    pub domain: DomainClient,
    pub status: StatusClient,
}

impl KeeperSDK {
    pub fn new(address: String) -> Self {
        Self::from_base(BaseClient::new(address))
    }

    pub fn with_session<T: Into<String>>(address: String, session_token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_session_token(session_token.into());
        Self::from_base(base)
    }

    fn from_base(base: BaseClient) -> Self {
        let base = Arc::new(base);
        let auth = AuthClient::new(base.clone());
        let domain = DomainClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            auth,
            domain,
            status,
        }
    }
}
