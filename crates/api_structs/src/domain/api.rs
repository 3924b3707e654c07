use crate::dtos::{DomainDTO, DomainWithStatusDTO};
use serde::{Deserialize, Serialize};

/// Body of every successful domain mutation
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMutationResponse {
    pub success: bool,
    pub message: String,
}

impl DomainMutationResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

pub mod add_domain {
    use super::*;

    pub type RequestBody = DomainDTO;

    pub type APIResponse = DomainMutationResponse;
}

pub mod delete_domain {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub domain: String,
    }

    pub type APIResponse = DomainMutationResponse;
}

pub mod edit_domain {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(flatten)]
        pub domain: DomainDTO,
        /// Set when the record is renamed
        #[serde(default)]
        pub original_domain: Option<String>,
    }

    pub type APIResponse = DomainMutationResponse;
}

pub mod list_domains {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub domains: Vec<DomainWithStatusDTO>,
    }
}
