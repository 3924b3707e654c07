use crate::base::{APIResponse, BaseClient};
use renewal_keeper_api_structs::{dtos::DomainDTO, *};
use renewal_keeper_domain::Priority;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct DomainClient {
    base: Arc<BaseClient>,
}

pub struct DomainInput {
    pub domain: String,
    pub registration_date: String,
    pub expiration_date: String,
    pub system: String,
    pub system_url: String,
    pub priority: Option<Priority>,
}

impl DomainInput {
    fn into_dto(self) -> DomainDTO {
        DomainDTO {
            domain: self.domain,
            registration_date: self.registration_date,
            expiration_date: self.expiration_date,
            system: self.system,
            system_url: self.system_url,
            priority: self.priority,
        }
    }
}

pub struct EditDomainInput {
    pub domain: DomainInput,
    /// The current name when the domain is renamed
    pub original_domain: Option<String>,
}

impl DomainClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<list_domains::APIResponse> {
        self.base.get("list-domains", StatusCode::OK).await
    }

    pub async fn add(&self, input: DomainInput) -> APIResponse<add_domain::APIResponse> {
        self.base
            .post(input.into_dto(), "add-domain", StatusCode::OK)
            .await
    }

    pub async fn edit(&self, input: EditDomainInput) -> APIResponse<edit_domain::APIResponse> {
        let body = edit_domain::RequestBody {
            domain: input.domain.into_dto(),
            original_domain: input.original_domain,
        };
        self.base.post(body, "edit-domain", StatusCode::OK).await
    }

    pub async fn delete<T: Into<String>>(
        &self,
        domain: T,
    ) -> APIResponse<delete_domain::APIResponse> {
        let body = delete_domain::RequestBody {
            domain: domain.into(),
        };
        self.base.post(body, "delete-domain", StatusCode::OK).await
    }

    /// The rendered dashboard page
    pub async fn dashboard(&self) -> APIResponse<String> {
        self.base.get_text("domains", StatusCode::OK).await
    }
}
