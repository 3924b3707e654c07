use crate::{
    error::KeeperError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use renewal_keeper_api_structs::delete_domain::{APIResponse, RequestBody};
use renewal_keeper_infra::{DomainListRepoError, KeeperContext};

pub async fn delete_domain_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = DeleteDomainUseCase {
        domain: body.0.domain.trim().to_string(),
    };

    execute(usecase, &ctx)
        .await
        .map(|removed| {
            let message = if removed == 0 {
                "Nothing to delete".to_string()
            } else {
                "Deleted".to_string()
            };
            HttpResponse::Ok().json(APIResponse::new(message))
        })
        .map_err(KeeperError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyDomainName,
    MalformedDomainList,
    StorageError,
}

impl From<DomainListRepoError> for UseCaseError {
    fn from(e: DomainListRepoError) -> Self {
        match e {
            DomainListRepoError::Malformed(_) => Self::MalformedDomainList,
            DomainListRepoError::Storage(_) => Self::StorageError,
        }
    }
}

impl From<UseCaseError> for KeeperError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyDomainName => {
                Self::BadClientData("The domain name must not be empty".into())
            }
            UseCaseError::MalformedDomainList | UseCaseError::StorageError => {
                Self::InternalError
            }
        }
    }
}

/// Removes every record with the given name. Deleting a name that is not
/// in the list is not an error.
#[derive(Debug)]
pub struct DeleteDomainUseCase {
    pub domain: String,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteDomainUseCase {
    /// Number of removed records
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteDomain";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error> {
        if self.domain.is_empty() {
            return Err(UseCaseError::EmptyDomainName);
        }

        let mut records = ctx.repos.domains.find_all().await?;
        let count_before = records.len();
        records.retain(|r| r.domain != self.domain);
        let removed = count_before - records.len();

        if removed > 0 {
            ctx.repos
                .domains
                .save_all(&records)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        Ok(removed)
    }
}
