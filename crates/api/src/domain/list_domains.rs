use crate::{
    error::KeeperError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use renewal_keeper_api_structs::dtos::DomainWithStatusDTO;
use renewal_keeper_api_structs::list_domains::APIResponse;
use renewal_keeper_domain::DomainRecord;
use renewal_keeper_infra::{DomainListRepoError, KeeperContext};

pub async fn list_domains_controller(
    http_req: HttpRequest,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    protect_route(&http_req, &ctx).await?;

    let now = ctx.sys.get_timestamp_millis();
    execute(ListDomainsUseCase {}, &ctx)
        .await
        .map(|records| {
            let domains = records
                .into_iter()
                .map(|record| {
                    let lifetime = record.lifetime(now).ok();
                    DomainWithStatusDTO::new(record, lifetime)
                })
                .collect();
            HttpResponse::Ok().json(APIResponse { domains })
        })
        .map_err(KeeperError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
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
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[derive(Debug)]
pub struct ListDomainsUseCase {}

#[async_trait::async_trait(?Send)]
impl UseCase for ListDomainsUseCase {
    type Response = Vec<DomainRecord>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListDomains";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.domains.find_all().await?)
    }
}
