use crate::{
    error::KeeperError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use renewal_keeper_api_structs::edit_domain::{APIResponse, RequestBody};
use renewal_keeper_domain::{DomainRecord, DomainRecordError};
use renewal_keeper_infra::{DomainListRepoError, KeeperContext};

pub async fn edit_domain_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    protect_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = EditDomainUseCase {
        record: body.domain.into_record(),
        original_domain: body
            .original_domain
            .map(|domain| domain.trim().to_string())
            .filter(|domain| !domain.is_empty()),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| {
            HttpResponse::Ok().json(APIResponse::new(format!("Updated {}", record.domain)))
        })
        .map_err(KeeperError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidRecord(DomainRecordError),
    NotFound(String),
    DomainAlreadyExists(String),
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
            UseCaseError::InvalidRecord(e) => Self::BadClientData(e.to_string()),
            UseCaseError::NotFound(domain) => {
                Self::NotFound(format!("The domain `{}` was not found", domain))
            }
            UseCaseError::DomainAlreadyExists(domain) => Self::Conflict(format!(
                "Can not rename to {}, that domain is already tracked.",
                domain
            )),
            UseCaseError::MalformedDomainList | UseCaseError::StorageError => {
                Self::InternalError
            }
        }
    }
}

/// Replaces a record. With an `original_domain` that differs from the new
/// name the record is renamed: the old entries are removed and the new
/// record goes to the end of the list. Otherwise the record is updated
/// where it is.
#[derive(Debug)]
pub struct EditDomainUseCase {
    pub record: DomainRecord,
    pub original_domain: Option<String>,
}

impl EditDomainUseCase {
    fn renamed_from(&self) -> Option<&str> {
        self.original_domain
            .as_deref()
            .filter(|original| *original != self.record.domain)
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for EditDomainUseCase {
    type Response = DomainRecord;

    type Error = UseCaseError;

    const NAME: &'static str = "EditDomain";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error> {
        self.record.validate().map_err(UseCaseError::InvalidRecord)?;

        let mut records = ctx.repos.domains.find_all().await?;

        match self.renamed_from() {
            Some(original) => {
                if !records.iter().any(|r| r.domain == original) {
                    return Err(UseCaseError::NotFound(original.to_string()));
                }
                if records.iter().any(|r| r.domain == self.record.domain) {
                    return Err(UseCaseError::DomainAlreadyExists(
                        self.record.domain.clone(),
                    ));
                }
                records.retain(|r| r.domain != original);
                records.push(self.record.clone());
            }
            None => match records.iter_mut().find(|r| r.domain == self.record.domain) {
                Some(existing) => *existing = self.record.clone(),
                None => return Err(UseCaseError::NotFound(self.record.domain.clone())),
            },
        }

        ctx.repos
            .domains
            .save_all(&records)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(self.record.clone())
    }
}
