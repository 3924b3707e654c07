use crate::{
    error::KeeperError,
    shared::{
        auth::protect_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use renewal_keeper_api_structs::add_domain::{APIResponse, RequestBody};
use renewal_keeper_domain::{DomainRecord, DomainRecordError};
use renewal_keeper_infra::{DomainListRepoError, KeeperContext};

pub async fn add_domain_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    protect_route(&http_req, &ctx).await?;

    let usecase = AddDomainUseCase {
        record: body.0.into_record(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| {
            HttpResponse::Ok().json(APIResponse::new(format!("Saved {}", record.domain)))
        })
        .map_err(KeeperError::from)
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidRecord(DomainRecordError),
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
            UseCaseError::DomainAlreadyExists(domain) => Self::Conflict(format!(
                "The domain: {}, is already tracked. Edit it instead.",
                domain
            )),
            UseCaseError::MalformedDomainList | UseCaseError::StorageError => {
                Self::InternalError
            }
        }
    }
}

/// Appends a new record to the domain list
#[derive(Debug)]
pub struct AddDomainUseCase {
    pub record: DomainRecord,
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddDomainUseCase {
    type Response = DomainRecord;

    type Error = UseCaseError;

    const NAME: &'static str = "AddDomain";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error> {
        self.record.validate().map_err(UseCaseError::InvalidRecord)?;

        let mut records = ctx.repos.domains.find_all().await?;
        if records.iter().any(|r| r.domain == self.record.domain) {
            return Err(UseCaseError::DomainAlreadyExists(self.record.domain.clone()));
        }

        records.push(self.record.clone());
        ctx.repos
            .domains
            .save_all(&records)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(self.record.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use renewal_keeper_domain::Priority;

    fn record(domain: &str) -> DomainRecord {
        DomainRecord {
            domain: domain.into(),
            registration_date: "2024-01-01".into(),
            expiration_date: "2025-01-05".into(),
            system: "Registrar".into(),
            system_url: "".into(),
            priority: Priority::Low,
        }
    }

    #[actix_web::test]
    async fn it_appends_to_the_list() {
        let ctx = KeeperContext::create_inmemory();
        ctx.repos.domains.save_all(&[record("a.com")]).await.unwrap();

        let usecase = AddDomainUseCase {
            record: record("b.com"),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        let records = ctx.repos.domains.find_all().await.unwrap();
        assert_eq!(records, vec![record("a.com"), record("b.com")]);
    }

    #[actix_web::test]
    async fn it_rejects_duplicated_names() {
        let ctx = KeeperContext::create_inmemory();
        ctx.repos.domains.save_all(&[record("a.com")]).await.unwrap();

        let usecase = AddDomainUseCase {
            record: record("a.com"),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::DomainAlreadyExists(_))
        ));
        assert_eq!(ctx.repos.domains.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn it_rejects_invalid_records() {
        let ctx = KeeperContext::create_inmemory();

        let mut invalid = record("a.com");
        invalid.expiration_date = "2025-13-01".into();
        let usecase = AddDomainUseCase { record: invalid };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::InvalidRecord(_))
        ));

        let usecase = AddDomainUseCase { record: record("") };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::InvalidRecord(DomainRecordError::EmptyDomainName))
        ));
        assert!(ctx.repos.domains.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn it_does_not_overwrite_a_malformed_list() {
        let ctx = KeeperContext::create_inmemory();
        ctx.repos.domains.save_raw("{\"domain\": 1}").await.unwrap();

        let usecase = AddDomainUseCase {
            record: record("a.com"),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseError::MalformedDomainList)
        ));
        assert!(ctx.repos.domains.find_all().await.is_err());
    }
}
