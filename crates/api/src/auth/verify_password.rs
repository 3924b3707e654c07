use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use renewal_keeper_api_structs::verify_password::{APIResponse, RequestBody};
use renewal_keeper_infra::KeeperContext;
use std::time::Duration;
use tracing::error;

pub async fn verify_password_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<KeeperContext>,
) -> HttpResponse {
    let usecase = VerifyPasswordUseCase {
        password: body.0.password,
    };

    match execute(usecase, &ctx).await {
        Ok(token) => HttpResponse::Ok().json(APIResponse::accepted(token)),
        Err(UseCaseError::WrongPassword) => {
            HttpResponse::Unauthorized().json(APIResponse::rejected("Wrong password"))
        }
        Err(UseCaseError::NoPasswordSet) => HttpResponse::Unauthorized()
            .json(APIResponse::rejected("No password has been set for this site")),
        Err(UseCaseError::StorageError) => HttpResponse::InternalServerError()
            .json(APIResponse::rejected("Unable to verify the password")),
    }
}

#[derive(Debug)]
pub enum UseCaseError {
    WrongPassword,
    NoPasswordSet,
    StorageError,
}

/// Checks the dashboard password and opens a session on success
#[derive(Debug)]
pub struct VerifyPasswordUseCase {
    pub password: String,
}

#[async_trait::async_trait(?Send)]
impl UseCase for VerifyPasswordUseCase {
    type Response = String;

    type Error = UseCaseError;

    const NAME: &'static str = "VerifyPassword";

    async fn execute(&mut self, ctx: &KeeperContext) -> Result<Self::Response, Self::Error> {
        let stored = ctx.repos.password.find().await.map_err(|e| {
            error!("Unable to read the stored password: {:?}", e);
            UseCaseError::StorageError
        })?;

        match stored {
            None => Err(UseCaseError::NoPasswordSet),
            Some(password) if password != self.password => Err(UseCaseError::WrongPassword),
            Some(_) => ctx
                .repos
                .sessions
                .create(Duration::from_secs(ctx.config.session_ttl_secs))
                .await
                .map_err(|e| {
                    error!("Unable to create a session: {:?}", e);
                    UseCaseError::StorageError
                }),
        }
    }
}
