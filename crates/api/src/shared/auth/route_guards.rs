use crate::error::KeeperError;
use actix_web::{web, HttpRequest};
use renewal_keeper_infra::KeeperContext;
use std::collections::HashMap;
use tracing::error;

/// Header carrying the session token, an alternative to the `token`
/// query parameter
pub const SESSION_TOKEN_HEADER: &str = "renewal-keeper-token";

fn session_token(http_req: &HttpRequest) -> Option<String> {
    if let Some(token) = http_req
        .headers()
        .get(SESSION_TOKEN_HEADER)
        .and_then(|val| val.to_str().ok())
    {
        return Some(token.to_string());
    }
    web::Query::<HashMap<String, String>>::from_query(http_req.query_string())
        .ok()
        .and_then(|query| query.get("token").cloned())
}

/// Rejects requests without a live session. Returns the session token so
/// that pages can pass it on.
pub async fn protect_route(
    http_req: &HttpRequest,
    ctx: &KeeperContext,
) -> Result<String, KeeperError> {
    let token = match session_token(http_req) {
        Some(token) if !token.is_empty() => token,
        _ => {
            return Err(KeeperError::Unauthorized(
                "Missing session token, please log in".into(),
            ))
        }
    };

    match ctx.repos.sessions.is_valid(&token).await {
        Ok(true) => Ok(token),
        Ok(false) => Err(KeeperError::Unauthorized(
            "Session expired or invalid, please log in again".into(),
        )),
        Err(e) => {
            error!("Unable to look up session: {:?}", e);
            Err(KeeperError::InternalError)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use std::time::Duration;

    #[actix_web::test]
    async fn it_accepts_live_sessions_from_header_or_query() {
        let ctx = KeeperContext::create_inmemory();
        let token = ctx
            .repos
            .sessions
            .create(Duration::from_secs(600))
            .await
            .unwrap();

        let req = TestRequest::default()
            .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
            .to_http_request();
        assert_eq!(protect_route(&req, &ctx).await.unwrap(), token);

        let req = TestRequest::with_uri(&format!("/domains?token={}", token)).to_http_request();
        assert_eq!(protect_route(&req, &ctx).await.unwrap(), token);
    }

    #[actix_web::test]
    async fn it_rejects_missing_and_unknown_sessions() {
        let ctx = KeeperContext::create_inmemory();

        let req = TestRequest::with_uri("/domains").to_http_request();
        assert!(matches!(
            protect_route(&req, &ctx).await,
            Err(KeeperError::Unauthorized(_))
        ));

        let req = TestRequest::with_uri("/domains?token=").to_http_request();
        assert!(matches!(
            protect_route(&req, &ctx).await,
            Err(KeeperError::Unauthorized(_))
        ));

        let req = TestRequest::with_uri("/domains?token=made-up").to_http_request();
        assert!(matches!(
            protect_route(&req, &ctx).await,
            Err(KeeperError::Unauthorized(_))
        ));

        let expired = ctx
            .repos
            .sessions
            .create(Duration::from_secs(0))
            .await
            .unwrap();
        let req = TestRequest::default()
            .insert_header((SESSION_TOKEN_HEADER, expired.as_str()))
            .to_http_request();
        assert!(matches!(
            protect_route(&req, &ctx).await,
            Err(KeeperError::Unauthorized(_))
        ));
    }
}
