mod auth;
mod domain;
mod error;
mod expiry_check;
mod job_schedulers;
mod pages;
mod shared;
mod status;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
pub use expiry_check::{run_daily_check, DailyCheckSummary};
use job_schedulers::start_daily_check_job;
use renewal_keeper_infra::KeeperContext;
pub use shared::auth::SESSION_TOKEN_HEADER;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    auth::configure_routes(cfg);
    domain::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: KeeperContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_job_schedulers(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_job_schedulers(context: KeeperContext) {
        start_daily_check_job(context);
    }

    async fn configure_server(context: KeeperContext) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use renewal_keeper_api_structs::verify_password;
    use serde_json::json;

    async fn logged_in_context() -> (KeeperContext, String) {
        let ctx = KeeperContext::create_inmemory();
        ctx.repos.password.save("hunter2").await.unwrap();
        let token = ctx
            .repos
            .sessions
            .create(std::time::Duration::from_secs(600))
            .await
            .unwrap();
        (ctx, token)
    }

    #[actix_web::test]
    async fn it_serves_the_login_page() {
        let ctx = KeeperContext::create_inmemory();
        let site_name = ctx.config.site_name.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("<form id=\"login-form\">"));
        assert!(html.contains(&site_name));
    }

    #[actix_web::test]
    async fn verify_password_hands_out_a_usable_token() {
        let ctx = KeeperContext::create_inmemory();
        ctx.repos.password.save("hunter2").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/verify-password")
            .set_json(json!({ "password": "wrong" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: verify_password::APIResponse = test::read_body_json(res).await;
        assert!(!body.success);
        assert_eq!(body.message, Some("Wrong password".into()));

        let req = test::TestRequest::post()
            .uri("/verify-password")
            .set_json(json!({ "password": "hunter2" }))
            .to_request();
        let body: verify_password::APIResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.success);
        let token = body.token.unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/domains?token={}", token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn protected_routes_need_a_session() {
        let ctx = KeeperContext::create_inmemory();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await;

        for uri in &["/domains", "/domains?token=nope", "/list-domains"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        }

        let req = test::TestRequest::post()
            .uri("/add-domain")
            .set_json(json!({ "domain": "a.com", "expirationDate": "2025-01-05" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn added_domains_show_up_on_the_dashboard() {
        let (ctx, token) = logged_in_context().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/add-domain")
            .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
            .set_json(json!({
                "domain": "tom&jerry.com",
                "registrationDate": "2024-01-05",
                "expirationDate": "2025-01-05",
                "system": "Name.com",
                "systemURL": "https://name.com",
                "priority": "high"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        // Same name again
        let req = test::TestRequest::post()
            .uri("/add-domain")
            .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
            .set_json(json!({ "domain": "tom&jerry.com", "expirationDate": "2025-01-05" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let req = test::TestRequest::get()
            .uri(&format!("/domains?token={}", token))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("tom&amp;jerry.com"));
        assert!(html.contains("<span class=\"tag high\">Domain</span>"));
    }

    #[actix_web::test]
    async fn invalid_records_are_bad_requests() {
        let (ctx, token) = logged_in_context().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/add-domain")
            .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
            .set_json(json!({ "domain": "a.com", "expirationDate": "soon" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/edit-domain")
            .insert_header((SESSION_TOKEN_HEADER, token.as_str()))
            .set_json(json!({ "domain": "missing.com", "expirationDate": "2025-01-05" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn a_malformed_list_is_an_internal_error() {
        let (ctx, token) = logged_in_context().await;
        ctx.repos.domains.save_raw("not json").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/domains?token={}", token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
