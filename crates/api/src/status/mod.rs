use actix_web::{web, HttpResponse};
use renewal_keeper_api_structs::get_service_health::*;
use renewal_keeper_infra::KeeperContext;

async fn status(ctx: web::Data<KeeperContext>) -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up!\r\n".into(),
        site_name: ctx.config.site_name.clone(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(status));
}
