use crate::pages::render_login_page;
use actix_web::{http::header, web, HttpResponse};
use renewal_keeper_infra::KeeperContext;

pub async fn login_page_controller(ctx: web::Data<KeeperContext>) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(render_login_page(&ctx.config.site_name))
}
