use super::list_domains::ListDomainsUseCase;
use crate::{
    error::KeeperError,
    pages::render_dashboard,
    shared::{auth::protect_route, usecase::execute},
};
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use renewal_keeper_infra::KeeperContext;

pub async fn get_dashboard_controller(
    http_req: HttpRequest,
    ctx: web::Data<KeeperContext>,
) -> Result<HttpResponse, KeeperError> {
    let token = protect_route(&http_req, &ctx).await?;

    let records = execute(ListDomainsUseCase {}, &ctx)
        .await
        .map_err(KeeperError::from)?;
    let now = ctx.sys.get_timestamp_millis();

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(render_dashboard(
            &ctx.config.site_name,
            &token,
            &records,
            now,
        )))
}
