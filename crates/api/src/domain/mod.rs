mod add_domain;
mod delete_domain;
mod edit_domain;
mod get_dashboard;
mod list_domains;

use actix_web::web;
use add_domain::add_domain_controller;
use delete_domain::delete_domain_controller;
use edit_domain::edit_domain_controller;
use get_dashboard::get_dashboard_controller;
use list_domains::list_domains_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/domains", web::get().to(get_dashboard_controller));
    cfg.route("/list-domains", web::get().to(list_domains_controller));
    cfg.route("/add-domain", web::post().to(add_domain_controller));
    cfg.route("/delete-domain", web::post().to(delete_domain_controller));
    cfg.route("/edit-domain", web::post().to(edit_domain_controller));
}
