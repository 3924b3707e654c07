mod login_page;
mod verify_password;

use actix_web::web;
use login_page::login_page_controller;
use verify_password::verify_password_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(login_page_controller));
    cfg.route("/verify-password", web::post().to(verify_password_controller));
}
