use actix_web::web;

mod rewrite_request;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(rewrite_request::rewrite_request_v1);
}
