pub mod views;

use actix_web::{middleware, web};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/markers")
            .wrap(middleware::NormalizePath::trim())
            .service(crate::views::as_view::<views::MarkersMapView>("/map")),
    );
}
