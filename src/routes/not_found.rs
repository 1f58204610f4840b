use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use log::{error, warn};
use minijinja::{context, ErrorKind};

use crate::templates::{RenderedTemplate, Templates};

const TEMPLATE_NAME: &str = "404.html";

pub async fn not_found(req: HttpRequest, templates: web::Data<Templates>) -> Result<HttpResponse, Error> {
    let ctx = context! {
        title => "Page not found",
        message => "The page you requested does not exist.",
        path => req.path(),
    };

    match templates.render_html(TEMPLATE_NAME, ctx) {
        Ok(html) => {
            let mut response = HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html);
            response
                .extensions_mut()
                .insert(RenderedTemplate(TEMPLATE_NAME.to_string()));
            Ok(response)
        }
        Err(e) if e.kind() == ErrorKind::TemplateNotFound => {
            warn!("{} is missing, answering {} with plain text", TEMPLATE_NAME, req.path());
            Ok(HttpResponse::build(StatusCode::NOT_FOUND)
                .content_type("text/plain; charset=utf-8")
                .body("404 Not Found"))
        }
        Err(e) => {
            error!("Failed to render template '{}': {}", TEMPLATE_NAME, e);
            Err(actix_web::error::ErrorInternalServerError(e.to_string()))
        }
    }
}
