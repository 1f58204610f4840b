use actix_web::http::header;
use actix_web::{guard, web, Error, HttpRequest, HttpResponse, Resource};
use minijinja::{context, Value};

use crate::templates::Templates;

/// A view that renders one fixed template for GET and HEAD requests.
pub trait TemplateView: 'static {
    const TEMPLATE_NAME: &'static str;

    /// Extra context passed to the template. Empty unless overridden.
    fn context_data(_req: &HttpRequest) -> Value {
        context! {}
    }
}

pub async fn get<V: TemplateView>(
    req: HttpRequest,
    templates: web::Data<Templates>,
) -> Result<HttpResponse, Error> {
    let ctx = context! {
        view => context! { template_name => V::TEMPLATE_NAME },
        ..V::context_data(&req)
    };
    templates.render(V::TEMPLATE_NAME, ctx)
}

/// Answers OPTIONS with the methods a template view accepts.
pub async fn options() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ALLOW, "GET, HEAD, OPTIONS"))
        .finish()
}

/// Binds the view at `path`. GET and HEAD render the template (the server
/// drops the body for HEAD), OPTIONS lists the allowed methods and any other
/// method gets 405.
pub fn as_view<V: TemplateView>(path: &str) -> Resource {
    web::resource(path)
        .route(
            web::route()
                .guard(guard::Any(guard::Get()).or(guard::Head()))
                .to(get::<V>),
        )
        .route(web::route().guard(guard::Options()).to(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::RenderedTemplate;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::fs;

    struct Greeting;

    impl TemplateView for Greeting {
        const TEMPLATE_NAME: &'static str = "greeting.html";

        fn context_data(req: &HttpRequest) -> Value {
            context! { path => req.path() }
        }
    }

    #[actix_web::test]
    async fn renders_view_context_and_template_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("greeting.html"),
            "{{ view.template_name }} at {{ path }}",
        )
        .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Templates::new(dir.path(), "/static/", false)))
                .service(as_view::<Greeting>("/hello")),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/hello").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.response().extensions().get::<RenderedTemplate>(),
            Some(&RenderedTemplate("greeting.html".to_string()))
        );

        let body = test::read_body(resp).await;
        assert_eq!(body, "greeting.html at /hello");
    }
}
