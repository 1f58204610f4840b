use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use log::error;
use minijinja::{path_loader, Environment};
use minijinja_autoreload::AutoReloader;
use serde::Serialize;
use std::path::PathBuf;

use crate::settings::Settings;

/// Name of the template a response was rendered from, stored in the
/// response extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate(pub String);

pub struct Templates {
    reloader: AutoReloader,
}

impl Templates {
    pub fn new(template_dir: impl Into<PathBuf>, static_url: impl Into<String>, autoreload: bool) -> Self {
        let template_dir = template_dir.into();
        let static_url = static_url.into();

        let reloader = AutoReloader::new(move |notifier| {
            let mut env = Environment::new();
            env.set_loader(path_loader(&template_dir));
            env.add_global("STATIC_URL", static_url.clone());
            if autoreload {
                notifier.watch_path(&template_dir, true);
            }
            Ok(env)
        });

        Self { reloader }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.template_dir, &settings.static_url, settings.debug)
    }

    /// Renders a template to a string, keeping minijinja's error so callers
    /// can tell a missing template apart from a broken one.
    pub fn render_html<T: Serialize>(&self, template_name: &str, ctx: T) -> Result<String, minijinja::Error> {
        let env = self.reloader.acquire_env()?;
        let tmpl = env.get_template(template_name)?;
        tmpl.render(ctx)
    }

    pub fn render<T: Serialize>(&self, template_name: &str, ctx: T) -> Result<HttpResponse, Error> {
        self.render_with_status(StatusCode::OK, template_name, ctx)
    }

    pub fn render_with_status<T: Serialize>(
        &self,
        status: StatusCode,
        template_name: &str,
        ctx: T,
    ) -> Result<HttpResponse, Error> {
        let html = self.render_html(template_name, ctx).map_err(|e| {
            error!("Failed to render template '{}': {}", template_name, e);
            actix_web::error::ErrorInternalServerError(e.to_string())
        })?;

        let mut response = HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html);
        response
            .extensions_mut()
            .insert(RenderedTemplate(template_name.to_string()));
        Ok(response)
    }
}
