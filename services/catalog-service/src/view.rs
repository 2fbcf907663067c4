use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};
use common_http_errors::ApiError;
use serde::Serialize;
use tera::{Context, Tera};
use uuid::Uuid;

pub const INDEX_TEMPLATE: &str = "index.html";

/// Build the template registry from templates compiled into the binary.
pub fn init_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}

/// A handler result that pairs a template with its model. The model stays
/// inspectable until axum turns the view into a response.
pub struct View<M> {
    templates: Arc<Tera>,
    template: &'static str,
    model: M,
}

impl<M: Serialize> View<M> {
    pub fn new(templates: Arc<Tera>, template: &'static str, model: M) -> Self {
        Self { templates, template, model }
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    pub fn render(&self) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("model", &self.model);
        self.templates.render(self.template, &context)
    }
}

impl<M: Serialize> IntoResponse for View<M> {
    fn into_response(self) -> Response {
        match self.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                let trace_id = Uuid::new_v4();
                tracing::error!(template = self.template, %trace_id, error = ?err, "view render failed");
                ApiError::internal(format!("failed to render {}", self.template), Some(trace_id)).into_response()
            }
        }
    }
}
