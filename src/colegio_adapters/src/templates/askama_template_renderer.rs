use askama::Template;
use colegio_core::{ActivationLinks, TemplateError, TemplateRenderer};

#[derive(Template)]
#[template(path = "activacion_usuario.html")]
struct ActivacionUsuario<'a> {
    url_activar: &'a str,
    url_reenviar: &'a str,
}

/// Renders the compiled-in email templates.
#[derive(Debug, Clone, Default)]
pub struct AskamaTemplateRenderer;

impl AskamaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for AskamaTemplateRenderer {
    fn render_activation(&self, links: &ActivationLinks) -> Result<String, TemplateError> {
        ActivacionUsuario {
            url_activar: &links.activate_url,
            url_reenviar: &links.resend_url,
        }
        .render()
        .map_err(|e| TemplateError(e.to_string()))
    }
}
