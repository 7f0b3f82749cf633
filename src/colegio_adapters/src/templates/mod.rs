pub mod askama_template_renderer;

pub use askama_template_renderer::AskamaTemplateRenderer;
