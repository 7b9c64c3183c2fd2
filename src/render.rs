//! HTML rendering of the weather page with Tera

use std::sync::Arc;

use tera::{Context, Tera};
use tracing::debug;

use crate::Result;
use crate::models::ViewModel;

/// Name under which the page template is registered
pub const PAGE_TEMPLATE: &str = "index.html";

const PAGE_SOURCE: &str = include_str!("../templates/index.html");

/// Compiled page template, built once at startup and shared read-only
#[derive(Clone)]
pub struct PageRenderer {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer").finish_non_exhaustive()
    }
}

impl PageRenderer {
    /// Compile the embedded page template
    pub fn new() -> Result<Self> {
        Self::from_source(PAGE_SOURCE)
    }

    /// Compile a custom page template
    pub fn from_source(source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm"]);
        tera.add_raw_template(PAGE_TEMPLATE, source)?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a view model into a full HTML document
    pub fn render(&self, view: &ViewModel) -> Result<String> {
        let context = Context::from_serialize(view)?;
        let html = self.tera.render(PAGE_TEMPLATE, &context)?;
        debug!(bytes = html.len(), error = view.is_error(), "Rendered page");
        Ok(html)
    }
}

/// Bare page used when the template itself fails
#[must_use]
pub fn fallback_page(message: &str) -> String {
    let escaped = tera::escape_html(message);
    format!(
        "<!DOCTYPE html><html lang=\"ja\"><head><meta charset=\"UTF-8\"><title>てんき</title></head>\
         <body><p>{escaped}</p></body></html>"
    )
}
