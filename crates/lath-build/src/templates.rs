//! Template engine for rendering site pages.

use std::path::Path;

use minijinja::{context, path_loader, Environment};

/// Template engine backed by a filesystem loader rooted at the template
/// directory. Includes resolve through the loader, so partials are reachable
/// from any template by their relative name.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine loading templates from `root`.
    pub fn new(root: &Path) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(root));
        Self { env }
    }

    /// Render a template by name with an empty context.
    ///
    /// Templates are self-contained: no variables are bound, and any dynamic
    /// content must come from static includes.
    pub fn render(&self, name: &str) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(context! {})
    }
}

/// Whether a template name refers to a partial: its final path segment
/// starts with `_`. Partials are included by other templates and never
/// emitted as standalone output files.
pub fn is_partial(name: &str) -> bool {
    name.rsplit('/')
        .next()
        .map(|segment| segment.starts_with('_'))
        .unwrap_or(false)
}
