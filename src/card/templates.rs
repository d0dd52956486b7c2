use super::spec::CardSpec;
use crate::error::CardError;
use std::fs;
use std::path::Path;
use tera::Tera;

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("default", include_str!("../../templates/cards/default.html")),
    ("telegram", include_str!("../../templates/cards/telegram.html")),
    ("vk", include_str!("../../templates/cards/vk.html")),
    ("website", include_str!("../../templates/cards/website.html")),
];

/// Registered names carry the `.html` suffix so Tera autoescapes them.
fn registered_name(id: &str) -> String {
    format!("{id}.html")
}

/// Tera reports the useful part of a failure in its source chain.
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Read-only set of card templates addressed by id.
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Built-in templates only.
    pub fn new() -> Result<Self, CardError> {
        let mut registry = Self {
            tera: Tera::default(),
        };
        for (id, content) in BUILTIN_TEMPLATES {
            registry.add_template(id, content)?;
        }
        Ok(registry)
    }

    /// Built-ins plus every `*.html` file in `dir`; the file stem is the id
    /// and a file may replace a built-in.
    pub fn with_dir(dir: &Path) -> Result<Self, CardError> {
        let mut registry = Self::new()?;
        let entries = fs::read_dir(dir).map_err(|e| {
            CardError::Render(format!("cannot read templates dir {}: {e}", dir.display()))
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
            .collect();
        paths.sort();

        for path in paths {
            let Some(id) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|e| {
                CardError::Render(format!("cannot read template {}: {e}", path.display()))
            })?;
            registry.add_template(id, &content)?;
            tracing::debug!(template_id = id, path = %path.display(), "loaded card template");
        }
        Ok(registry)
    }

    fn add_template(&mut self, id: &str, content: &str) -> Result<(), CardError> {
        self.tera
            .add_raw_template(&registered_name(id), content)
            .map_err(|e| CardError::Render(format!("template `{id}`: {}", describe(&e))))
    }

    pub fn contains(&self, id: &str) -> bool {
        let name = registered_name(id);
        self.tera.get_template_names().any(|registered| registered == name)
    }

    /// Template ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .tera
            .get_template_names()
            .filter_map(|name| name.strip_suffix(".html"))
            .map(str::to_string)
            .collect();
        ids.sort();
        ids
    }

    /// Fill the template named by `spec.template_id` with the spec's fields.
    pub fn render(&self, spec: &CardSpec) -> Result<String, CardError> {
        if !self.contains(&spec.template_id) {
            return Err(CardError::TemplateNotFound(spec.template_id.clone()));
        }

        let mut ctx = tera::Context::new();
        ctx.insert("template_id", &spec.template_id);
        ctx.insert("title", &spec.title);
        ctx.insert("body_text", &spec.body_text);
        ctx.insert("primary_color", &spec.primary_color);
        ctx.insert("organization_name", &spec.organization_name);
        ctx.insert("width", &spec.width);
        ctx.insert("height", &spec.height);

        self.tera
            .render(&registered_name(&spec.template_id), &ctx)
            .map_err(|e| {
                CardError::Render(format!("template `{}`: {}", spec.template_id, describe(&e)))
            })
    }
}
