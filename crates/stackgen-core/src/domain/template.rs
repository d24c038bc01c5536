//! Template registry and rendering.
//!
//! Templates are static, process-wide, read-only data: registered once at
//! startup, never mutated afterwards. Rendering is literal substitution of
//! declared `{{TOKEN}}` placeholders with values from the [`ProjectSpec`] —
//! a pure function with no side effects, so the same inputs always produce
//! byte-identical output.
//!
//! Placeholder resolution is checked at registration time: every token in a
//! template body must name a known project spec variable. An unresolved
//! token is a registration-time bug, never a render-time error. Shell-style
//! `${VAR}` references in template bodies (compose files, JS template
//! literals) are untouched — only double-brace tokens are substituted.

use std::collections::HashMap;
use std::fmt;

use super::common::RelativePath;
use super::error::DomainError;
use super::project::{ProjectSpec, VARIABLE_NAMES};

/// Identifier for a registered template.
///
/// Templates are compile-time data, so ids are static strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(pub &'static str);

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of template content: either compile-time or runtime.
///
/// `Static` references binary data (zero-cost for built-in templates);
/// `Owned` allocates for dynamically constructed content.
#[derive(Debug, Clone)]
pub enum TemplateSource {
    Static(&'static str),
    Owned(String),
}

impl TemplateSource {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl From<&'static str> for TemplateSource {
    fn from(s: &'static str) -> Self {
        Self::Static(s)
    }
}

impl From<String> for TemplateSource {
    fn from(s: String) -> Self {
        Self::Owned(s)
    }
}

/// A named file template: where it lands relative to the project root and
/// the body with placeholder tokens.
#[derive(Debug, Clone)]
pub struct Template {
    pub id: TemplateId,
    pub relative_path: RelativePath,
    pub body: TemplateSource,
}

impl Template {
    pub fn new(
        id: TemplateId,
        relative_path: impl Into<RelativePath>,
        body: impl Into<TemplateSource>,
    ) -> Self {
        Self {
            id,
            relative_path: relative_path.into(),
            body: body.into(),
        }
    }
}

/// Registry of all templates known to the scaffolder.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: HashMap<&'static str, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, validating its placeholders.
    ///
    /// # Errors
    /// - `DuplicateTemplate` if the id is already taken.
    /// - `UnresolvedPlaceholder` if the body references a token outside
    ///   [`VARIABLE_NAMES`].
    pub fn register(&mut self, template: Template) -> Result<(), DomainError> {
        for token in placeholders(template.body.as_str()) {
            if !VARIABLE_NAMES.contains(&token) {
                return Err(DomainError::UnresolvedPlaceholder {
                    template: template.id.to_string(),
                    token: token.to_string(),
                });
            }
        }

        if self.templates.contains_key(template.id.0) {
            return Err(DomainError::DuplicateTemplate {
                id: template.id.to_string(),
            });
        }

        self.templates.insert(template.id.0, template);
        Ok(())
    }

    /// Look up a template by id.
    pub fn get(&self, id: &TemplateId) -> Result<&Template, DomainError> {
        self.templates
            .get(id.0)
            .ok_or_else(|| DomainError::UnknownTemplate { id: id.to_string() })
    }

    /// Render a template for the given project spec.
    ///
    /// Pure and idempotent: same inputs yield byte-identical output.
    pub fn render(&self, id: &TemplateId, spec: &ProjectSpec) -> Result<String, DomainError> {
        let template = self.get(id)?;
        Ok(substitute(template.body.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Well-known ids for the built-in full-stack templates.
///
/// The planner references these; the adapters crate registers bodies for
/// every one of them. The two must stay in sync (covered by tests against
/// the built-in registry).
pub mod ids {
    use super::TemplateId;

    pub const BACKEND_MANIFEST: TemplateId = TemplateId("backend-manifest");
    pub const BACKEND_TSCONFIG: TemplateId = TemplateId("backend-tsconfig");
    pub const PRISMA_SCHEMA: TemplateId = TemplateId("prisma-schema");
    pub const BACKEND_ENTRYPOINT: TemplateId = TemplateId("backend-entrypoint");
    pub const BACKEND_DOCKERFILE: TemplateId = TemplateId("backend-dockerfile");
    pub const TAILWIND_CONFIG: TemplateId = TemplateId("tailwind-config");
    pub const GLOBAL_STYLESHEET: TemplateId = TemplateId("global-stylesheet");
    pub const INDEX_PAGE: TemplateId = TemplateId("index-page");
    pub const COMPOSE_FILE: TemplateId = TemplateId("compose-file");
    pub const ENV_EXAMPLE: TemplateId = TemplateId("env-example");

    /// All built-in template ids, in registration order.
    pub const ALL: &[TemplateId] = &[
        BACKEND_MANIFEST,
        BACKEND_TSCONFIG,
        PRISMA_SCHEMA,
        BACKEND_ENTRYPOINT,
        BACKEND_DOCKERFILE,
        TAILWIND_CONFIG,
        GLOBAL_STYLESHEET,
        INDEX_PAGE,
        COMPOSE_FILE,
        ENV_EXAMPLE,
    ];
}

/// Replace every declared `{{TOKEN}}` with its value.
///
/// Single-pass replacement per variable; order doesn't matter because the
/// variables are independent and values never contain placeholder syntax.
fn substitute(body: &str, spec: &ProjectSpec) -> String {
    let mut result = body.to_string();
    for (key, value) in spec.variables() {
        let token = format!("{{{{{key}}}}}");
        result = result.replace(&token, &value);
    }
    result
}

/// Extract the placeholder tokens appearing in a template body.
fn placeholders(body: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = body;
    while let Some(start) = rest.find("{{") {
        rest = &rest[start + 2..];
        let Some(end) = rest.find("}}") else { break };
        found.push(&rest[..end]);
        rest = &rest[end + 2..];
    }
    found
}
