use crate::locator::uri_segments;

/// Caller-supplied ambient state for a single resolution request.
///
/// The base location is the "current document" pack URI used to rebase
/// relative parameter templates; the entry module is the process's designated
/// entry assembly name. Both are optional: absence degrades resolution to an
/// error locator instead of failing (design-time and tooling hosts typically
/// have neither).
#[derive(Clone, Debug, Default)]
pub struct AmbientContext {
    base_location: Option<String>,
    entry_module: Option<String>,
}

impl AmbientContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with neither base location nor entry module.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_base_location(mut self, url: impl Into<String>) -> Self {
        self.base_location = Some(url.into());
        self
    }

    pub fn with_entry_module(mut self, name: impl Into<String>) -> Self {
        self.entry_module = Some(name.into());
        self
    }

    pub fn base_location(&self) -> Option<&str> {
        self.base_location.as_deref()
    }

    pub fn entry_module(&self) -> Option<&str> {
        self.entry_module.as_deref()
    }

    /// Module name of the base location (second segment, split at `;`).
    pub(crate) fn base_module_name(&self) -> Option<String> {
        let base = self.base_location.as_deref()?;
        let segments = uri_segments(base);
        let module = segments.get(1)?;
        let name = module.split(';').next().unwrap_or(module);
        let name = name.trim_end_matches('/');
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}
