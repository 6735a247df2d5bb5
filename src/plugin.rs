use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, OnceLock},
};

use crate::{artifact::Template, error::RespackResult, locator::ResourceLocator};

/// Handler for a markup/image format the core does not natively understand.
pub trait TemplatePlugin: Send + Sync {
    fn create_data_template(&self, locator: &ResourceLocator) -> RespackResult<Template>;
    fn create_control_template(&self, locator: &ResourceLocator) -> RespackResult<Template>;
}

/// One discovered plugin together with the MIME types it serves.
///
/// The host application assembles the export list (from static linking, a
/// module scan, whatever); the core never discovers modules itself.
#[derive(Clone)]
pub struct PluginExport {
    pub handler: Arc<dyn TemplatePlugin>,
    pub mime_types: Vec<String>,
}

impl PluginExport {
    pub fn new(
        handler: Arc<dyn TemplatePlugin>,
        mime_types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            handler,
            mime_types: mime_types.into_iter().map(Into::into).collect(),
        }
    }
}

/// MIME-type-keyed map of template plugins. Immutable after construction.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: HashMap<String, Arc<dyn TemplatePlugin>>,
}

impl PluginRegistry {
    /// A registry with no plugins at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from an explicit export list; first registration wins on a MIME
    /// type collision, later exports for the same type are ignored.
    pub fn build(exports: impl IntoIterator<Item = PluginExport>) -> Self {
        let mut plugins: HashMap<String, Arc<dyn TemplatePlugin>> = HashMap::new();
        for export in exports {
            for mime_type in &export.mime_types {
                if plugins.contains_key(mime_type) {
                    tracing::warn!(%mime_type, "mime type already served, ignoring later export");
                    continue;
                }
                plugins.insert(mime_type.clone(), Arc::clone(&export.handler));
            }
        }
        Self { plugins }
    }

    pub fn get(&self, mime_type: &str) -> Option<&Arc<dyn TemplatePlugin>> {
        self.plugins.get(mime_type)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn mime_types(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("mime_types", &self.plugins.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Once-only lazy construction for hosts that memoize the registry for the
/// process lifetime. Race-safe: the first build wins and every caller
/// observes the same completed, immutable registry.
#[derive(Debug, Default)]
pub struct RegistryCell {
    cell: OnceLock<Arc<PluginRegistry>>,
}

impl RegistryCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn get_or_build<F>(&self, build: F) -> Arc<PluginRegistry>
    where
        F: FnOnce() -> PluginRegistry,
    {
        Arc::clone(self.cell.get_or_init(|| Arc::new(build())))
    }

    /// The registry, if it has been built already.
    pub fn get(&self) -> Option<Arc<PluginRegistry>> {
        self.cell.get().cloned()
    }
}
