use std::{path::PathBuf, sync::Arc};

use crate::{
    artifact::{Artifact, RequestedKind, TemplateKind},
    error::{RespackError, RespackResult},
    loader::{DirectoryLoader, LoadedResource, ResourceLoader},
    locator::ResourceLocator,
    markup::{DecodedMarkup, MarkupDecoder},
    mime,
    plugin::PluginRegistry,
};

/// Content dispatcher: picks a template builder from the declared MIME type
/// of a loaded resource, with plugins as the open-ended fallback bucket.
///
/// Collaborators are supplied by the composition root; each dispatch call is
/// stateless and independent.
pub struct Dispatcher {
    loader: Arc<dyn ResourceLoader>,
    markup: Arc<dyn MarkupDecoder>,
    plugins: Arc<PluginRegistry>,
    fallback_dir: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(
        loader: Arc<dyn ResourceLoader>,
        markup: Arc<dyn MarkupDecoder>,
        plugins: Arc<PluginRegistry>,
    ) -> Self {
        Self {
            loader,
            markup,
            plugins,
            fallback_dir: None,
        }
    }

    /// Enable the designed local-file fallback: a failed package lookup is
    /// retried once from this directory before the miss propagates.
    pub fn with_fallback_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fallback_dir = Some(dir.into());
        self
    }

    /// Dispatch a resolved locator to a renderable artifact.
    ///
    /// Returns `Ok(None)` when the decoded markup root does not fit the
    /// requested kind, or when no plugin serves the MIME type: "nothing to
    /// render", distinct from a failure. Error locators short-circuit to an
    /// error artifact carrying `display_key` before any I/O.
    #[tracing::instrument(skip(self, locator), fields(url = locator.url()))]
    pub fn dispatch(
        &self,
        locator: &ResourceLocator,
        display_key: &str,
        kind: RequestedKind,
    ) -> RespackResult<Option<Artifact>> {
        let kind = kind.template_kind()?;

        if locator.is_error() {
            return Ok(Some(Artifact::error(display_key)));
        }

        let resource = self.open(locator)?;
        let mime_type = resource.mime_type.as_str();

        if mime::is_markup(mime_type) {
            self.dispatch_markup(&resource, kind)
        } else if mime::is_raster(mime_type) {
            Ok(Some(Artifact::image(kind, locator)))
        } else {
            self.dispatch_plugin(locator, mime_type, kind)
        }
    }

    fn dispatch_markup(
        &self,
        resource: &LoadedResource,
        kind: TemplateKind,
    ) -> RespackResult<Option<Artifact>> {
        let decoded = self.markup.decode(&resource.bytes, &resource.mime_type)?;
        match (decoded, kind) {
            // Already the requested shape: identity, no wrapping.
            (DecodedMarkup::DataTemplate(t), TemplateKind::Data) => {
                Ok(Some(Artifact::DataTemplate(t)))
            }
            (DecodedMarkup::ControlTemplate(t), TemplateKind::Control) => {
                Ok(Some(Artifact::ControlTemplate(t)))
            }
            (DecodedMarkup::Element(root), kind) => {
                Ok(Some(Artifact::wrap_element(kind, root)))
            }
            _ => Ok(None),
        }
    }

    fn dispatch_plugin(
        &self,
        locator: &ResourceLocator,
        mime_type: &str,
        kind: TemplateKind,
    ) -> RespackResult<Option<Artifact>> {
        let Some(plugin) = self.plugins.get(mime_type) else {
            tracing::debug!(%mime_type, "no plugin registered");
            return Ok(None);
        };
        let template = match kind {
            TemplateKind::Data => plugin.create_data_template(locator)?,
            TemplateKind::Control => plugin.create_control_template(locator)?,
        };
        Ok(Some(kind.artifact(template)))
    }

    fn open(&self, locator: &ResourceLocator) -> RespackResult<LoadedResource> {
        match self.loader.open(locator) {
            Err(RespackError::NotFound(reason)) => match &self.fallback_dir {
                Some(dir) => {
                    tracing::debug!(%reason, "package lookup failed, retrying from local directory");
                    DirectoryLoader::new(dir.clone()).open(locator)
                }
                None => Err(RespackError::NotFound(reason)),
            },
            other => other,
        }
    }
}
