use crate::{
    artifact::{Artifact, RequestedKind},
    context::AmbientContext,
    dispatch::Dispatcher,
    error::{RespackError, RespackResult},
    locator::combine_path,
    resolve::{expand_template, resolve},
};

/// Construction-time resource path of a converter.
///
/// The path may be absolute (`/MyAssembly;component/Resources`), relative to
/// the current document (`.`, `..`, bare `/`) or carry an assembly-name
/// placeholder (`EntryAssembly`, `ExecutingAssembly`). [`ResourcePath::expand`]
/// applies the rebase and substitution rules against an ambient context,
/// which is what a markup-extension host does once when it builds the
/// converter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePath {
    path: String,
}

impl Default for ResourcePath {
    /// The current document's directory.
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourcePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// A path below the root of the process's entry module.
    pub fn entry_assembly(path: &str) -> Self {
        Self::new(combine_path("EntryAssembly;component", path))
    }

    /// A path below the root of the module the current document lives in.
    pub fn executing_assembly(path: &str) -> Self {
        Self::new(combine_path("ExecutingAssembly;component", path))
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Expand into a concrete converter parameter. Unresolvable placeholders
    /// degrade to `ERROR-` sentinels rather than failing; the eventual
    /// conversion then renders an error template.
    pub fn expand(&self, ctx: &AmbientContext) -> String {
        let path = self.path.trim();
        if path.is_empty() {
            expand_template(".", ctx)
        } else {
            expand_template(path, ctx)
        }
    }
}

/// Converts a resource key into a renderable template artifact.
///
/// The converter resolves `key` plus its configured parameter into a pack
/// locator, loads the resource and dispatches on its content type. The
/// conversion is one-directional by design; [`ResourceConverter::convert_back`]
/// always fails.
pub struct ResourceConverter {
    parameter: Option<String>,
    dispatcher: Dispatcher,
}

impl ResourceConverter {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            parameter: None,
            dispatcher,
        }
    }

    /// Configure the converter-level parameter template, used when a call
    /// supplies none.
    pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
        self.parameter = Some(parameter.into());
        self
    }

    /// Build with a [`ResourcePath`] expanded once against the ambient
    /// context, the way a markup-extension host constructs converters.
    pub fn from_resource_path(
        dispatcher: Dispatcher,
        path: &ResourcePath,
        ctx: &AmbientContext,
    ) -> Self {
        Self::new(dispatcher).with_parameter(path.expand(ctx))
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    /// Convert with the configured parameter.
    pub fn convert(
        &self,
        key: &str,
        kind: RequestedKind,
        ctx: &AmbientContext,
    ) -> RespackResult<Option<Artifact>> {
        self.convert_with(key, None, kind, ctx)
    }

    /// Convert with a per-call parameter, falling back to the configured one.
    pub fn convert_with(
        &self,
        key: &str,
        parameter: Option<&str>,
        kind: RequestedKind,
        ctx: &AmbientContext,
    ) -> RespackResult<Option<Artifact>> {
        let parameter = parameter.or(self.parameter.as_deref());
        let locator = resolve(key, parameter, ctx)?;
        self.dispatcher.dispatch(&locator, key, kind)
    }

    /// Reverse conversion is not supported.
    pub fn convert_back(&self, _artifact: &Artifact) -> RespackResult<String> {
        Err(RespackError::unsupported(
            "ResourceConverter: convert back is not supported",
        ))
    }
}
