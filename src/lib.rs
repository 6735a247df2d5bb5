//! Respack resolves logical resource keys into absolute `pack://` locators
//! and turns the located resources into renderable template artifacts.
//!
//! The pipeline has two halves:
//!
//! - [`resolve`]: a pure function from key + parameter template + ambient
//!   context to a [`ResourceLocator`], handling placeholders (`{0}`, `{key}`,
//!   `{value}`), assembly-name tokens and relative-path rebasing.
//! - [`Dispatcher`]: loads the locator through a [`ResourceLoader`] and picks
//!   a template builder from the declared MIME type, delegating formats the
//!   core does not understand to a [`PluginRegistry`].
//!
//! Unresolvable inputs degrade to error locators and error-display artifacts
//! instead of failing a render pass; hard errors are reserved for caller bugs
//! and real I/O faults.
#![forbid(unsafe_code)]

pub mod artifact;
pub mod context;
pub mod convert;
pub mod dispatch;
pub mod error;
pub mod loader;
pub mod locator;
pub mod markup;
pub mod mime;
pub mod plugin;
pub mod resolve;

pub use artifact::{Artifact, RequestedKind, Stretch, Template, TemplateKind, VisualNode};
pub use context::AmbientContext;
pub use convert::{ResourceConverter, ResourcePath};
pub use dispatch::Dispatcher;
pub use error::{RespackError, RespackResult};
pub use loader::{DirectoryLoader, LoadedResource, ResourceLoader};
pub use locator::{PACK_PREFIX, ResourceLocator, combine_path, uri_segments};
pub use markup::{DecodedMarkup, JsonMarkupDecoder, MarkupDecoder};
pub use plugin::{PluginExport, PluginRegistry, RegistryCell, TemplatePlugin};
pub use resolve::{ERROR_ENTRY_ASSEMBLY, ERROR_EXECUTING_ASSEMBLY, expand_template, resolve};
