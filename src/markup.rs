use crate::{
    artifact::{Template, VisualNode},
    error::{RespackError, RespackResult},
};

/// Root shape of a decoded markup resource.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "document", rename_all = "snake_case")]
pub enum DecodedMarkup {
    /// The document already is a data template.
    DataTemplate(Template),
    /// The document already is a control template.
    ControlTemplate(Template),
    /// A generic visual-element root, to be wrapped by the dispatcher.
    Element(VisualNode),
    /// Any other decoded shape; unsupported for template conversion.
    Other,
}

/// External reader for compiled or source markup streams.
///
/// The hosting platform's markup formats (and their object models) are opaque
/// to the core; a decoder maps bytes plus the declared markup MIME type to a
/// [`DecodedMarkup`] root.
pub trait MarkupDecoder {
    fn decode(&self, bytes: &[u8], mime_type: &str) -> RespackResult<DecodedMarkup>;
}

/// Built-in decoder for template documents serialized as JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMarkupDecoder;

impl MarkupDecoder for JsonMarkupDecoder {
    fn decode(&self, bytes: &[u8], _mime_type: &str) -> RespackResult<DecodedMarkup> {
        serde_json::from_slice(bytes)
            .map_err(|e| RespackError::serde(format!("markup decode failed: {e}")))
    }
}
