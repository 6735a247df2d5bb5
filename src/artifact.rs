use crate::{
    error::{RespackError, RespackResult},
    locator::ResourceLocator,
};

/// Output kind requested by the caller of a conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RequestedKind {
    DataTemplate,
    ControlTemplate,
    /// Reserved for raw object output; the dispatcher rejects it loudly.
    Raw,
}

/// The two concrete template shapes a dispatch can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateKind {
    Data,
    Control,
}

impl RequestedKind {
    /// Narrow to a concrete template kind. `Raw` has no template form and is
    /// a caller bug, reported as a hard error.
    pub fn template_kind(self) -> RespackResult<TemplateKind> {
        match self {
            Self::DataTemplate => Ok(TemplateKind::Data),
            Self::ControlTemplate => Ok(TemplateKind::Control),
            Self::Raw => Err(RespackError::unsupported(
                "conversion not supported for requested kind: Raw",
            )),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stretch {
    #[default]
    Uniform,
    Fill,
    None,
}

/// A node of the renderable visual tree.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum VisualNode {
    /// An image display pointing at a resolved locator.
    Image {
        source: ResourceLocator,
        #[serde(default)]
        stretch: Stretch,
    },
    /// A text display; `error` marks diagnostic messages.
    Text {
        text: String,
        #[serde(default)]
        error: bool,
    },
    /// A generic named element with children.
    Element {
        name: String,
        #[serde(default)]
        children: Vec<VisualNode>,
    },
}

/// A template: a visual tree instantiated by the hosting UI layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Template {
    pub root: VisualNode,
}

/// Final output of a conversion: a data or control template, or an
/// error-display template. Error artifacts are always well-formed and
/// renderable; a resolution failure never surfaces as a raw exception.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Artifact {
    DataTemplate(Template),
    ControlTemplate(Template),
}

impl TemplateKind {
    pub fn artifact(self, template: Template) -> Artifact {
        match self {
            Self::Data => Artifact::DataTemplate(template),
            Self::Control => Artifact::ControlTemplate(template),
        }
    }
}

impl Artifact {
    /// A diagnostic template displaying the original requested key.
    pub fn error(message: impl Into<String>) -> Self {
        Self::DataTemplate(Template {
            root: VisualNode::Text {
                text: message.into(),
                error: true,
            },
        })
    }

    /// A template whose tree is a single uniform-stretch image node.
    pub fn image(kind: TemplateKind, locator: &ResourceLocator) -> Self {
        kind.artifact(Template {
            root: VisualNode::Image {
                source: locator.clone(),
                stretch: Stretch::Uniform,
            },
        })
    }

    /// Wrap a generic element root in a minimal template of the given kind.
    pub fn wrap_element(kind: TemplateKind, root: VisualNode) -> Self {
        kind.artifact(Template { root })
    }

    pub fn template(&self) -> &Template {
        match self {
            Self::DataTemplate(t) | Self::ControlTemplate(t) => t,
        }
    }

    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::DataTemplate(_) => TemplateKind::Data,
            Self::ControlTemplate(_) => TemplateKind::Control,
        }
    }

    /// True for the diagnostic error-display shape.
    pub fn is_error(&self) -> bool {
        matches!(
            self.template().root,
            VisualNode::Text { error: true, .. }
        )
    }
}
