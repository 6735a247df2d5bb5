/// Prefix of every absolute application pack URI.
pub const PACK_PREFIX: &str = "pack://application:,,,";

/// Join two path fragments with exactly one `/` between them.
///
/// A separator already present on either side is reused, never doubled.
pub fn combine_path(p0: &str, p1: &str) -> String {
    match (p0.ends_with('/'), p1.starts_with('/')) {
        (true, true) => format!("{}{}", p0, &p1[1..]),
        (false, false) => format!("{p0}/{p1}"),
        _ => format!("{p0}{p1}"),
    }
}

/// Split a pack URI (or a bare absolute path) into URI-style segments.
///
/// The first segment is `"/"`, intermediate segments keep their trailing `/`
/// and the last segment carries none unless the path ends with `/`.
pub fn uri_segments(url: &str) -> Vec<String> {
    let path = url.strip_prefix(PACK_PREFIX).unwrap_or(url);
    let Some(rest) = path.strip_prefix('/') else {
        return Vec::new();
    };
    let mut out = vec!["/".to_string()];
    if rest.is_empty() {
        return out;
    }
    let parts: Vec<&str> = rest.split('/').collect();
    for (i, part) in parts.iter().enumerate() {
        if i + 1 < parts.len() {
            out.push(format!("{part}/"));
        } else if !part.is_empty() {
            out.push((*part).to_string());
        }
    }
    out
}

/// Resolved absolute resource identifier.
///
/// A locator is either fully resolved, or an *error locator*: a well-formed
/// value that still carries an unresolved placeholder, an `ERROR-` sentinel or
/// a residual `..` segment. Error locators are never dereferenced; they drive
/// the degraded error-rendering path instead.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ResourceLocator {
    url: String,
}

impl ResourceLocator {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// True when the locator carries unresolvable residue and must not be
    /// passed to a resource loader.
    pub fn is_error(&self) -> bool {
        let u = self.url.as_str();
        u.contains("EntryAssembly")
            || u.contains("ExecutingAssembly")
            || u.contains("ERROR-")
            || u.starts_with("/ERROR")
            || self.has_parent_segment()
    }

    /// The path part, without the pack prefix.
    pub fn path(&self) -> &str {
        self.url.strip_prefix(PACK_PREFIX).unwrap_or(&self.url)
    }

    /// URI-style segments of the path part. See [`uri_segments`].
    pub fn segments(&self) -> Vec<String> {
        uri_segments(self.path())
    }

    /// Module name from the module-root segment (`Name;component/` -> `Name`).
    pub fn module_name(&self) -> Option<String> {
        let segments = self.segments();
        let module = segments.get(1)?;
        let name = module.split(';').next().unwrap_or(module);
        let name = name.trim_end_matches('/');
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Path relative to the module root, used by the local-file fallback.
    ///
    /// `pack://application:,,,/App;component/TestData/x.ico` -> `TestData/x.ico`.
    pub fn local_path_fragment(&self) -> String {
        let segments = self.segments();
        if segments.len() <= 2 {
            return String::new();
        }
        segments[2..].concat()
    }

    fn has_parent_segment(&self) -> bool {
        self.path()
            .split('/')
            .any(|segment| segment == "..")
    }
}

impl std::fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_path_inserts_exactly_one_separator() {
        assert_eq!(combine_path("a", "b"), "a/b");
        assert_eq!(combine_path("a/", "b"), "a/b");
        assert_eq!(combine_path("a", "/b"), "a/b");
        assert_eq!(combine_path("a/", "/b"), "a/b");
    }

    #[test]
    fn combine_path_with_empty_fragment_keeps_trailing_separator() {
        assert_eq!(combine_path("a;component", ""), "a;component/");
    }

    #[test]
    fn segments_match_uri_shape() {
        let locator =
            ResourceLocator::from_url("pack://application:,,,/App;component/Sub/page.xaml");
        assert_eq!(
            locator.segments(),
            vec!["/", "App;component/", "Sub/", "page.xaml"]
        );
    }

    #[test]
    fn segments_of_directory_path_have_no_empty_tail() {
        assert_eq!(
            uri_segments("/App;component/Sub/"),
            vec!["/", "App;component/", "Sub/"]
        );
    }

    #[test]
    fn module_name_splits_component_marker() {
        let locator = ResourceLocator::from_url("pack://application:,,,/MyApp;component/x.png");
        assert_eq!(locator.module_name().as_deref(), Some("MyApp"));
    }

    #[test]
    fn local_path_fragment_strips_module_root() {
        let locator =
            ResourceLocator::from_url("pack://application:,,,/App;component/TestData/x.ico");
        assert_eq!(locator.local_path_fragment(), "TestData/x.ico");
    }

    #[test]
    fn error_classification() {
        let ok = ResourceLocator::from_url("pack://application:,,,/App;component/x.png");
        assert!(!ok.is_error());

        let sentinel = ResourceLocator::from_url(
            "pack://application:,,,/ERROR-EntryAssembly-NotAvailable;component/x.png",
        );
        assert!(sentinel.is_error());

        let token = ResourceLocator::from_url("pack://application:,,,/EntryAssembly;component/x");
        assert!(token.is_error());

        let parent =
            ResourceLocator::from_url("pack://application:,,,/App;component/../../x.png");
        assert!(parent.is_error());
    }
}
