use std::path::PathBuf;

use crate::{
    error::{RespackError, RespackResult},
    locator::ResourceLocator,
    mime,
};

/// Bytes and declared content type of an opened resource.
#[derive(Clone, Debug)]
pub struct LoadedResource {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// External collaborator that opens a non-error locator.
///
/// Whether the bytes come from an embedded resource, an archive or the file
/// system is opaque to the core; only the declared MIME type and the bytes
/// are consumed. A missing resource is [`RespackError::NotFound`], distinct
/// from true I/O faults.
pub trait ResourceLoader {
    fn open(&self, locator: &ResourceLocator) -> RespackResult<LoadedResource>;
}

/// Loader serving locators from a directory tree.
///
/// The locator's module-root segments are stripped and the remainder joined
/// under `root`; the content type is inferred from the file extension. Used
/// standalone and as the dispatcher's local-file fallback target.
#[derive(Clone, Debug)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl ResourceLoader for DirectoryLoader {
    fn open(&self, locator: &ResourceLocator) -> RespackResult<LoadedResource> {
        let fragment = locator.local_path_fragment();
        if fragment.is_empty() {
            return Err(RespackError::not_found(format!(
                "locator has no path below the module root: '{locator}'"
            )));
        }
        let path = self.root.join(&fragment);
        if !path.is_file() {
            return Err(RespackError::not_found(format!(
                "no file at '{}'",
                path.display()
            )));
        }
        let mime_type = mime::from_extension(&path)?;
        let bytes = std::fs::read(&path).map_err(|e| RespackError::Other(anyhow::Error::new(e)))?;
        Ok(LoadedResource {
            bytes,
            mime_type: mime_type.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "respack_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn directory_loader_strips_module_root_and_infers_mime() {
        let tmp = temp_dir("loader_open");
        std::fs::create_dir_all(tmp.join("TestData")).unwrap();
        std::fs::write(tmp.join("TestData/icon.png"), [1u8, 2, 3]).unwrap();

        let loader = DirectoryLoader::new(&tmp);
        let locator =
            ResourceLocator::from_url("pack://application:,,,/App;component/TestData/icon.png");
        let resource = loader.open(&locator).unwrap();
        assert_eq!(resource.mime_type, mime::PNG);
        assert_eq!(resource.bytes, vec![1u8, 2, 3]);

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = temp_dir("loader_missing");
        std::fs::create_dir_all(&tmp).unwrap();

        let loader = DirectoryLoader::new(&tmp);
        let locator =
            ResourceLocator::from_url("pack://application:,,,/App;component/TestData/nope.png");
        let err = loader.open(&locator).unwrap_err();
        assert!(matches!(err, RespackError::NotFound(_)));

        std::fs::remove_dir_all(&tmp).ok();
    }

    #[test]
    fn unknown_extension_is_a_hard_error_even_when_present() {
        let tmp = temp_dir("loader_ext");
        std::fs::create_dir_all(tmp.join("TestData")).unwrap();
        std::fs::write(tmp.join("TestData/blob.webp"), [0u8]).unwrap();

        let loader = DirectoryLoader::new(&tmp);
        let locator =
            ResourceLocator::from_url("pack://application:,,,/App;component/TestData/blob.webp");
        let err = loader.open(&locator).unwrap_err();
        assert!(matches!(err, RespackError::Unsupported(_)));

        std::fs::remove_dir_all(&tmp).ok();
    }
}
