//! Filesystem document store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{DocumentStore, StoreError, validate_slug};

const MARKDOWN_SUFFIX: &str = ".md";

/// Document store reading `*.md` files below a root directory.
///
/// The slug of a file is its path relative to the root with `/` separators
/// and the `.md` extension removed, so `docs/guides/setup.md` under root
/// `docs` has slug `guides/setup`. Hidden files and directories are ignored.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Creates store rooted at a documentation directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, slug: &str) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(slug.split('/'));
        path.as_mut_os_string().push(MARKDOWN_SUFFIX);
        path
    }

    /// Collects slugs below `dir`, prefixing them with `prefix`.
    fn collect(&self, dir: &Path, prefix: &str, slugs: &mut Vec<String>) -> Result<(), StoreError> {
        let entries = fs::read_dir(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();

            let Some(name) = entry.file_name().to_str().map(String::from) else {
                log::warn!("Skipping non UTF8 path: {}", path.display());
                continue;
            };
            if name.starts_with('.') {
                continue;
            }

            let file_type = entry.file_type().map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

            if file_type.is_dir() {
                self.collect(&path, &format!("{}{}/", prefix, name), slugs)?;
            } else if let Some(stem) = name.strip_suffix(MARKDOWN_SUFFIX)
                && !stem.is_empty()
            {
                slugs.push(format!("{}{}", prefix, stem));
            }
        }

        Ok(())
    }
}

impl DocumentStore for FsStore {
    fn load(&self, slug: &str) -> Result<String, StoreError> {
        validate_slug(slug)?;
        let path = self.document_path(slug);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    slug: slug.to_string(),
                });
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        log::debug!("Loaded {} ({} bytes)", path.display(), bytes.len());
        String::from_utf8(bytes).map_err(|_| StoreError::InvalidUtf8 { path })
    }

    fn slugs(&self) -> Result<Vec<String>, StoreError> {
        let mut slugs = Vec::new();
        self.collect(&self.root, "", &mut slugs)?;
        slugs.sort();
        Ok(slugs)
    }
}
