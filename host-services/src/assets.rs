//! Asset file and MIME-type lookup
//!
//! Maps a request path under the assets prefix to a file inside one of the
//! registered asset roots. Lookups never escape a root: `..` segments are
//! rejected and the resolved file must canonicalize to a path inside it.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves asset request paths to files
pub trait AssetLookup: Send + Sync {
    /// File serving `path`, or `None` if there is no such asset
    fn get_filename(&self, path: &str) -> Option<PathBuf>;

    /// MIME type for `filename`, or `None` if unknown
    fn get_mime_type(&self, filename: &Path) -> Option<String>;
}

/// Serves assets from a list of directories, first hit wins
#[derive(Debug, Clone)]
pub struct DirAssets {
    prefix: String,
    roots: Vec<PathBuf>,
}

impl DirAssets {
    /// `prefix` is the URL path prefix stripped before looking in the roots
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            roots: Vec::new(),
        }
    }

    pub fn with_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.roots.push(dir.into());
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn relative<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix(self.prefix.as_str())?;
        let rest = rest.trim_start_matches('/');
        if rest.is_empty() || rest.split('/').any(|segment| segment == "..") {
            return None;
        }
        Some(rest)
    }
}

impl AssetLookup for DirAssets {
    fn get_filename(&self, path: &str) -> Option<PathBuf> {
        let relative = self.relative(path)?;

        for root in &self.roots {
            let candidate = root.join(relative);
            if !candidate.is_file() {
                continue;
            }
            let (Ok(canonical_root), Ok(canonical)) = (root.canonicalize(), candidate.canonicalize())
            else {
                continue;
            };
            if canonical.starts_with(&canonical_root) {
                return Some(canonical);
            }
            debug!("Asset {:?} resolves outside its root, skipping", candidate);
        }

        None
    }

    fn get_mime_type(&self, filename: &Path) -> Option<String> {
        let extension = filename.extension()?.to_str()?.to_ascii_lowercase();
        let mime = match extension.as_str() {
            "html" | "htm" => "text/html",
            "css" => "text/css",
            "js" | "mjs" => "text/javascript",
            "json" => "application/json",
            "txt" => "text/plain",
            "xml" => "text/xml",
            "svg" => "image/svg+xml",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "ico" => "image/x-icon",
            "woff" => "font/woff",
            "woff2" => "font/woff2",
            "ttf" => "font/ttf",
            "pdf" => "application/pdf",
            "zip" => "application/zip",
            "mp4" => "video/mp4",
            "mp3" => "audio/mpeg",
            _ => return None,
        };
        Some(mime.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sandbox() -> (TempDir, DirAssets) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("public/css")).unwrap();
        std::fs::write(dir.path().join("public/css/site.css"), "body{}").unwrap();
        std::fs::write(dir.path().join("secret.txt"), "nope").unwrap();
        let assets = DirAssets::new("/assets/").with_root(dir.path().join("public"));
        (dir, assets)
    }

    #[test]
    fn test_get_filename() {
        let (_dir, assets) = sandbox();
        let found = assets.get_filename("/assets/css/site.css").unwrap();
        assert!(found.ends_with("css/site.css"));
        assert!(assets.get_filename("/assets/css/missing.css").is_none());
        assert!(assets.get_filename("/other/css/site.css").is_none());
        assert!(assets.get_filename("/assets/").is_none());
    }

    #[test]
    fn test_path_traversal_protection() {
        let (_dir, assets) = sandbox();
        assert!(assets.get_filename("/assets/../secret.txt").is_none());
        assert!(assets.get_filename("/assets/css/../../secret.txt").is_none());
    }

    #[test]
    fn test_mime_types() {
        let assets = DirAssets::new("/assets/");
        assert_eq!(assets.get_mime_type(Path::new("a.CSS")), Some("text/css".to_string()));
        assert_eq!(assets.get_mime_type(Path::new("a.png")), Some("image/png".to_string()));
        assert_eq!(assets.get_mime_type(Path::new("a.unknown")), None);
        assert_eq!(assets.get_mime_type(Path::new("noext")), None);
    }
}
