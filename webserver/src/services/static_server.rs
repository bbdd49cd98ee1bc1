//! Static file serving service
//!
//! Serves product images and other assets with content types and caching
//! headers

use async_trait::async_trait;
use catalog::{Component, site_debug, site_warn};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{StaticAsset, StaticFileServer};

/// Real static file server implementation
#[derive(Clone)]
pub struct RealStaticFileServer {
    /// Base directory for static files
    base_dir: PathBuf,

    /// MIME type mappings
    mime_types: HashMap<&'static str, &'static str>,
}

impl RealStaticFileServer {
    /// Create new static file server
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        let mime_types = HashMap::from([
            ("html", "text/html; charset=utf-8"),
            ("css", "text/css"),
            ("js", "application/javascript"),
            ("json", "application/json"),
            ("png", "image/png"),
            ("jpg", "image/jpeg"),
            ("jpeg", "image/jpeg"),
            ("gif", "image/gif"),
            ("webp", "image/webp"),
            ("svg", "image/svg+xml"),
            ("ico", "image/x-icon"),
            ("woff", "font/woff"),
            ("woff2", "font/woff2"),
        ]);

        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            mime_types,
        }
    }

    fn extension(path: &str) -> Option<String> {
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }

    /// Get MIME type from file extension
    fn mime_type(&self, path: &str) -> String {
        Self::extension(path)
            .and_then(|ext| self.mime_types.get(ext.as_str()).copied())
            .unwrap_or("application/octet-stream")
            .to_string()
    }

    /// Get cache control header based on file type
    fn cache_control(&self, path: &str) -> Option<String> {
        match Self::extension(path)?.as_str() {
            "html" => Some("no-cache".to_string()),
            "js" | "css" => Some("public, max-age=3600".to_string()),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico" => Some("public, max-age=86400".to_string()),
            "woff" | "woff2" => Some("public, max-age=604800".to_string()),
            _ => None,
        }
    }

    /// Resolve a request path inside the base directory, rejecting traversal
    fn resolve_path(&self, request_path: &str) -> WebServerResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        if clean_path.is_empty() {
            return Err(WebServerError::AssetNotFound {
                path: request_path.to_string(),
            });
        }

        let canonical_base = self.base_dir.canonicalize().map_err(|_| WebServerError::AssetNotFound {
            path: request_path.to_string(),
        })?;

        let canonical_path =
            self.base_dir
                .join(clean_path)
                .canonicalize()
                .map_err(|_| WebServerError::AssetNotFound {
                    path: request_path.to_string(),
                })?;

        if !canonical_path.starts_with(&canonical_base) {
            site_warn!(Component::Assets, "🚫 Rejected path outside static root: {}", request_path);
            return Err(WebServerError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticAsset> {
        let file_path = self.resolve_path(path)?;

        if file_path.is_dir() {
            return Err(WebServerError::AssetNotFound { path: path.to_string() });
        }

        let content = fs::read(&file_path).await.map_err(|e| {
            site_warn!(Component::Assets, "❌ Failed to read static file {}: {}", path, e);
            WebServerError::AssetNotFound { path: path.to_string() }
        })?;

        site_debug!(Component::Assets, "📄 Served static file: {} ({} bytes)", path, content.len());

        let mut asset = StaticAsset::new(content, self.mime_type(path));
        if let Some(cache) = self.cache_control(path) {
            asset = asset.with_cache_control(cache);
        }
        Ok(asset)
    }
}

impl Default for RealStaticFileServer {
    fn default() -> Self {
        Self::new("./static")
    }
}
