//! Asset path resolution and image validation.

use crate::config::SiteConfig;
use std::path::Path;

/// Check that an image exists under the configured document root,
/// falling back to the placeholder path when it does not.
pub fn validate_img<'a>(src: &'a str, config: &'a SiteConfig) -> &'a str {
    if config.document_root.join(src).exists() {
        src
    } else {
        log::warn!("image `{src}` not found, using placeholder");
        config.img_placeholder.as_str()
    }
}

/// Location of a stylesheet under the configured CSS root.
pub fn css_href(file: &str, config: &SiteConfig) -> String {
    format!("{}{file}", config.css_root)
}

/// Location of a script under the configured JavaScript root.
pub fn js_href(file: &str, config: &SiteConfig) -> String {
    format!("{}{file}", config.js_root)
}

/// MIME type for a favicon, from the file extension.
pub fn icon_mime_type(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| match ext.to_lowercase().as_str() {
            "ico" => "image/x-icon",
            "png" => "image/png",
            "svg" => "image/svg+xml",
            "avif" => "image/avif",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "jpg" | "jpeg" => "image/jpeg",
            _ => "image/x-icon",
        })
        .unwrap_or("image/x-icon")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_validate_img_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/cat.png"), b"png").unwrap();

        let config = SiteConfig {
            document_root: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert_eq!(validate_img("images/cat.png", &config), "images/cat.png");
    }

    #[test]
    fn test_validate_img_missing_file_returns_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            document_root: dir.path().to_path_buf(),
            ..Default::default()
        };
        assert_eq!(
            validate_img("images/missing.png", &config),
            "resources/images/misc/null.png"
        );
    }

    #[test]
    fn test_hrefs_join_configured_roots() {
        let config = SiteConfig::default();
        assert_eq!(css_href("main.css", &config), "resources/styles/main.css");
        assert_eq!(js_href("app.js", &config), "resources/scripts/app.js");
    }

    #[test]
    fn test_icon_mime_type_table() {
        assert_eq!(icon_mime_type(Path::new("favicon.ico")), "image/x-icon");
        assert_eq!(icon_mime_type(Path::new("favicon.png")), "image/png");
        assert_eq!(icon_mime_type(Path::new("logo.SVG")), "image/svg+xml");
        assert_eq!(icon_mime_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(icon_mime_type(Path::new("odd.xyz")), "image/x-icon");
        assert_eq!(icon_mime_type(Path::new("no_extension")), "image/x-icon");
    }
}
