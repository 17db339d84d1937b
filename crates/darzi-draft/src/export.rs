//! Draft export: HTML preview wrapping and the document-export
//! collaborator boundary.

use std::fs;
use std::path::{Path, PathBuf};

use log::error;

use darzi_math::inches_to_px;

/// Wrap a raw SVG document in a light-scheme HTML page for preview.
///
/// The style block pins a white background and light color scheme so
/// embedded previews are not inverted by dark-mode webviews.
pub fn wrap_svg_html(svg: &str) -> String {
    format!(
        "<!doctype html>\n<html>\n  <head>\n    <meta name=\"viewport\" \
         content=\"width=device-width, initial-scale=1.0, maximum-scale=5.0, user-scalable=yes\" />\n    \
         <meta name=\"color-scheme\" content=\"light\" />\n    \
         <meta name=\"theme-color\" content=\"#ffffff\" />\n    <style>\n      \
         html,body{{height:100%;margin:0;padding:10px;background:#ffffff;color-scheme:light;}}\n      \
         svg{{width:100%;height:100%;background:#ffffff;display:block}}\n      \
         :root {{ color-scheme: light; }}\n    </style>\n  </head>\n  <body>\n    {svg}\n  </body>\n</html>"
    )
}

/// Document-export collaborator.
///
/// Implementations convert a rendered SVG (plus its intended physical
/// size) into a file and return its path, or `None` on failure —
/// errors never propagate past this boundary.
pub trait Exporter {
    /// Export `svg` sized `width_in` × `height_in` inches under the
    /// given base file name.
    fn export(&self, svg: &str, width_in: f64, height_in: f64, file_name: &str) -> Option<PathBuf>;
}

/// An [`Exporter`] that writes the wrapped HTML document, sized in
/// pixels at 96 dpi, into a target directory.
#[derive(Debug, Clone)]
pub struct HtmlExporter {
    dir: PathBuf,
}

impl HtmlExporter {
    /// Export into `dir` (created on first use).
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Exporter for HtmlExporter {
    fn export(&self, svg: &str, width_in: f64, height_in: f64, file_name: &str) -> Option<PathBuf> {
        let wpx = inches_to_px(width_in);
        let hpx = inches_to_px(height_in);
        let html = format!(
            "<!DOCTYPE html><html><head><meta name=\"viewport\" \
             content=\"width=device-width, initial-scale=1\"/></head>\
             <body style=\"margin:0;padding:0;\">\
             <div style=\"width:{wpx}px;height:{hpx}px;\">{svg}</div></body></html>"
        );

        let write = || -> std::io::Result<PathBuf> {
            fs::create_dir_all(&self.dir)?;
            let path = self.dir.join(format!("{file_name}.html"));
            fs::write(&path, html)?;
            Ok(path)
        };
        match write() {
            Ok(path) => Some(path),
            Err(err) => {
                error!("export failed for {file_name}: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_embeds_svg_and_pins_light_scheme() {
        let html = wrap_svg_html("<svg></svg>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<svg></svg>"));
        assert!(html.contains("color-scheme: light"));
    }

    #[test]
    fn test_html_exporter_writes_sized_document() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = HtmlExporter::new(dir.path());
        let path = exporter
            .export("<svg></svg>", 23.0, 33.0, "kurta_draft")
            .unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("width:2208px;height:3168px;"));
        assert!(path.ends_with("kurta_draft.html"));
    }

    #[test]
    fn test_export_failure_returns_none() {
        // A directory path that cannot be created (parent is a file).
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let exporter = HtmlExporter::new(blocker.join("sub"));
        assert!(exporter.export("<svg></svg>", 1.0, 1.0, "x").is_none());
    }
}
