//! Uploaded image references.
//!
//! An [`UploadedImage`] is only a description of a file the user picked or
//! dropped: its name, MIME type and size. The bytes are never read, decoded
//! or stored.
use crate::error::UploadError;
use compact_str::CompactString;
use std::path::{Path, PathBuf};

/// Documented upload limit (10 MiB). Shown to the user, never enforced.
pub const SIZE_GUIDELINE_BYTES: u64 = 10 * 1024 * 1024;

/// Extensions offered by the file picker filter.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

/// A user-selected local file, held for the duration of one analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: CompactString,
    pub mime_type: CompactString,
    /// Size in bytes.
    pub size: u64,
    /// Local path, when known. Used only to render a preview.
    pub path: Option<PathBuf>,
}

impl UploadedImage {
    pub fn new(name: impl Into<CompactString>, mime_type: impl Into<CompactString>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
            path: None,
        }
    }

    /// Describe a file on disk. The MIME type is derived from the extension.
    pub fn from_path(path: &Path) -> Result<Self, UploadError> {
        let metadata = std::fs::metadata(path).map_err(|source| UploadError {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            name: CompactString::from(name),
            mime_type: CompactString::const_new(mime_for_path(path)),
            size: metadata.len(),
            path: Some(path.to_path_buf()),
        })
    }

    /// Describe a drag-and-drop payload.
    ///
    /// Native drops usually arrive without a MIME type; in that case it is
    /// derived from the file name.
    pub fn from_dropped(name: &str, mime: &str, size: u64, path: Option<PathBuf>) -> Self {
        let mime_type = if mime.is_empty() {
            CompactString::const_new(mime_for_path(Path::new(name)))
        } else {
            CompactString::from(mime)
        };
        Self {
            name: CompactString::from(name),
            mime_type,
            size,
            path,
        }
    }

    /// Whether the MIME type is in the `image/*` family.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Whether the file is larger than the documented 10 MiB guideline.
    pub fn exceeds_size_guideline(&self) -> bool {
        self.size > SIZE_GUIDELINE_BYTES
    }

    /// Size formatted for display, e.g. `"2.4 MB"`.
    pub fn display_size(&self) -> String {
        format_bytes(self.size)
    }
}

/// MIME type for a path, based on its extension only.
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|e| e.to_str())
        .map(mime_for_extension)
        .unwrap_or("application/octet-stream")
}

/// MIME type for a file extension (case-insensitive, without the dot).
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "tif" | "tiff" => "image/tiff",
        "webp" => "image/webp",
        "dcm" => "application/dicom",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Format a byte count with binary units and short labels.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_check_uses_mime_prefix() {
        assert!(UploadedImage::new("chest.png", "image/png", 10).is_image());
        assert!(UploadedImage::new("scan", "image/x-custom", 10).is_image());
        assert!(!UploadedImage::new("notes.txt", "text/plain", 10).is_image());
        assert!(!UploadedImage::new("scan.dcm", "application/dicom", 10).is_image());
        // Prefix, not substring.
        assert!(!UploadedImage::new("x", "application/image/png", 10).is_image());
    }

    #[test]
    fn extension_mapping_is_case_insensitive() {
        assert_eq!(mime_for_extension("PNG"), "image/png");
        assert_eq!(mime_for_extension("JpEg"), "image/jpeg");
        assert_eq!(mime_for_extension("tif"), "image/tiff");
        assert_eq!(mime_for_extension("exe"), "application/octet-stream");
    }

    #[test]
    fn path_without_extension_is_octet_stream() {
        assert_eq!(mime_for_path(Path::new("README")), "application/octet-stream");
    }

    #[test]
    fn dropped_file_without_mime_uses_name() {
        let img = UploadedImage::from_dropped("xray.JPG", "", 5, None);
        assert_eq!(img.mime_type, "image/jpeg");
        let explicit = UploadedImage::from_dropped("xray", "image/webp", 5, None);
        assert_eq!(explicit.mime_type, "image/webp");
    }

    #[test]
    fn size_guideline_is_strictly_greater() {
        assert!(!UploadedImage::new("a.png", "image/png", SIZE_GUIDELINE_BYTES).exceeds_size_guideline());
        assert!(UploadedImage::new("a.png", "image/png", SIZE_GUIDELINE_BYTES + 1).exceeds_size_guideline());
    }

    #[test]
    fn display_sizes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(10 * 1024 * 1024), "10.0 MB");
    }

    #[test]
    fn from_path_reads_size_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("film.png");
        std::fs::write(&path, vec![0u8; 321]).unwrap();

        let img = UploadedImage::from_path(&path).unwrap();
        assert_eq!(img.name, "film.png");
        assert_eq!(img.mime_type, "image/png");
        assert_eq!(img.size, 321);
        assert_eq!(img.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn from_path_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = UploadedImage::from_path(&dir.path().join("gone.png")).unwrap_err();
        assert!(err.path.ends_with("gone.png"));
    }
}
