//! MIME utilities shared across modules

const SUPPORTED_IMAGE_MIME: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/bmp",
    "image/tiff",
];

#[must_use]
pub fn canonicalize_mime(mime: &str) -> String {
    let main = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    match main.as_str() {
        "image/jpg" | "image/pjpeg" => "image/jpeg".to_string(),
        other => other.to_string(),
    }
}

/// Returns whether a given MIME type is supported for image uploads.
#[must_use]
pub fn is_supported_image_mime(mime: &str) -> bool {
    let canon = canonicalize_mime(mime);
    SUPPORTED_IMAGE_MIME.contains(&canon.as_str())
}

/// Picks the MIME type for an upload. The declared type wins unless it is
/// missing or generic, in which case it is guessed from the file name.
#[must_use]
pub fn resolve_upload_mime(declared: Option<&str>, file_name: Option<&str>) -> String {
    let declared = declared
        .map(canonicalize_mime)
        .filter(|m| !m.is_empty() && m != "application/octet-stream");

    declared
        .or_else(|| {
            file_name
                .and_then(|name| mime_guess::from_path(name).first())
                .map(|m| canonicalize_mime(m.essence_str()))
        })
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
