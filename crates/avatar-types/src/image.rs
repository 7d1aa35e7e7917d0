/// Raw file selection coming from the file input, before the media-type
/// gate has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub file_name: String,
    /// MIME type reported by the browser, e.g. "image/png"
    pub media_type: String,
    /// data-URI encoding of the file contents
    pub data_uri: String,
}

impl ImageCandidate {
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// An image the user picked but has not yet shared or discarded.
///
/// Exists only between selection and send/discard, and is owned solely by
/// the image share flow. The data URI doubles as the preview and as the
/// payload sent to the describer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImage {
    pub file_name: String,
    pub media_type: String,
    pub data_uri: String,
}

impl From<ImageCandidate> for PendingImage {
    fn from(c: ImageCandidate) -> Self {
        Self {
            file_name: c.file_name,
            media_type: c.media_type,
            data_uri: c.data_uri,
        }
    }
}
