use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;

use super::codes::FileType;
use super::error::ScradaError;
use super::record::{self, Record};

const PDF_MIME: &str = "application/pdf";

/// A file sent along with a sales invoice, base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub filename: String,
    pub file_type: FileType,
    pub mime_type: String,
    pub base64_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<String>,
}

impl Attachment {
    /// A PDF attachment from already-encoded data.
    pub fn pdf(filename: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            base64_data: base64_data.into(),
            file_type: FileType::Pdf,
            mime_type: PDF_MIME.to_string(),
            note: None,
            external_reference: None,
        }
    }

    /// Encode raw bytes. The file type follows the MIME type.
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8], mime_type: &str) -> Self {
        Self {
            filename: filename.into(),
            base64_data: STANDARD.encode(bytes),
            file_type: FileType::from_mime_type(mime_type),
            mime_type: mime_type.to_string(),
            note: None,
            external_reference: None,
        }
    }

    /// Read and encode a file from disk.
    ///
    /// `filename` defaults to the file's base name; `mime_type` defaults to a
    /// guess from the extension, then `application/pdf`.
    pub fn from_file(
        path: impl AsRef<Path>,
        filename: Option<&str>,
        mime_type: Option<&str>,
    ) -> Result<Self, ScradaError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ScradaError::Io(format!("file not found: {}", path.display())));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| ScradaError::Io(format!("could not read {}: {e}", path.display())))?;

        let name = match filename {
            Some(f) => f.to_string(),
            None => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        let mime = mime_type
            .map(str::to_string)
            .unwrap_or_else(|| guess_mime_type(path).to_string());

        Ok(Self::from_bytes(name, &bytes, &mime))
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_external_reference(mut self, reference: impl Into<String>) -> Self {
        self.external_reference = Some(reference.into());
        self
    }

    /// Decoded file contents, if the stored data is valid base64.
    pub fn decode(&self) -> Option<Vec<u8>> {
        STANDARD.decode(&self.base64_data).ok()
    }

    pub fn from_record(data: &Record) -> Self {
        let file_type = record::opt_int(data, &["fileType"])
            .and_then(|c| u16::try_from(c).ok())
            .and_then(FileType::from_code)
            .unwrap_or_default();

        Self {
            filename: record::text(data, &["filename"]),
            base64_data: record::text(data, &["base64Data"]),
            file_type,
            mime_type: record::opt_text(data, &["mimeType"]).unwrap_or_else(|| PDF_MIME.into()),
            note: record::opt_text(data, &["note"]),
            external_reference: record::opt_text(data, &["externalReference"]),
        }
    }

    pub fn to_record(&self) -> Record {
        record::to_record(self)
    }
}

fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "xml" => "application/xml",
        _ => PDF_MIME,
    }
}
