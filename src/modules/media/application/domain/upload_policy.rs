/// A file as it arrived over the wire, before any policy check.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadViolation {
    UnsupportedType,
    /// Carries the configured limit in whole megabytes for the message.
    TooLarge(u64),
}

/// What a given endpoint accepts. Pictures and cover images take the
/// image policy, resumes take the document policy.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub allowed_mime_types: &'static [&'static str],
}

impl UploadPolicy {
    pub const IMAGE_MIME_TYPES: &'static [&'static str] = &["image/jpeg", "image/png"];
    pub const DOCUMENT_MIME_TYPES: &'static [&'static str] = &["application/pdf"];

    pub fn image(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            allowed_mime_types: Self::IMAGE_MIME_TYPES,
        }
    }

    pub fn document(max_file_size_bytes: u64) -> Self {
        Self {
            max_file_size_bytes,
            allowed_mime_types: Self::DOCUMENT_MIME_TYPES,
        }
    }

    /// Type is checked before size so a wrong file never reports a
    /// size problem.
    pub fn check(&self, file: &UploadedFile) -> Result<(), UploadViolation> {
        let mime = file.content_type.to_lowercase();
        if !self.allowed_mime_types.contains(&mime.as_str()) {
            return Err(UploadViolation::UnsupportedType);
        }
        if file.bytes.len() as u64 > self.max_file_size_bytes {
            return Err(UploadViolation::TooLarge(
                self.max_file_size_bytes / (1024 * 1024),
            ));
        }
        Ok(())
    }
}
