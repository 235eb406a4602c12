use actix_multipart::{Multipart, MultipartError};
use futures::TryStreamExt;

use crate::modules::media::application::domain::upload_policy::UploadedFile;

/// Pulls the first field with the given name out of a multipart body
/// and buffers it. `None` when the field never appears; type/size
/// policy checks happen downstream.
///
/// Buffering is bounded: one byte past `max_bytes` is enough for the
/// size check to reject, so the rest of an oversized stream is never
/// read into memory.
pub async fn read_named_file(
    mut payload: Multipart,
    field_name: &str,
    max_bytes: u64,
) -> Result<Option<UploadedFile>, MultipartError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(field_name) {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 > max_bytes {
                bytes.truncate(max_bytes as usize + 1);
                break;
            }
        }

        return Ok(Some(UploadedFile {
            bytes,
            content_type,
        }));
    }

    Ok(None)
}
