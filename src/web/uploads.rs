use actix_multipart::{Multipart, MultipartError};
use actix_web::web::BytesMut;
use futures_util::StreamExt as _;

use atelier_admin::models::Upload;

/// A parsed multipart submission: text fields in arrival order plus
/// any actually-selected files. Repeated field names are preserved,
/// which is how the sub-collection inputs (headings, item rows) come
/// through.
pub struct FormPayload {
    fields: Vec<(String, String)>,
    files: Vec<(String, Upload)>,
}

impl FormPayload {
    /// First value for `name`, or empty.
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// All values for `name`, in submission order.
    pub fn values(&self, name: &str) -> Vec<String> {
        self.fields
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .collect()
    }

    pub fn file(&self, name: &str) -> Option<&Upload> {
        self.files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, u)| u)
    }
}

/// Drains a multipart stream into memory. A file input left empty by
/// the user arrives as a part with no filename or no bytes and is
/// dropped, which is what keeps the previous image on edit.
pub async fn collect(mut payload: Multipart) -> Result<FormPayload, MultipartError> {
    let mut out = FormPayload {
        fields: Vec::new(),
        files: Vec::new(),
    };

    while let Some(item) = payload.next().await {
        let mut field = item?;

        let (name, filename) = {
            let cd = field.content_disposition();
            (
                cd.get_name().unwrap_or("").to_string(),
                cd.get_filename().map(str::to_string),
            )
        };
        let content_type = field.content_type().map(|m| m.to_string());

        let mut data = BytesMut::new();
        while let Some(chunk) = field.next().await {
            data.extend_from_slice(&chunk?);
        }

        match filename {
            Some(fname) if !fname.is_empty() && !data.is_empty() => {
                out.files.push((
                    name,
                    Upload {
                        filename: fname,
                        content_type: content_type
                            .unwrap_or_else(|| "application/octet-stream".to_string()),
                        data: data.to_vec(),
                    },
                ));
            }
            Some(_) => {}
            None => {
                out.fields
                    .push((name, String::from_utf8_lossy(&data).into_owned()));
            }
        }
    }

    Ok(out)
}
