pub use about::*;
pub use blog::*;
pub use footer::*;
pub use job::*;
pub use session::*;
pub use testimonial::*;

mod about;
mod blog;
mod footer;
mod job;
mod session;
mod testimonial;

/// A file picked in a form, held in memory until the draft is
/// forwarded to the backend as multipart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn into_part(self) -> Result<reqwest::multipart::Part, reqwest::Error> {
        reqwest::multipart::Part::bytes(self.data)
            .file_name(self.filename)
            .mime_str(&self.content_type)
    }
}
