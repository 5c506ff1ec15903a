/// Parsed email models: header, bodies, attachments
pub mod eml;
/// Backend integration status
pub mod status;
/// Analyzer verdicts and the analysis response
pub mod verdict;

pub use eml::{Attachment, Body, Eml, Hash, Header, HeaderValue, Received};
pub use status::Status;
pub use verdict::{Response, Verdict, VerdictDetail};
