// Resume intake: document text extraction and identity field extraction.

pub mod documents;
pub mod extractor;
pub mod handlers;
