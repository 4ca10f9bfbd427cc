//! PDF text extraction via the poppler command line tools.

mod extractor;

pub use extractor::{required_tools, ExtractionError, PdfTextExtractor};
