pub mod analysis;
pub mod exporter;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;

pub use analysis::*;
pub use exporter::*;
pub use extractor::*;
pub use fetcher::*;
pub use pipeline::*;
