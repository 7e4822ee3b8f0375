pub mod country;
pub mod job;
pub mod relevance;
pub mod source;
