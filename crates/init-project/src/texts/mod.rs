pub mod documents;
pub mod summary;
