pub mod error;
pub mod policy;
pub mod record;
pub mod summary;
