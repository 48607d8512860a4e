pub mod postgres;
pub mod store;

pub use postgres::{PostgresDocumentStore, StoredDocument};
pub use store::{decode_document, lookup_course, DocumentLookup, SecondaryCourseStore, SeedReport};
