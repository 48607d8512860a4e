//! Course domain: records, the bundled catalog, resolution and curriculum view models.

pub mod catalog;
pub mod course;
pub mod curriculum;
pub mod resolve;
