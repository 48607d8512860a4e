pub mod app;
pub mod crypto;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CourseService, StoreHealth};
pub use crypto::hashing::fingerprint;
pub use domain::catalog::StaticCatalog;
pub use domain::course::{CourseRecord, CurriculumNode, Description, Lecture, Section};
pub use domain::curriculum::CurriculumView;
pub use domain::resolve::{
    CourseSource, CyclePhase, DisplaySlot, DisplayState, Resolution, ResolutionCoordinator,
    SourceError, SourceKind, UnconfiguredSource,
};
pub use infra::remote::RemoteCourseClient;
pub use storage::documents::{PostgresDocumentStore, SecondaryCourseStore, SeedReport};
