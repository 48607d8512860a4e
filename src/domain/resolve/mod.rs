//! Course resolution: the source contract and the cycle coordinator.

pub mod coordinator;
pub mod source;

pub use coordinator::{
    CyclePhase, DisplaySlot, DisplayState, Publish, Resolution, ResolutionCoordinator,
};
pub use source::{CourseSource, SourceError, SourceKind, UnconfiguredSource};
