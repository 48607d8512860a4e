pub mod client;

pub use client::{parse_envelope, RemoteCourseClient};
