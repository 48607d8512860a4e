//! In-memory course sources for driving the coordinator without a network.

#![allow(dead_code)]

use async_trait::async_trait;
use course_resolver::{CourseRecord, CourseSource, CurriculumNode, Lecture, Section, SourceError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

pub struct FakeSource {
    name: &'static str,
    records: Vec<CourseRecord>,
    failure: Option<SourceError>,
    gates: Mutex<HashMap<String, Arc<Semaphore>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_records(name: &'static str, records: Vec<CourseRecord>) -> Self {
        Self {
            name,
            records,
            failure: None,
            gates: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn empty(name: &'static str) -> Self {
        Self::with_records(name, Vec::new())
    }

    pub fn failing(name: &'static str, error: SourceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::empty(name)
        }
    }

    /// Lookups for `identifier` block until a permit is added to the returned semaphore.
    pub fn gate(&self, identifier: &str) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        self.gates
            .lock()
            .unwrap()
            .insert(identifier.to_string(), gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CourseSource for FakeSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self, identifier: &str) -> Result<Option<CourseRecord>, SourceError> {
        self.calls.lock().unwrap().push(identifier.to_string());

        let gate = self.gates.lock().unwrap().get(identifier).cloned();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        if identifier.trim().is_empty() {
            return Ok(None);
        }
        Ok(self
            .records
            .iter()
            .find(|r| r.id.as_deref() == Some(identifier))
            .or_else(|| self.records.iter().find(|r| r.slug.as_deref() == Some(identifier)))
            .cloned())
    }
}

pub fn course(id: &str, slug: Option<&str>, title: &str) -> CourseRecord {
    CourseRecord {
        id: Some(id.to_string()),
        slug: slug.map(str::to_string),
        title: title.to_string(),
        ..Default::default()
    }
}

/// One section of three lectures, the second of which is a playable preview.
pub fn nested_curriculum() -> Vec<CurriculumNode> {
    let lecture = |id: &str, preview: bool| Lecture {
        id: id.to_string(),
        title: format!("Lecture {}", id),
        preview,
        media: preview.then(|| format!("{}.mp4", id)),
    };
    vec![CurriculumNode::Section(Section {
        id: "setup".to_string(),
        title: "Store setup".to_string(),
        lectures: vec![lecture("l1", false), lecture("l2", true), lecture("l3", false)],
    })]
}
