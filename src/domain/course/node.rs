use super::wire;
use serde::{Deserialize, Serialize};

/// One entry of a course's ordered content tree.
///
/// Sections only hold lectures, so the tree is never deeper than one level.
/// Untagged decoding tries `Section` first: any object carrying a `lectures`
/// (or `lessons`) list is a section, everything else is a lecture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurriculumNode {
    Section(Section),
    Lecture(Lecture),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(alias = "lessons")]
    pub lectures: Vec<Lecture>,
}

impl Section {
    pub fn lesson_count(&self) -> usize {
        self.lectures.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    #[serde(deserialize_with = "wire::id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub preview: bool,
    /// Hosted file reference for preview playback.
    #[serde(
        default,
        alias = "video",
        deserialize_with = "wire::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub media: Option<String>,
}

impl CurriculumNode {
    pub fn id(&self) -> &str {
        match self {
            CurriculumNode::Section(s) => &s.id,
            CurriculumNode::Lecture(l) => &l.id,
        }
    }

    pub fn lesson_count(&self) -> usize {
        match self {
            CurriculumNode::Section(s) => s.lesson_count(),
            CurriculumNode::Lecture(_) => 1,
        }
    }
}
