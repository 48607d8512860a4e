//! The canonical course record every source resolves to.

pub mod node;
pub mod wire;

pub use node::{CurriculumNode, Lecture, Section};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRICE: &str = "Contact us";
pub const DEFAULT_RATING: f32 = 0.0;
pub const DEFAULT_RATING_COUNT: u32 = 0;
pub const DEFAULT_DURATION: &str = "Self-paced";
pub const DEFAULT_LANGUAGE: &str = "English";
pub const DEFAULT_INSTRUCTOR: &str = "Training Team";
pub const DEFAULT_IMAGE: &str = "/images/course-placeholder.jpg";

/// A course as displayed on the detail page.
///
/// Either `id` or `slug` identifies the record; when both are present they name the
/// same course. Display attributes are optional on the wire and fall back to the
/// `DEFAULT_*` constants through the `display_*` accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    #[serde(
        default,
        deserialize_with = "wire::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::opt_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<Description>,
    #[serde(default, deserialize_with = "wire::null_as_empty")]
    pub lectures: Vec<CurriculumNode>,
    #[serde(
        default,
        deserialize_with = "wire::opt_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::opt_f32",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f32>,
    #[serde(
        default,
        deserialize_with = "wire::opt_u32",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating_count: Option<u32>,
    #[serde(
        default,
        deserialize_with = "wire::opt_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::opt_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub language: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::opt_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub instructor: Option<String>,
    #[serde(
        default,
        deserialize_with = "wire::opt_scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl CourseRecord {
    /// The key used to store and address the record: `id`, else `slug`.
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().or(self.slug.as_deref())
    }

    pub fn has_key(&self) -> bool {
        self.key().is_some()
    }

    pub fn matches(&self, identifier: &str) -> bool {
        self.id.as_deref() == Some(identifier) || self.slug.as_deref() == Some(identifier)
    }

    /// True for an "empty" payload: no key and no title. Sources report these as misses.
    pub fn is_blank(&self) -> bool {
        !self.has_key() && self.title.trim().is_empty()
    }

    pub fn description_paragraphs(&self) -> Vec<String> {
        self.full_description
            .as_ref()
            .map(Description::paragraphs)
            .unwrap_or_default()
    }

    pub fn total_lessons(&self) -> usize {
        self.lectures.iter().map(CurriculumNode::lesson_count).sum()
    }

    pub fn display_price(&self) -> &str {
        self.price.as_deref().unwrap_or(DEFAULT_PRICE)
    }

    pub fn display_rating(&self) -> f32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    pub fn display_rating_count(&self) -> u32 {
        self.rating_count.unwrap_or(DEFAULT_RATING_COUNT)
    }

    pub fn display_duration(&self) -> &str {
        self.duration.as_deref().unwrap_or(DEFAULT_DURATION)
    }

    pub fn display_language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn display_instructor(&self) -> &str {
        self.instructor.as_deref().unwrap_or(DEFAULT_INSTRUCTOR)
    }

    pub fn display_image(&self) -> &str {
        self.image.as_deref().unwrap_or(DEFAULT_IMAGE)
    }
}

/// Long-form description: a single text block or an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Paragraphs(Vec<String>),
}

impl Description {
    /// Normalized paragraphs. A text block is split on blank lines, so
    /// `Text("a\n\nb")` and `Paragraphs(["a", "b"])` render identically.
    pub fn paragraphs(&self) -> Vec<String> {
        match self {
            Description::Text(text) => {
                let mut out = Vec::new();
                let mut current: Vec<&str> = Vec::new();
                for line in text.lines() {
                    let line = line.trim();
                    if line.is_empty() {
                        if !current.is_empty() {
                            out.push(current.join("\n"));
                            current.clear();
                        }
                    } else {
                        current.push(line);
                    }
                }
                if !current.is_empty() {
                    out.push(current.join("\n"));
                }
                out
            }
            Description::Paragraphs(paragraphs) => paragraphs
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn render(&self) -> String {
        self.paragraphs().join("\n\n")
    }
}
