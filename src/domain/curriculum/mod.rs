//! Render-ready curriculum: collapsible sections and gated preview playback.

use crate::domain::course::{CourseRecord, CurriculumNode, Lecture};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LectureView {
    pub id: String,
    pub title: String,
    /// Mirrors the lecture's `preview` flag.
    pub playable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl From<&Lecture> for LectureView {
    fn from(lecture: &Lecture) -> Self {
        Self {
            id: lecture.id.clone(),
            title: lecture.title.clone(),
            playable: lecture.preview,
            media: lecture.media.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub lesson_count: usize,
    pub lectures: Vec<LectureView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CurriculumEntry {
    Section(SectionView),
    Lecture(LectureView),
}

/// The lecture currently selected for preview playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowPlaying {
    pub lecture_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

/// Curriculum state for one displayed course.
///
/// Expand flags are an independent per-section map (default collapsed), not a single
/// "open section" pointer. At most one lecture is "now playing".
#[derive(Debug, Clone, Default, Serialize)]
pub struct CurriculumView {
    entries: Vec<CurriculumEntry>,
    expanded: HashMap<String, bool>,
    now_playing: Option<NowPlaying>,
}

impl CurriculumView {
    pub fn from_nodes(nodes: &[CurriculumNode]) -> Self {
        let mut expanded = HashMap::new();
        let entries = nodes
            .iter()
            .map(|node| match node {
                CurriculumNode::Section(section) => {
                    expanded.insert(section.id.clone(), false);
                    CurriculumEntry::Section(SectionView {
                        id: section.id.clone(),
                        title: section.title.clone(),
                        lesson_count: section.lesson_count(),
                        lectures: section.lectures.iter().map(LectureView::from).collect(),
                    })
                }
                CurriculumNode::Lecture(lecture) => CurriculumEntry::Lecture(lecture.into()),
            })
            .collect();

        Self {
            entries,
            expanded,
            now_playing: None,
        }
    }

    pub fn from_record(record: &CourseRecord) -> Self {
        Self::from_nodes(&record.lectures)
    }

    pub fn entries(&self) -> &[CurriculumEntry] {
        &self.entries
    }

    pub fn sections(&self) -> impl Iterator<Item = &SectionView> {
        self.entries.iter().filter_map(|e| match e {
            CurriculumEntry::Section(s) => Some(s),
            CurriculumEntry::Lecture(_) => None,
        })
    }

    pub fn section(&self, section_id: &str) -> Option<&SectionView> {
        self.sections().find(|s| s.id == section_id)
    }

    fn lectures(&self) -> impl Iterator<Item = &LectureView> {
        self.entries.iter().flat_map(|e| match e {
            CurriculumEntry::Section(s) => s.lectures.iter(),
            CurriculumEntry::Lecture(l) => std::slice::from_ref(l).iter(),
        })
    }

    pub fn lesson_count(&self) -> usize {
        self.lectures().count()
    }

    pub fn playable_lectures(&self) -> impl Iterator<Item = &LectureView> {
        self.lectures().filter(|l| l.playable)
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded.get(section_id).copied().unwrap_or(false)
    }

    /// Flips one section's expand flag and returns the new value.
    /// Unknown section ids are ignored (`None`).
    pub fn toggle(&mut self, section_id: &str) -> Option<bool> {
        let flag = self.expanded.get_mut(section_id)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Selects a lecture for playback, replacing any current selection.
    ///
    /// Non-playable or unknown lectures leave the state untouched and return `None`.
    pub fn select(&mut self, lecture_id: &str) -> Option<&NowPlaying> {
        let lecture = self
            .lectures()
            .find(|l| l.id == lecture_id && l.playable)?;
        let next = NowPlaying {
            lecture_id: lecture.id.clone(),
            title: lecture.title.clone(),
            media: lecture.media.clone(),
        };
        self.now_playing = Some(next);
        self.now_playing.as_ref()
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    pub fn stop(&mut self) {
        self.now_playing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::course::Section;

    fn lecture(id: &str, preview: bool) -> Lecture {
        Lecture {
            id: id.to_string(),
            title: format!("Lecture {}", id),
            preview,
            media: preview.then(|| format!("{}.mp4", id)),
        }
    }

    fn sample() -> CurriculumView {
        CurriculumView::from_nodes(&[
            CurriculumNode::Lecture(lecture("intro", true)),
            CurriculumNode::Section(Section {
                id: "a".into(),
                title: "Section A".into(),
                lectures: vec![lecture("a1", false), lecture("a2", true), lecture("a3", false)],
            }),
            CurriculumNode::Section(Section {
                id: "b".into(),
                title: "Section B".into(),
                lectures: vec![lecture("b1", false)],
            }),
        ])
    }

    #[test]
    fn nested_section_reports_lesson_count_and_one_playable() {
        let view = CurriculumView::from_nodes(&[CurriculumNode::Section(Section {
            id: "s".into(),
            title: "Only".into(),
            lectures: vec![lecture("1", false), lecture("2", true), lecture("3", false)],
        })]);
        assert_eq!(view.section("s").unwrap().lesson_count, 3);
        assert_eq!(view.playable_lectures().count(), 1);
        assert_eq!(view.lesson_count(), 3);
    }

    #[test]
    fn sections_start_collapsed_and_toggle_independently() {
        let mut view = sample();
        assert!(!view.is_expanded("a"));
        assert!(!view.is_expanded("b"));

        assert_eq!(view.toggle("a"), Some(true));
        assert!(view.is_expanded("a"));
        assert!(!view.is_expanded("b"));

        assert_eq!(view.toggle("a"), Some(false));
        assert!(!view.is_expanded("a"));
        assert!(!view.is_expanded("b"));

        assert_eq!(view.toggle("missing"), None);
    }

    #[test]
    fn only_playable_lectures_can_be_selected_and_selection_replaces() {
        let mut view = sample();
        assert!(view.select("a1").is_none());
        assert!(view.now_playing().is_none());

        assert_eq!(view.select("intro").unwrap().lecture_id, "intro");
        assert_eq!(view.select("a2").unwrap().media.as_deref(), Some("a2.mp4"));
        assert_eq!(view.now_playing().unwrap().lecture_id, "a2");

        // Locked lecture leaves the current selection in place.
        assert!(view.select("b1").is_none());
        assert_eq!(view.now_playing().unwrap().lecture_id, "a2");

        view.stop();
        assert!(view.now_playing().is_none());
    }

    #[test]
    fn top_level_and_nested_lectures_are_walked_in_order() {
        let view = sample();
        assert_eq!(view.lesson_count(), 5);
        let playable: Vec<&str> = view.playable_lectures().map(|l| l.id.as_str()).collect();
        assert_eq!(playable, vec!["intro", "a2"]);
    }

    #[test]
    fn empty_curriculum_is_valid() {
        let view = CurriculumView::from_record(&CourseRecord::default());
        assert!(view.entries().is_empty());
        assert_eq!(view.lesson_count(), 0);
    }
}
