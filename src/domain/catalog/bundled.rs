//! Course data compiled into the binary.

use crate::domain::course::{CourseRecord, CurriculumNode, Description, Lecture, Section};

fn lecture(id: &str, title: &str) -> Lecture {
    Lecture {
        id: id.to_string(),
        title: title.to_string(),
        preview: false,
        media: None,
    }
}

fn preview(id: &str, title: &str, media: &str) -> Lecture {
    Lecture {
        preview: true,
        media: Some(media.to_string()),
        ..lecture(id, title)
    }
}

fn section(id: &str, title: &str, lectures: Vec<Lecture>) -> CurriculumNode {
    CurriculumNode::Section(Section {
        id: id.to_string(),
        title: title.to_string(),
        lectures,
    })
}

pub fn courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord {
            id: Some("static-shopify".into()),
            slug: Some("shopify".into()),
            title: "Shopify Store Development".into(),
            excerpt: "Design, build and launch a Shopify store from scratch.".into(),
            full_description: Some(Description::Paragraphs(vec![
                "A hands-on programme covering store setup, theme customisation and payments.".into(),
                "Finish with a live store and a launch checklist you can reuse with clients.".into(),
            ])),
            lectures: vec![
                CurriculumNode::Lecture(preview("shp-intro", "Course introduction", "shopify-intro.mp4")),
                section(
                    "shp-setup",
                    "Store setup",
                    vec![
                        lecture("shp-setup-1", "Creating your store"),
                        lecture("shp-setup-2", "Products and collections"),
                        lecture("shp-setup-3", "Payments and shipping"),
                    ],
                ),
                section(
                    "shp-theme",
                    "Theme customisation",
                    vec![
                        preview("shp-theme-1", "Liquid basics", "liquid-basics.mp4"),
                        lecture("shp-theme-2", "Sections and blocks"),
                    ],
                ),
            ],
            price: Some("14999".into()),
            rating: Some(4.7),
            rating_count: Some(312),
            duration: Some("6 weeks".into()),
            language: Some("English".into()),
            instructor: Some("Priya Raman".into()),
            image: Some("/images/courses/shopify.jpg".into()),
        },
        CourseRecord {
            id: Some("static-digital-marketing".into()),
            slug: Some("digital-marketing".into()),
            title: "Digital Marketing Foundations".into(),
            excerpt: "Search, social and email marketing for small businesses.".into(),
            full_description: Some(Description::Text(
                "Plan and run campaigns across search, social and email.\n\nIncludes analytics dashboards and a capstone campaign."
                    .into(),
            )),
            lectures: vec![
                section(
                    "dm-seo",
                    "Search engine optimisation",
                    vec![
                        preview("dm-seo-1", "How search works", "seo-intro.mp4"),
                        lecture("dm-seo-2", "Keyword research"),
                    ],
                ),
                section(
                    "dm-social",
                    "Social media",
                    vec![
                        lecture("dm-social-1", "Choosing channels"),
                        lecture("dm-social-2", "Content calendars"),
                    ],
                ),
            ],
            price: Some("9999".into()),
            rating: Some(4.5),
            rating_count: Some(201),
            duration: Some("4 weeks".into()),
            language: None,
            instructor: Some("Arjun Mehta".into()),
            image: Some("/images/courses/digital-marketing.jpg".into()),
        },
        CourseRecord {
            id: Some("static-python-data".into()),
            slug: Some("python-for-data-analysis".into()),
            title: "Python for Data Analysis".into(),
            excerpt: "From spreadsheets to pandas in eight sessions.".into(),
            full_description: None,
            lectures: vec![
                CurriculumNode::Lecture(preview("py-1", "Why Python", "python-why.mp4")),
                CurriculumNode::Lecture(lecture("py-2", "Working with DataFrames")),
                CurriculumNode::Lecture(lecture("py-3", "Plotting results")),
            ],
            price: None,
            rating: None,
            rating_count: None,
            duration: Some("8 sessions".into()),
            language: Some("English".into()),
            instructor: None,
            image: None,
        },
        CourseRecord {
            id: Some("static-onsite-excel".into()),
            slug: Some("advanced-excel-onsite".into()),
            title: "Advanced Excel (Onsite)".into(),
            excerpt: "Two-day onsite workshop for finance and operations teams.".into(),
            full_description: Some(Description::Text(
                "Pivot tables, Power Query and dashboarding, delivered at your office.".into(),
            )),
            lectures: Vec::new(),
            price: None,
            rating: Some(4.8),
            rating_count: Some(58),
            duration: Some("2 days".into()),
            language: Some("English".into()),
            instructor: Some("Training Team".into()),
            image: Some("/images/courses/excel.jpg".into()),
        },
    ]
}
