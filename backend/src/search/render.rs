use serde::Serialize;

use crate::models::{Course, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub class: &'static str,
    pub label: String,
}

/// Badges in display order: major, one per GE code, prereqs, warning.
pub fn tag_badges(course: &Course) -> Vec<Badge> {
    let mut badges = Vec::new();

    if course.has_tag(Tag::Major) {
        badges.push(Badge {
            class: "tag-major",
            label: "Major Req".to_string(),
        });
    }
    if course.has_tag(Tag::Ge) {
        badges.extend(course.ge.iter().map(|g| Badge {
            class: "tag-ge",
            label: format!("GE {}", g),
        }));
    }
    if course.has_tag(Tag::Prereq) {
        badges.push(Badge {
            class: "tag-prereq",
            label: "Has Prereqs".to_string(),
        });
    }
    if course.has_tag(Tag::Warning) {
        badges.push(Badge {
            class: "tag-warning",
            label: "Heads Up".to_string(),
        });
    }

    badges
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_course_card(course: &Course) -> String {
    let tags: String = tag_badges(course)
        .iter()
        .map(|b| format!(r#"<span class="tag {}">{}</span>"#, b.class, escape(&b.label)))
        .collect();

    format!(
        r#"<div class="course-card" data-id="{id}">
  <div class="card-top">
    <div>
      <div class="course-code">{code}</div>
      <div class="course-title">{title}</div>
    </div>
    <div class="match-score">{score}% match</div>
  </div>
  <div class="course-meta">
    <span>{instructor}</span>
    <span>{time}</span>
    <span>{location}</span>
    <span>{units} units</span>
    <span>{format}</span>
  </div>
  <div class="tags">{tags}</div>
  <div class="explanation">{explanation}</div>
</div>"#,
        id = escape(&course.id),
        code = escape(&course.code),
        title = escape(&course.title),
        score = course.match_score,
        instructor = escape(&course.instructor),
        time = escape(&course.time),
        location = escape(&course.location),
        units = course.units,
        format = course.format.as_str(),
        tags = tags,
        explanation = escape(&course.explanation),
    )
}

/// What the results pane shows: the card list, the count, and whether the
/// empty-state indicator is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub cards: Vec<String>,
    pub count: usize,
    pub empty_visible: bool,
}

impl ResultsView {
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            count: 0,
            empty_visible: true,
        }
    }

    pub fn render(courses: &[Course]) -> Self {
        if courses.is_empty() {
            return Self::empty();
        }

        Self {
            cards: courses.iter().map(render_course_card).collect(),
            count: courses.len(),
            empty_visible: false,
        }
    }
}
