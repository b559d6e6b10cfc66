use crate::models::{Course, DeliveryFormat, Level, Tag};

struct Row {
    id: &'static str,
    code: &'static str,
    title: &'static str,
    dept: &'static str,
    level: Level,
    units: u8,
    instructor: &'static str,
    time: &'static str,
    location: &'static str,
    ge: &'static [&'static str],
    tags: &'static [Tag],
    match_score: u8,
    explanation: &'static str,
}

const DEMO_ROWS: &[Row] = &[
    Row {
        id: "ICS31",
        code: "I&C SCI 31",
        title: "Introduction to Programming",
        dept: "I&C SCI",
        level: Level::Lower,
        units: 4,
        instructor: "Kay, R.",
        time: "MWF 10:00-10:50am",
        location: "SSH 100",
        ge: &[],
        tags: &[Tag::Major],
        match_score: 95,
        explanation: "Required for your ICS/CS major. No prerequisites — a great starting point.",
    },
    Row {
        id: "ICS32",
        code: "I&C SCI 32",
        title: "Programming with Software Libraries",
        dept: "I&C SCI",
        level: Level::Lower,
        units: 4,
        instructor: "Thornton, A.",
        time: "TuTh 2:00-3:20pm",
        location: "ALP 1300",
        ge: &[],
        tags: &[Tag::Major, Tag::Prereq],
        match_score: 90,
        explanation: "Builds on ICS 31. Prerequisite: ICS 31 with grade C or better.",
    },
    Row {
        id: "WRITING40",
        code: "WRITING 40",
        title: "Intro to Writing & Rhetoric",
        dept: "WRITING",
        level: Level::Lower,
        units: 4,
        instructor: "Garcia, M.",
        time: "MWF 11:00-11:50am",
        location: "HH 112",
        ge: &["Ia"],
        tags: &[Tag::Ge],
        match_score: 82,
        explanation: "Satisfies GE Ia (Lower Division Writing). Moderate workload with weekly essays.",
    },
    Row {
        id: "MATH2A",
        code: "MATH 2A",
        title: "Single-Variable Calculus I",
        dept: "MATH",
        level: Level::Lower,
        units: 4,
        instructor: "Chen, L.",
        time: "MWF 9:00-9:50am",
        location: "MSTB 120",
        ge: &["Va"],
        tags: &[Tag::Major, Tag::Ge],
        match_score: 88,
        explanation: "Satisfies GE Va and is required for most STEM majors. Morning section.",
    },
    Row {
        id: "ANTHRO2A",
        code: "ANTHRO 2A",
        title: "Intro to Sociocultural Anthropology",
        dept: "ANTHRO",
        level: Level::Lower,
        units: 4,
        instructor: "Dominguez, V.",
        time: "TuTh 11:00-12:20pm",
        location: "SSL 228",
        ge: &["III", "VII"],
        tags: &[Tag::Ge],
        match_score: 75,
        explanation: "Satisfies GE III and GE VII. No prerequisites, lighter workload.",
    },
    Row {
        id: "COMPSCI161",
        code: "COMPSCI 161",
        title: "Design and Analysis of Algorithms",
        dept: "COMPSCI",
        level: Level::Upper,
        units: 4,
        instructor: "Goodrich, M.",
        time: "TuTh 3:30-4:50pm",
        location: "DBH 1500",
        ge: &[],
        tags: &[Tag::Major],
        match_score: 92,
        explanation: "Core upper-division CS course. Prerequisites: ICS 46, MATH 2B, ICS 6D.",
    },
    Row {
        id: "ARTVIS20",
        code: "ART VIS 20",
        title: "Foundations in Digital Art",
        dept: "ART",
        level: Level::Lower,
        units: 4,
        instructor: "Park, S.",
        time: "MW 2:00-4:50pm",
        location: "CAC 2015",
        ge: &["IV"],
        tags: &[Tag::Ge],
        match_score: 68,
        explanation: "Satisfies GE IV (Arts & Humanities). Fun elective, no prerequisites.",
    },
    Row {
        id: "PSYCH9A",
        code: "PSYCH 9A",
        title: "Psychology Fundamentals",
        dept: "PSYCH",
        level: Level::Lower,
        units: 4,
        instructor: "Hagedorn, J.",
        time: "MWF 1:00-1:50pm",
        location: "PCB 1100",
        ge: &["III"],
        tags: &[Tag::Ge],
        match_score: 72,
        explanation: "Satisfies GE III. Large lecture format, manageable workload.",
    },
    Row {
        id: "IN4MATX43",
        code: "IN4MATX 43",
        title: "Introduction to Software Engineering",
        dept: "IN4MATX",
        level: Level::Lower,
        units: 4,
        instructor: "Ziv, H.",
        time: "TuTh 9:30-10:50am",
        location: "ICS 174",
        ge: &[],
        tags: &[Tag::Major],
        match_score: 85,
        explanation: "Recommended for ICS/SE majors. Covers SDLC, teamwork, testing.",
    },
    Row {
        id: "PHYSICS7C",
        code: "PHYSICS 7C",
        title: "Classical Physics",
        dept: "PHYSICS",
        level: Level::Lower,
        units: 4,
        instructor: "Feng, W.",
        time: "MWF 8:00-8:50am",
        location: "RH 104",
        ge: &["II"],
        tags: &[Tag::Ge, Tag::Warning],
        match_score: 60,
        explanation: "Satisfies GE II. Warning: early morning section with heavy workload.",
    },
];

/// The ten demo courses, in catalog order. All are in-person.
pub fn demo_courses() -> Vec<Course> {
    DEMO_ROWS
        .iter()
        .map(|row| Course {
            id: row.id.to_string(),
            code: row.code.to_string(),
            title: row.title.to_string(),
            dept: row.dept.to_string(),
            level: row.level,
            units: row.units,
            instructor: row.instructor.to_string(),
            time: row.time.to_string(),
            location: row.location.to_string(),
            format: DeliveryFormat::InPerson,
            ge: row.ge.iter().map(|g| g.to_string()).collect(),
            tags: row.tags.to_vec(),
            match_score: row.match_score,
            explanation: row.explanation.to_string(),
        })
        .collect()
}
