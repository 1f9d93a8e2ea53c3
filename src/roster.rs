//! Student records, the seed roster, and the pure transforms behind every
//! user intent.
//!
//! Transforms never mutate their input; they return a fresh roster that the
//! caller commits wholesale. Scores stay inside
//! [`MIN_POINTS`]`..=`[`MAX_POINTS`] at every mutation site.

use serde::{Deserialize, Serialize};

/// Lowest score a student can reach.
pub const MIN_POINTS: i32 = -10;
/// Highest score a student can reach.
pub const MAX_POINTS: i32 = 100;

/// A single roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub points: i32,
}

impl Student {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            points: 0,
        }
    }
}

/// The roster a fresh installation starts with: twenty students at zero
/// points, displayed in name order. Ids are assigned before the sort, so
/// they are stable but not themselves sorted.
#[must_use]
pub fn seed_roster() -> Vec<Student> {
    const NAMES: [&str; 20] = [
        "Emma Watson",
        "Liam Johnson",
        "Olivia Smith",
        "Noah Brown",
        "Ava Davis",
        "William Miller",
        "Sophia Wilson",
        "James Taylor",
        "Isabella Anderson",
        "Lucas Thomas",
        "Mia Martinez",
        "Mason Garcia",
        "Charlotte Rodriguez",
        "Elijah Lee",
        "Amelia White",
        "Harper Clark",
        "Ethan Lewis",
        "Evelyn Walker",
        "Alexander Hall",
        "Abigail Allen",
    ];

    let mut roster: Vec<Student> = NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Student::new(i as u32 + 1, *name))
        .collect();
    roster.sort_by(|a, b| a.name.cmp(&b.name));
    roster
}

/// The id the next added student receives: one past the highest id ever
/// seen in the roster, or 1 when it is empty. Ids are never reused while a
/// higher id survives.
#[must_use]
pub fn next_id(roster: &[Student]) -> u32 {
    roster.iter().map(|s| s.id).max().map_or(1, |max| max + 1)
}

/// Every student gains a point, clamped at [`MAX_POINTS`].
#[must_use]
pub fn add_point_to_all(roster: &[Student]) -> Vec<Student> {
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            s.points = (s.points + 1).min(MAX_POINTS);
            s
        })
        .collect()
}

/// Every student loses a point; students already at [`MIN_POINTS`] are left
/// unchanged.
#[must_use]
pub fn remove_point_from_all(roster: &[Student]) -> Vec<Student> {
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            if s.points > MIN_POINTS {
                s.points -= 1;
            }
            s
        })
        .collect()
}

/// The target student gains a point, clamped at [`MAX_POINTS`]. No-op if
/// the id is absent.
#[must_use]
pub fn add_point(roster: &[Student], id: u32) -> Vec<Student> {
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            if s.id == id {
                s.points = (s.points + 1).min(MAX_POINTS);
            }
            s
        })
        .collect()
}

/// The target student loses a point unless already at [`MIN_POINTS`].
#[must_use]
pub fn remove_point(roster: &[Student], id: u32) -> Vec<Student> {
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            if s.id == id && s.points > MIN_POINTS {
                s.points -= 1;
            }
            s
        })
        .collect()
}

/// Replace the target student's score with `raw` parsed as an integer.
/// Unparseable input counts as zero; the result is clamped into range.
#[must_use]
pub fn set_score(roster: &[Student], id: u32, raw: &str) -> Vec<Student> {
    let score = raw
        .trim()
        .parse::<i32>()
        .unwrap_or(0)
        .clamp(MIN_POINTS, MAX_POINTS);
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            if s.id == id {
                s.points = score;
            }
            s
        })
        .collect()
}

/// Every student back to zero points; the records themselves survive.
#[must_use]
pub fn reset_all(roster: &[Student]) -> Vec<Student> {
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            s.points = 0;
            s
        })
        .collect()
}

/// Append a new student at zero points. Whitespace-only names are a no-op.
#[must_use]
pub fn add_student(roster: &[Student], raw_name: &str) -> Vec<Student> {
    let name = raw_name.trim();
    let mut next = roster.to_vec();
    if !name.is_empty() {
        next.push(Student::new(next_id(roster), name));
    }
    next
}

/// Rename the target student. A trimmed-empty name silently keeps the
/// existing one.
#[must_use]
pub fn rename_student(roster: &[Student], id: u32, raw_name: &str) -> Vec<Student> {
    let name = raw_name.trim();
    roster
        .iter()
        .cloned()
        .map(|mut s| {
            if s.id == id && !name.is_empty() {
                s.name = name.to_string();
            }
            s
        })
        .collect()
}

/// Remove the matching student. No-op if the id is absent.
#[must_use]
pub fn delete_student(roster: &[Student], id: u32) -> Vec<Student> {
    roster.iter().filter(|s| s.id != id).cloned().collect()
}

/// Students whose name contains `query` case-insensitively, in roster
/// order. An empty query matches everyone.
#[must_use]
pub fn filter_by_name<'a>(roster: &'a [Student], query: &str) -> Vec<&'a Student> {
    let needle = query.to_lowercase();
    roster
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}
