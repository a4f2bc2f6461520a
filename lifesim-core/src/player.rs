//! Player state types.
//!
//! Contains the single simulated record: identity, in-game time,
//! resources, attributes, and progress counters. The record is mutated
//! exclusively through [`crate::engine::Game`] and pulled back into range
//! by [`crate::rules::normalize`] after every change.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Gender
// ============================================================================

/// Player gender, chosen on the new-life screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    Female,
    Male,
    #[default]
    Other,
}

impl Gender {
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::Other => "Other",
        }
    }

    pub fn all() -> [Gender; 3] {
        [Gender::Female, Gender::Male, Gender::Other]
    }

    /// Parse a user-supplied spelling, as accepted on the command line.
    pub fn parse(s: &str) -> Option<Gender> {
        match s.to_lowercase().as_str() {
            "f" | "female" => Some(Gender::Female),
            "m" | "male" => Some(Gender::Male),
            "other" | "o" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Age brackets
// ============================================================================

/// Life stage derived from age; selects the event pool and the job label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeBracket {
    /// Ages 0-6.
    Childhood,
    /// Ages 7-18.
    Student,
    /// Ages 19 and up.
    Adult,
}

impl AgeBracket {
    pub fn from_age(age: u32) -> AgeBracket {
        match age {
            0..=6 => AgeBracket::Childhood,
            7..=18 => AgeBracket::Student,
            _ => AgeBracket::Adult,
        }
    }

    /// The job label assigned every month while in this bracket.
    pub fn job_title(&self) -> &'static str {
        match self {
            AgeBracket::Childhood => "Child",
            AgeBracket::Student => "Student",
            AgeBracket::Adult => "Working adult",
        }
    }
}

// ============================================================================
// Player
// ============================================================================

/// Per-month one-shot gating flags.
///
/// Reset by the monthly advance. No rule reads these yet; the field is
/// kept so saves carry the full record shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFlags {
    pub did_monthly_event: bool,
}

/// The complete simulated player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub gender: Gender,
    pub city: String,
    /// Bracket-derived occupation label, reassigned every month.
    pub job: String,
    /// Label describing the most recent action.
    pub status: String,

    /// Age in years.
    pub age: u32,
    /// Month of the year, 1-12.
    pub month: u32,

    pub wealth: i64,
    pub health: i32,
    pub stamina: i32,

    pub intelligence: i32,
    pub charm: i32,
    pub sensibility: i32,
    pub kindness: i32,
    pub luck: i32,

    /// Classes attended this cycle, 0-5.
    pub school_progress: u8,
    /// Pop quizzes taken, 0-10. At 10 no further quizzes fire.
    pub exam_progress: u8,
    /// Parents' favor, 0-100.
    pub family_favor: i32,

    pub flags: PlayerFlags,
}

impl Player {
    /// Create a fresh player with starting values.
    ///
    /// A blank name falls back to "Nobody".
    pub fn new(name: &str, gender: Gender) -> Player {
        let name = name.trim();
        let name = if name.is_empty() { "Nobody" } else { name };
        Player {
            name: name.to_string(),
            gender,
            city: "Taipei".to_string(),
            job: "Student".to_string(),
            status: "Starting out".to_string(),
            age: 0,
            month: 1,
            wealth: 0,
            health: 80,
            stamina: 80,
            intelligence: 10,
            charm: 10,
            sensibility: 10,
            kindness: 10,
            luck: 10,
            school_progress: 0,
            exam_progress: 0,
            family_favor: 50,
            flags: PlayerFlags::default(),
        }
    }

    /// Current age bracket.
    pub fn bracket(&self) -> AgeBracket {
        AgeBracket::from_age(self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults() {
        let p = Player::new("Alice", Gender::Female);
        assert_eq!(p.name, "Alice");
        assert_eq!(p.age, 0);
        assert_eq!(p.month, 1);
        assert_eq!(p.health, 80);
        assert_eq!(p.stamina, 80);
        assert_eq!(p.wealth, 0);
        assert_eq!(p.family_favor, 50);
        assert_eq!(p.intelligence, 10);
        assert_eq!(p.charm, 10);
        assert_eq!(p.school_progress, 0);
        assert_eq!(p.exam_progress, 0);
        assert!(!p.flags.did_monthly_event);
    }

    #[test]
    fn test_blank_name_falls_back() {
        let p = Player::new("   ", Gender::Other);
        assert_eq!(p.name, "Nobody");
    }

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(AgeBracket::from_age(0), AgeBracket::Childhood);
        assert_eq!(AgeBracket::from_age(6), AgeBracket::Childhood);
        assert_eq!(AgeBracket::from_age(7), AgeBracket::Student);
        assert_eq!(AgeBracket::from_age(18), AgeBracket::Student);
        assert_eq!(AgeBracket::from_age(19), AgeBracket::Adult);
        assert_eq!(AgeBracket::from_age(75), AgeBracket::Adult);
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!(Gender::parse("f"), Some(Gender::Female));
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse("other"), Some(Gender::Other));
        assert_eq!(Gender::parse("x"), None);
    }
}
