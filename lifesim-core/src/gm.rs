//! GM console commands.
//!
//! A tiny whitespace-separated grammar for tweaking the simulation:
//! `event`, `set <field> <number>`, `add <field> <number>`. Field names
//! accept the short spellings players actually type; everything resolves
//! through one static alias table.

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::player::Player;

/// Errors from parsing or applying a console command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GmError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0} (try: set money 500 / add luck 3 / event)")]
    UnknownCommand(String),

    #[error("unknown field: {0} (known: money/health/stamina/int/charm/sens/kind/luck/family/school/exam/age/month)")]
    UnknownField(String),

    #[error("not a number: {0}")]
    BadNumber(String),

    #[error("usage: {0} <field> <number>")]
    MissingArgs(String),
}

/// Fields addressable from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Wealth,
    Health,
    Stamina,
    Intelligence,
    Charm,
    Sensibility,
    Kindness,
    Luck,
    FamilyFavor,
    SchoolProgress,
    ExamProgress,
    Age,
    Month,
}

lazy_static! {
    /// Accepted console spellings for each field.
    static ref ALIASES: HashMap<&'static str, Field> = {
        let mut m = HashMap::new();
        m.insert("money", Field::Wealth);
        m.insert("wealth", Field::Wealth);
        m.insert("hp", Field::Health);
        m.insert("health", Field::Health);
        m.insert("stamina", Field::Stamina);
        m.insert("int", Field::Intelligence);
        m.insert("intelligence", Field::Intelligence);
        m.insert("charm", Field::Charm);
        m.insert("sens", Field::Sensibility);
        m.insert("sensibility", Field::Sensibility);
        m.insert("kind", Field::Kindness);
        m.insert("kindness", Field::Kindness);
        m.insert("luck", Field::Luck);
        m.insert("family", Field::FamilyFavor);
        m.insert("school", Field::SchoolProgress);
        m.insert("exam", Field::ExamProgress);
        m.insert("age", Field::Age);
        m.insert("month", Field::Month);
        m
    };
}

impl Field {
    /// Resolve a console token to a field.
    pub fn resolve(token: &str) -> Option<Field> {
        ALIASES.get(token.to_lowercase().as_str()).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Wealth => "wealth",
            Field::Health => "health",
            Field::Stamina => "stamina",
            Field::Intelligence => "intelligence",
            Field::Charm => "charm",
            Field::Sensibility => "sensibility",
            Field::Kindness => "kindness",
            Field::Luck => "luck",
            Field::FamilyFavor => "family_favor",
            Field::SchoolProgress => "school_progress",
            Field::ExamProgress => "exam_progress",
            Field::Age => "age",
            Field::Month => "month",
        }
    }

    /// Current value of the field.
    pub fn get(&self, p: &Player) -> i64 {
        match self {
            Field::Wealth => p.wealth,
            Field::Health => i64::from(p.health),
            Field::Stamina => i64::from(p.stamina),
            Field::Intelligence => i64::from(p.intelligence),
            Field::Charm => i64::from(p.charm),
            Field::Sensibility => i64::from(p.sensibility),
            Field::Kindness => i64::from(p.kindness),
            Field::Luck => i64::from(p.luck),
            Field::FamilyFavor => i64::from(p.family_favor),
            Field::SchoolProgress => i64::from(p.school_progress),
            Field::ExamProgress => i64::from(p.exam_progress),
            Field::Age => i64::from(p.age),
            Field::Month => i64::from(p.month),
        }
    }

    /// Overwrite the field, converting into its storage range.
    pub fn set(&self, p: &mut Player, value: i64) {
        match self {
            Field::Wealth => p.wealth = value,
            Field::Health => p.health = as_i32(value),
            Field::Stamina => p.stamina = as_i32(value),
            Field::Intelligence => p.intelligence = as_i32(value),
            Field::Charm => p.charm = as_i32(value),
            Field::Sensibility => p.sensibility = as_i32(value),
            Field::Kindness => p.kindness = as_i32(value),
            Field::Luck => p.luck = as_i32(value),
            Field::FamilyFavor => p.family_favor = as_i32(value),
            Field::SchoolProgress => p.school_progress = as_u8(value),
            Field::ExamProgress => p.exam_progress = as_u8(value),
            Field::Age => p.age = as_u32(value),
            Field::Month => p.month = as_u32(value),
        }
    }

    /// Add to the field (saturating through [`Field::set`]'s conversion).
    pub fn add(&self, p: &mut Player, delta: i64) {
        self.set(p, self.get(p).saturating_add(delta));
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn as_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn as_u8(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}

fn as_u32(value: i64) -> u32 {
    value.clamp(0, i64::from(u32::MAX)) as u32
}

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Force one monthly random event.
    Event,
    /// Overwrite a field.
    Set(Field, i64),
    /// Add to a field.
    Add(Field, i64),
}

impl Command {
    /// Parse a whitespace-separated command line.
    pub fn parse(input: &str) -> Result<Command, GmError> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(op) = parts.first() else {
            return Err(GmError::Empty);
        };

        match op.to_lowercase().as_str() {
            "event" => Ok(Command::Event),
            op @ ("set" | "add") => {
                let (Some(&field_token), Some(&value_token)) = (parts.get(1), parts.get(2)) else {
                    return Err(GmError::MissingArgs(op.to_string()));
                };
                let field = Field::resolve(field_token)
                    .ok_or_else(|| GmError::UnknownField(field_token.to_string()))?;
                let value: i64 = value_token
                    .parse()
                    .map_err(|_| GmError::BadNumber(value_token.to_string()))?;
                if op == "set" {
                    Ok(Command::Set(field, value))
                } else {
                    Ok(Command::Add(field, value))
                }
            }
            other => Err(GmError::UnknownCommand(other.to_string())),
        }
    }
}
