use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Behavioral,
    Technical,
    Situational,
    Company,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Behavioral => "behavioral",
            Category::Technical => "technical",
            Category::Situational => "situational",
            Category::Company => "company",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Behavioral => "Behavioral",
            Category::Technical => "Technical",
            Category::Situational => "Situational",
            Category::Company => "Company-Specific",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "behavioral" => Ok(Category::Behavioral),
            "technical" => Ok(Category::Technical),
            "situational" => Ok(Category::Situational),
            "company" => Ok(Category::Company),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority band of a bank question.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Entry,
    Mid,
    Senior,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Entry, Difficulty::Mid, Difficulty::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Entry => "entry",
            Difficulty::Mid => "mid",
            Difficulty::Senior => "senior",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Entry => "Entry Level",
            Difficulty::Mid => "Mid Level",
            Difficulty::Senior => "Senior Level",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(Difficulty::Entry),
            "mid" => Ok(Difficulty::Mid),
            "senior" => Ok(Difficulty::Senior),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BankQuestion {
    pub id: u32,
    pub question: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub roles: Vec<String>,
    pub popularity: u8, // 0 – 100
    pub sample_answer: String,
    pub tips: Vec<String>,
    pub saved: bool,
}

impl BankQuestion {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryFacet {
    pub id: Category,
    pub name: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabeledOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_and_display_agree() {
        for c in [
            Category::Behavioral,
            Category::Technical,
            Category::Situational,
            Category::Company,
        ] {
            assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn test_difficulty_rejects_unknown() {
        assert!("executive".parse::<Difficulty>().is_err());
        assert!("Mid".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_serializes_snake_case() {
        let json = serde_json::to_string(&Difficulty::Senior).unwrap();
        assert_eq!(json, "\"senior\"");
    }
}
