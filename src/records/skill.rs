use super::*;
use crate::Energy;
use serde::Deserialize;

/// Skill assessment of one respondent.
///
/// Twelve scores in three groups of four (middle, hard and soft skills),
/// keyed by the survey sheet's column names when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Skill {
    #[serde(rename = "middleF1")]
    pub middle1: Energy,
    #[serde(rename = "middleF2")]
    pub middle2: Energy,
    #[serde(rename = "middleF3")]
    pub middle3: Energy,
    #[serde(rename = "middleF4")]
    pub middle4: Energy,
    #[serde(rename = "hardF1")]
    pub hard1: Energy,
    #[serde(rename = "hardF2")]
    pub hard2: Energy,
    #[serde(rename = "hardF3")]
    pub hard3: Energy,
    #[serde(rename = "hardF4")]
    pub hard4: Energy,
    #[serde(rename = "softF1")]
    pub soft1: Energy,
    #[serde(rename = "softF2")]
    pub soft2: Energy,
    #[serde(rename = "softF3")]
    pub soft3: Energy,
    #[serde(rename = "softF4")]
    pub soft4: Energy,
}

const SKILL_FIELDS: &[Field<Skill>] = &[
    Field::new("middle1", |s: &Skill| s.middle1),
    Field::new("middle2", |s: &Skill| s.middle2),
    Field::new("middle3", |s: &Skill| s.middle3),
    Field::new("middle4", |s: &Skill| s.middle4),
    Field::new("hard1", |s: &Skill| s.hard1),
    Field::new("hard2", |s: &Skill| s.hard2),
    Field::new("hard3", |s: &Skill| s.hard3),
    Field::new("hard4", |s: &Skill| s.hard4),
    Field::new("soft1", |s: &Skill| s.soft1),
    Field::new("soft2", |s: &Skill| s.soft2),
    Field::new("soft3", |s: &Skill| s.soft3),
    Field::new("soft4", |s: &Skill| s.soft4),
];

impl Record for Skill {
    fn fields() -> &'static [Field<Self>] {
        SKILL_FIELDS
    }
}
