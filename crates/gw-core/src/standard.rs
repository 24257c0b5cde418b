//! The skill standard matrix: required proficiency per skill and role level.
//!
//! A `SkillStandard` is validated once at startup and is read-only afterwards.
//! It is the authoritative skill universe for gap analysis.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProficiencyLevel, RoleLevel};
use crate::errors::CoreError;

/// Required levels for one skill.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkillRequirement {
    pub skill: String,
    pub levels: BTreeMap<RoleLevel, ProficiencyLevel>,
}

/// Validated, non-empty skill standard matrix.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct SkillStandard {
    requirements: Vec<SkillRequirement>,
}

impl SkillStandard {
    /// Build a standard from requirements in the given order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` if the list is empty, a skill name is
    /// blank, or a skill appears twice.
    pub fn new(requirements: Vec<SkillRequirement>) -> Result<Self, CoreError> {
        if requirements.is_empty() {
            return Err(CoreError::Configuration(
                "skill standard matrix is empty".into(),
            ));
        }
        for (i, req) in requirements.iter().enumerate() {
            if req.skill.trim().is_empty() {
                return Err(CoreError::Configuration(format!(
                    "skill standard entry {i} has a blank skill name"
                )));
            }
            if requirements[..i]
                .iter()
                .any(|other| other.skill.eq_ignore_ascii_case(&req.skill))
            {
                return Err(CoreError::Configuration(format!(
                    "skill '{}' appears more than once in the standard matrix",
                    req.skill
                )));
            }
        }
        Ok(Self { requirements })
    }

    /// The frontend engineering matrix shipped with Gapwise.
    #[must_use]
    pub fn builtin() -> Self {
        use ProficiencyLevel::{Advanced, Basic, Expert, Intermediate};

        let rows: [(&str, [ProficiencyLevel; 3]); 10] = [
            ("HTML", [Basic, Intermediate, Expert]),
            ("CSS", [Basic, Expert, Expert]),
            ("JavaScript", [Basic, Expert, Expert]),
            ("React", [Basic, Expert, Expert]),
            ("Next.js", [Basic, Expert, Expert]),
            ("Git Basics", [Basic, Advanced, Expert]),
            ("Debugging Skills", [Basic, Expert, Expert]),
            ("API Integration", [Basic, Intermediate, Expert]),
            ("State Management (Redux/Zustand)", [Basic, Intermediate, Expert]),
            ("Performance Optimization", [Basic, Intermediate, Expert]),
        ];

        let requirements = rows
            .into_iter()
            .map(|(skill, levels)| SkillRequirement {
                skill: skill.to_string(),
                levels: RoleLevel::ALL.into_iter().zip(levels).collect(),
            })
            .collect();
        Self { requirements }
    }

    /// Required level for a skill at a role level.
    ///
    /// Returns `Basic` when the skill is unknown or has no entry for the role.
    #[must_use]
    pub fn required(&self, skill: &str, role: RoleLevel) -> ProficiencyLevel {
        self.requirement(skill)
            .and_then(|req| req.levels.get(&role).copied())
            .unwrap_or(ProficiencyLevel::ASSUMED)
    }

    /// Look up a skill row, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn requirement(&self, skill: &str) -> Option<&SkillRequirement> {
        let skill = skill.trim();
        self.requirements
            .iter()
            .find(|req| req.skill.eq_ignore_ascii_case(skill))
    }

    /// Skill names in matrix order.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.requirements.iter().map(|req| req.skill.as_str())
    }

    #[must_use]
    pub fn requirements(&self) -> &[SkillRequirement] {
        &self.requirements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Always false for a constructed standard; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl TryFrom<BTreeMap<String, BTreeMap<RoleLevel, ProficiencyLevel>>> for SkillStandard {
    type Error = CoreError;

    /// Skills are ordered alphabetically when built from a map.
    fn try_from(
        map: BTreeMap<String, BTreeMap<RoleLevel, ProficiencyLevel>>,
    ) -> Result<Self, Self::Error> {
        Self::new(
            map.into_iter()
                .map(|(skill, levels)| SkillRequirement { skill, levels })
                .collect(),
        )
    }
}
