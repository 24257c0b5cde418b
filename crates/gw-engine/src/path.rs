//! Learning-path and milestone synthesis.
//!
//! Each skill below `Expert` gets a path to the next proficiency level:
//! three two-week milestones for a one-level jump, four for larger jumps.
//! Milestone XP is `250 × milestone_number`; only the last milestone carries
//! a mentor checkpoint.

use chrono::{DateTime, Duration, Utc};
use gw_core::entities::{
    ExternalResource, LearningPath, LearningPlan, Milestone, MilestonePart, ProjectChallenge,
    ResourceKind, SkillGap, SkillRating,
};
use gw_core::enums::{PartKind, ProficiencyLevel};
use gw_core::ids::slugify;

/// XP per milestone number.
pub const MILESTONE_XP_STEP: u32 = 250;
/// Calendar weeks covered by one milestone.
pub const WEEKS_PER_MILESTONE: u32 = 2;
/// Bonus XP for the real-project challenge.
pub const PROJECT_XP_BONUS: u32 = 50;
/// Plan length reported when no path was generated.
const DEFAULT_TOTAL_WEEKS: u32 = 8;

/// Milestones needed to move between two levels.
#[must_use]
pub fn milestone_count(current: ProficiencyLevel, target: ProficiencyLevel) -> u32 {
    let jump = i16::from(target.score()) - i16::from(current.score());
    if jump >= 2 { 4 } else { 3 }
}

/// Skill/level pairs from a report's skill gaps.
#[must_use]
pub fn ratings_from_gaps(gaps: &[SkillGap]) -> Vec<SkillRating> {
    gaps.iter()
        .map(|gap| SkillRating {
            skill: gap.skill.clone(),
            current_level: gap.current_level,
        })
        .collect()
}

/// Builds learning paths with dates anchored at a fixed instant.
#[derive(Debug, Clone)]
pub struct PathSynthesizer {
    resource_base: String,
    started_at: DateTime<Utc>,
}

impl PathSynthesizer {
    pub fn new(resource_base: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            resource_base: resource_base.into().trim_end_matches('/').to_string(),
            started_at,
        }
    }

    /// Paths for every rating below `Expert`, wrapped in a plan.
    #[must_use]
    pub fn plan(&self, role: &str, ratings: &[SkillRating]) -> LearningPlan {
        let learning_paths: Vec<LearningPath> =
            ratings.iter().filter_map(|r| self.path(r)).collect();

        let total_xp_available = learning_paths.iter().map(|p| p.total_xp).sum();
        let estimated_total_weeks = learning_paths
            .iter()
            .map(|p| p.estimated_weeks)
            .max()
            .unwrap_or(DEFAULT_TOTAL_WEEKS);

        tracing::debug!(
            role,
            paths = learning_paths.len(),
            total_xp_available,
            "synthesized learning plan"
        );

        LearningPlan {
            role: role.to_string(),
            generated_at: self.started_at,
            total_skills: learning_paths.len(),
            learning_paths,
            total_xp_available,
            estimated_total_weeks,
        }
    }

    /// Path one level up from the rating, or `None` at `Expert`.
    #[must_use]
    pub fn path(&self, rating: &SkillRating) -> Option<LearningPath> {
        let target = rating.current_level.next()?;
        let count = milestone_count(rating.current_level, target);
        let milestones: Vec<Milestone> = (1..=count)
            .map(|n| self.milestone(&rating.skill, n, count))
            .collect();
        let total_xp = milestones.iter().map(|m| m.xp).sum();

        Some(LearningPath {
            skill: rating.skill.clone(),
            current_level: rating.current_level,
            target_level: target,
            estimated_weeks: count * WEEKS_PER_MILESTONE,
            total_xp,
            milestones,
        })
    }

    fn milestone(&self, skill: &str, number: u32, count: u32) -> Milestone {
        let index = number - 1;
        let start_offset = i64::from(index * WEEKS_PER_MILESTONE);
        let end_offset = i64::from(number * WEEKS_PER_MILESTONE);

        Milestone {
            milestone_number: number,
            title: milestone_title(skill, number),
            description: milestone_description(skill, number),
            weeks: format!(
                "Week {}-{}",
                index * WEEKS_PER_MILESTONE + 1,
                number * WEEKS_PER_MILESTONE
            ),
            start_date: self.started_at + Duration::weeks(start_offset),
            end_date: self.started_at + Duration::weeks(end_offset),
            xp: MILESTONE_XP_STEP * number,
            parts: milestone_parts(skill, number),
            mentor_checkpoint: number == count,
            project_challenge: ProjectChallenge {
                enabled: true,
                description: format!(
                    "Real-world project challenge: Implement {skill} feature in your current project"
                ),
                ticket_template: format!(
                    "Create a ticket for: {skill} milestone {number} implementation"
                ),
                xp_bonus: PROJECT_XP_BONUS,
            },
            resources: self.resources(skill, number),
        }
    }

    fn resources(&self, skill: &str, number: u32) -> Vec<ExternalResource> {
        let slug = slugify(skill);
        let mut resources = vec![
            ExternalResource {
                title: format!("{skill} Official Documentation"),
                url: format!("{}/{slug}/docs", self.resource_base),
                kind: ResourceKind::Documentation,
            },
            ExternalResource {
                title: format!("{skill} Best Practices Guide"),
                url: format!("{}/{slug}/best-practices", self.resource_base),
                kind: ResourceKind::Guide,
            },
        ];
        if number >= 3 {
            resources.push(ExternalResource {
                title: format!("Advanced {skill} Tutorial"),
                url: format!("{}/{slug}/advanced", self.resource_base),
                kind: ResourceKind::Tutorial,
            });
        }
        resources
    }
}

fn milestone_title(skill: &str, number: u32) -> String {
    match number {
        1 => format!("Foundations of {skill}"),
        2 => format!("Building {skill} Skills"),
        3 => format!("Advanced {skill} Concepts"),
        4 => format!("Mastering {skill}"),
        n => format!("Milestone {n}: {skill}"),
    }
}

fn milestone_description(skill: &str, number: u32) -> String {
    match number {
        1 => format!("Establish a solid foundation in {skill} with core concepts and fundamentals."),
        2 => format!(
            "Build upon your {skill} knowledge with practical applications and real-world scenarios."
        ),
        3 => format!("Explore advanced {skill} techniques and patterns to enhance your expertise."),
        4 => format!(
            "Master {skill} by tackling complex challenges and implementing best practices."
        ),
        _ => format!("Continue your journey in {skill}."),
    }
}

fn milestone_parts(skill: &str, number: u32) -> Vec<MilestonePart> {
    PartKind::ALL
        .into_iter()
        .map(|kind| {
            let (title, description) = match kind {
                PartKind::Lesson => (
                    format!("{skill} Lesson {number}"),
                    format!("Interactive lesson covering key concepts for milestone {number}"),
                ),
                PartKind::Quiz => (
                    format!("{skill} Knowledge Check {number}"),
                    format!("Test your understanding with {} questions", number * 5),
                ),
                PartKind::Challenge => (
                    format!("{skill} Challenge {number}"),
                    "Hands-on coding challenge to apply what you've learned".to_string(),
                ),
                PartKind::Practice => (
                    format!("{skill} Practice Session {number}"),
                    "Guided practice exercises to reinforce concepts".to_string(),
                ),
            };
            MilestonePart {
                kind,
                title,
                description,
                duration: kind.duration().to_string(),
                xp: kind.xp(),
                completed: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn synth() -> PathSynthesizer {
        PathSynthesizer::new("https://example.com/", Utc::now())
    }

    fn rating(skill: &str, level: ProficiencyLevel) -> SkillRating {
        SkillRating {
            skill: skill.into(),
            current_level: level,
        }
    }

    #[test]
    fn basic_to_intermediate_has_three_milestones() {
        let path = synth()
            .path(&rating("React", ProficiencyLevel::Basic))
            .unwrap();
        assert_eq!(path.target_level, ProficiencyLevel::Intermediate);
        let xp: Vec<u32> = path.milestones.iter().map(|m| m.xp).collect();
        assert_eq!(xp, vec![250, 500, 750]);
        let checkpoints: Vec<bool> = path.milestones.iter().map(|m| m.mentor_checkpoint).collect();
        assert_eq!(checkpoints, vec![false, false, true]);
        assert_eq!(path.total_xp, 1500);
        assert_eq!(path.estimated_weeks, 6);
    }

    #[test]
    fn expert_skills_get_no_path() {
        assert!(synth().path(&rating("CSS", ProficiencyLevel::Expert)).is_none());
    }

    #[rstest]
    #[case(ProficiencyLevel::None, ProficiencyLevel::Basic, 3)]
    #[case(ProficiencyLevel::Basic, ProficiencyLevel::Advanced, 4)]
    #[case(ProficiencyLevel::None, ProficiencyLevel::Expert, 4)]
    fn milestone_count_by_jump(
        #[case] current: ProficiencyLevel,
        #[case] target: ProficiencyLevel,
        #[case] expected: u32,
    ) {
        assert_eq!(milestone_count(current, target), expected);
    }

    #[test]
    fn milestones_are_contiguous_with_two_week_windows() {
        let started = Utc::now();
        let path = PathSynthesizer::new("https://example.com", started)
            .path(&rating("Git Basics", ProficiencyLevel::None))
            .unwrap();
        for (i, m) in path.milestones.iter().enumerate() {
            assert_eq!(m.milestone_number as usize, i + 1);
            assert_eq!(m.end_date - m.start_date, Duration::weeks(2));
        }
        assert_eq!(path.milestones[0].start_date, started);
        assert_eq!(path.milestones[1].weeks, "Week 3-4");
    }

    #[test]
    fn parts_have_fixed_xp_and_start_incomplete() {
        let path = synth()
            .path(&rating("HTML", ProficiencyLevel::Intermediate))
            .unwrap();
        let parts = &path.milestones[1].parts;
        let xp: Vec<u32> = parts.iter().map(|p| p.xp).collect();
        assert_eq!(xp, vec![50, 30, 75, 25]);
        assert!(parts.iter().all(|p| !p.completed));
        assert_eq!(parts[1].description, "Test your understanding with 10 questions");
    }

    #[test]
    fn advanced_resource_from_third_milestone() {
        let path = synth()
            .path(&rating("Next.js", ProficiencyLevel::Basic))
            .unwrap();
        assert_eq!(path.milestones[1].resources.len(), 2);
        assert_eq!(path.milestones[2].resources.len(), 3);
        assert_eq!(
            path.milestones[0].resources[0].url,
            "https://example.com/next-js/docs"
        );
    }

    #[test]
    fn titles_fall_back_after_four() {
        assert_eq!(milestone_title("CSS", 4), "Mastering CSS");
        assert_eq!(milestone_title("CSS", 5), "Milestone 5: CSS");
        assert_eq!(milestone_description("CSS", 7), "Continue your journey in CSS.");
    }

    #[test]
    fn plan_totals_and_default_weeks() {
        let plan = synth().plan(
            "Frontend Engineer",
            &[
                rating("HTML", ProficiencyLevel::Basic),
                rating("CSS", ProficiencyLevel::Expert),
                rating("React", ProficiencyLevel::None),
            ],
        );
        assert_eq!(plan.total_skills, 2);
        assert_eq!(plan.total_xp_available, 3000);
        assert_eq!(plan.estimated_total_weeks, 6);

        let empty = synth().plan("Frontend Engineer", &[rating("CSS", ProficiencyLevel::Expert)]);
        assert_eq!(empty.total_skills, 0);
        assert_eq!(empty.estimated_total_weeks, 8);
    }
}
