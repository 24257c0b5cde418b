//! Entity structs for the Gapwise pipeline.
//!
//! Every struct derives `Serialize`, `Deserialize`, and `JsonSchema` so it can
//! cross the CLI/JSON boundary and be validated against its generated schema.

mod assessment;
mod content;
mod gap;
mod path;
mod progress;
mod session;

pub use assessment::{
    AnswerFormat, AssessedSkill, AssessmentQuestion, ExternalSkillAssessment, SelfAssessmentAnswer,
    SelfAssessmentResult, SkillProficiencyEstimate,
};
pub use content::{
    ChallengeBody, ChallengeHint, ContentBody, ContentItem, ContentKey, CoreConcept,
    Flashcard, FlashcardsBody, LessonBody, LessonExample, QuizBody, QuizQuestion, SummaryBody,
};
pub use gap::{GapAnalysisReport, LearningPhase, PhasePriority, SkillGap};
pub use path::{
    ExternalResource, LearningPath, LearningPlan, Milestone, MilestonePart, ProjectChallenge,
    ResourceKind, SkillRating,
};
pub use progress::{CompletionRequest, CompletionResult, ProgressLedger, ProgressRecord, QuizAnswer};
pub use session::{Session, UserProfile};
