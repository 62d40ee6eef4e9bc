//! Stage identifier type
//!
//! The approval flow has a closed set of 23 stages, so the identifier is an
//! enum rather than a free-form string: a `StageId` that exists is always a
//! defined stage, and every `next`/`prev` reference in the stage table is
//! checked by the compiler. Strings only appear at the edges (routes, serde),
//! where parsing an unknown token fails explicitly.

use crate::flow::error::FlowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a stage in the approval-flow pipeline.
///
/// Variants are declared in pipeline order; [`StageId::ALL`] iterates them in
/// that order, which is also the order [`super::Pipeline`] uses for
/// deterministic scans and progress computation.
///
/// # Examples
///
/// ```
/// use aigov::flow::StageId;
///
/// assert_eq!(StageId::RiskAssessment.as_str(), "risk-assessment");
/// assert_eq!("risk-assessment".parse::<StageId>().unwrap(), StageId::RiskAssessment);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageId {
    RequestForm,
    ProjectCreate,
    PlanningDoc,
    ModelDoc,
    PreReviewRequest,
    PreReviewResult,
    RiskAssessment,
    DevPlan,
    RiskPlan,
    RiskLevelJudge,
    RiskPlanApproval,
    GovernanceApproval,
    DevRequest,
    DevProgress,
    PreOpVerification,
    VerificationBranch,
    VerificationAdequacy,
    ThirdPartyVerification,
    OpApprovalRequest,
    DeploymentApproval,
    Deployment,
    Dashboard,
    Improvement,
}

impl StageId {
    /// All stages in pipeline declaration order.
    pub const ALL: [StageId; 23] = [
        StageId::RequestForm,
        StageId::ProjectCreate,
        StageId::PlanningDoc,
        StageId::ModelDoc,
        StageId::PreReviewRequest,
        StageId::PreReviewResult,
        StageId::RiskAssessment,
        StageId::DevPlan,
        StageId::RiskPlan,
        StageId::RiskLevelJudge,
        StageId::RiskPlanApproval,
        StageId::GovernanceApproval,
        StageId::DevRequest,
        StageId::DevProgress,
        StageId::PreOpVerification,
        StageId::VerificationBranch,
        StageId::VerificationAdequacy,
        StageId::ThirdPartyVerification,
        StageId::OpApprovalRequest,
        StageId::DeploymentApproval,
        StageId::Deployment,
        StageId::Dashboard,
        StageId::Improvement,
    ];

    /// Returns the kebab-case route token for this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            StageId::RequestForm => "request-form",
            StageId::ProjectCreate => "project-create",
            StageId::PlanningDoc => "planning-doc",
            StageId::ModelDoc => "model-doc",
            StageId::PreReviewRequest => "pre-review-request",
            StageId::PreReviewResult => "pre-review-result",
            StageId::RiskAssessment => "risk-assessment",
            StageId::DevPlan => "dev-plan",
            StageId::RiskPlan => "risk-plan",
            StageId::RiskLevelJudge => "risk-level-judge",
            StageId::RiskPlanApproval => "risk-plan-approval",
            StageId::GovernanceApproval => "governance-approval",
            StageId::DevRequest => "dev-request",
            StageId::DevProgress => "dev-progress",
            StageId::PreOpVerification => "pre-op-verification",
            StageId::VerificationBranch => "verification-branch",
            StageId::VerificationAdequacy => "verification-adequacy",
            StageId::ThirdPartyVerification => "third-party-verification",
            StageId::OpApprovalRequest => "op-approval-request",
            StageId::DeploymentApproval => "deployment-approval",
            StageId::Deployment => "deployment",
            StageId::Dashboard => "dashboard",
            StageId::Improvement => "improvement",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| FlowError::unknown_stage(s))
    }
}
