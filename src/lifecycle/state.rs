//! Lifecycle state vocabulary.

use crate::lifecycle::error::LifecycleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Governance status of an AI service record.
///
/// One of 21 fixed values following the lifecycle state diagram: drafting
/// and planning, pre-review with a possible revision loop, risk assessment
/// and planning with a risk-level fork, development, pre-operation testing
/// with an optional third-party pass, deployment, and the recurring
/// operations loop. The initial state is [`LifecycleState::Draft`].
///
/// Serialized as the exact PascalCase tokens of the state diagram
/// (`"PreReviewApproved"`, `"ImprovementPlanned"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    Draft,
    PlanningCompleted,
    PreReview,
    RevisionRequired,
    PreReviewApproved,
    RiskAssessment,
    RiskPlan,
    HighRiskReview,
    NormalApproval,
    RiskPlanApproved,
    DevelopmentRequested,
    InDevelopment,
    PreOperationTest,
    ThirdPartyTest,
    ValidationChecked,
    OperationApprovalRequested,
    DeploymentApproved,
    Deployed,
    Operating,
    Monitoring,
    ImprovementPlanned,
}

impl LifecycleState {
    /// All states in diagram declaration order.
    pub const ALL: [LifecycleState; 21] = [
        LifecycleState::Draft,
        LifecycleState::PlanningCompleted,
        LifecycleState::PreReview,
        LifecycleState::RevisionRequired,
        LifecycleState::PreReviewApproved,
        LifecycleState::RiskAssessment,
        LifecycleState::RiskPlan,
        LifecycleState::HighRiskReview,
        LifecycleState::NormalApproval,
        LifecycleState::RiskPlanApproved,
        LifecycleState::DevelopmentRequested,
        LifecycleState::InDevelopment,
        LifecycleState::PreOperationTest,
        LifecycleState::ThirdPartyTest,
        LifecycleState::ValidationChecked,
        LifecycleState::OperationApprovalRequested,
        LifecycleState::DeploymentApproved,
        LifecycleState::Deployed,
        LifecycleState::Operating,
        LifecycleState::Monitoring,
        LifecycleState::ImprovementPlanned,
    ];

    /// Returns the PascalCase diagram token for this state.
    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Draft => "Draft",
            LifecycleState::PlanningCompleted => "PlanningCompleted",
            LifecycleState::PreReview => "PreReview",
            LifecycleState::RevisionRequired => "RevisionRequired",
            LifecycleState::PreReviewApproved => "PreReviewApproved",
            LifecycleState::RiskAssessment => "RiskAssessment",
            LifecycleState::RiskPlan => "RiskPlan",
            LifecycleState::HighRiskReview => "HighRiskReview",
            LifecycleState::NormalApproval => "NormalApproval",
            LifecycleState::RiskPlanApproved => "RiskPlanApproved",
            LifecycleState::DevelopmentRequested => "DevelopmentRequested",
            LifecycleState::InDevelopment => "InDevelopment",
            LifecycleState::PreOperationTest => "PreOperationTest",
            LifecycleState::ThirdPartyTest => "ThirdPartyTest",
            LifecycleState::ValidationChecked => "ValidationChecked",
            LifecycleState::OperationApprovalRequested => "OperationApprovalRequested",
            LifecycleState::DeploymentApproved => "DeploymentApproved",
            LifecycleState::Deployed => "Deployed",
            LifecycleState::Operating => "Operating",
            LifecycleState::Monitoring => "Monitoring",
            LifecycleState::ImprovementPlanned => "ImprovementPlanned",
        }
    }

    /// Returns the opaque display key for this state's badge label.
    ///
    /// These are references into the presentation layer's copy tables and
    /// are never resolved or validated here.
    pub fn label_key(self) -> &'static str {
        match self {
            LifecycleState::Draft => "lifecycle.Draft",
            LifecycleState::PlanningCompleted => "lifecycle.PlanningCompleted",
            LifecycleState::PreReview => "lifecycle.PreReview",
            LifecycleState::RevisionRequired => "lifecycle.RevisionRequired",
            LifecycleState::PreReviewApproved => "lifecycle.PreReviewApproved",
            LifecycleState::RiskAssessment => "lifecycle.RiskAssessment",
            LifecycleState::RiskPlan => "lifecycle.RiskPlan",
            LifecycleState::HighRiskReview => "lifecycle.HighRiskReview",
            LifecycleState::NormalApproval => "lifecycle.NormalApproval",
            LifecycleState::RiskPlanApproved => "lifecycle.RiskPlanApproved",
            LifecycleState::DevelopmentRequested => "lifecycle.DevelopmentRequested",
            LifecycleState::InDevelopment => "lifecycle.InDevelopment",
            LifecycleState::PreOperationTest => "lifecycle.PreOperationTest",
            LifecycleState::ThirdPartyTest => "lifecycle.ThirdPartyTest",
            LifecycleState::ValidationChecked => "lifecycle.ValidationChecked",
            LifecycleState::OperationApprovalRequested => "lifecycle.OperationApprovalRequested",
            LifecycleState::DeploymentApproved => "lifecycle.DeploymentApproved",
            LifecycleState::Deployed => "lifecycle.Deployed",
            LifecycleState::Operating => "lifecycle.Operating",
            LifecycleState::Monitoring => "lifecycle.Monitoring",
            LifecycleState::ImprovementPlanned => "lifecycle.ImprovementPlanned",
        }
    }

    /// Returns the initial state of a new record.
    pub fn initial() -> Self {
        LifecycleState::Draft
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| LifecycleError::unknown_state(s))
    }
}
