//! Stage definition: per-stage metadata and edge shapes.

use crate::flow::StageId;
use serde::{Deserialize, Serialize};

/// One selectable choice on a branching stage.
///
/// Branch choices are declaration-ordered; the UI renders one action per
/// choice, each carrying its own label key and target stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOption {
    key: String,
    target: StageId,
    label_key: String,
}

impl BranchOption {
    pub(crate) fn new(key: &str, target: StageId, label_key: &str) -> Self {
        Self {
            key: key.to_string(),
            target,
            label_key: label_key.to_string(),
        }
    }

    /// Returns the choice key (e.g. `"high"` for the high-risk branch).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the stage this choice leads to.
    pub fn target(&self) -> StageId {
        self.target
    }

    /// Returns the opaque display key for the choice label.
    ///
    /// The pipeline never resolves or validates these; they are references
    /// into whatever copy table the presentation layer maintains.
    pub fn label_key(&self) -> &str {
        &self.label_key
    }
}

/// Forward edge shape of a stage.
///
/// A stage either has exactly one successor or a declaration-ordered set of
/// branch choices, never both. The spelling as a sum type makes that
/// exclusivity structural.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Forward {
    /// Single successor stage.
    Linear(StageId),
    /// Externally-decided choice between several successors.
    Branch(Vec<BranchOption>),
}

/// Backward edge shape of a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Back {
    /// The designated entry stage; nothing precedes it.
    Entry,
    /// Single predecessor stage.
    Single(StageId),
    /// Merge point reachable from several predecessors, declaration-ordered.
    ///
    /// Order is significant: backward navigation resolves to the FIRST
    /// declared parent, regardless of which branch actually led here.
    Merge(Vec<StageId>),
}

/// A node in the approval-flow pipeline.
///
/// Carries the canonical route path, opaque display keys, and the forward
/// and backward edge shapes. Stages are defined once in the built-in table
/// and handed out by reference from [`super::Pipeline`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    id: StageId,
    path: String,
    title_key: String,
    description_key: String,
    forward: Forward,
    back: Back,
}

impl Stage {
    pub(crate) fn new(id: StageId, forward: Forward, back: Back) -> Self {
        // Display keys follow the fixed `flow.<token_with_underscores>.*`
        // convention of the copy tables; paths follow `/flow/<token>` with
        // the dashboard as the single exception.
        let token = id.as_str().replace('-', "_");
        Self {
            id,
            path: route_path(id),
            title_key: format!("flow.{token}.title"),
            description_key: format!("flow.{token}.description"),
            forward,
            back,
        }
    }

    /// Returns the stage identifier.
    pub fn id(&self) -> StageId {
        self.id
    }

    /// Returns the canonical route path (e.g. `/flow/risk-assessment`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the opaque display key for the stage title.
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    /// Returns the opaque display key for the stage description.
    pub fn description_key(&self) -> &str {
        &self.description_key
    }

    /// Returns the forward edge shape.
    ///
    /// Callers branch on this: render one "next" action for
    /// [`Forward::Linear`], one action per choice for [`Forward::Branch`].
    pub fn forward(&self) -> &Forward {
        &self.forward
    }

    /// Returns the backward edge shape.
    pub fn back(&self) -> &Back {
        &self.back
    }

    /// Returns true if this stage forks into several choices.
    pub fn is_branch(&self) -> bool {
        matches!(self.forward, Forward::Branch(_))
    }

    /// Returns true if this stage merges several incoming paths.
    pub fn is_merge(&self) -> bool {
        matches!(self.back, Back::Merge(_))
    }
}

/// Canonical path for a stage.
///
/// Every stage binds `/flow/<token>` except the dashboard, which lives at
/// the application root level. These exact strings are a compatibility
/// contract with the routing layer.
fn route_path(id: StageId) -> String {
    match id {
        StageId::Dashboard => "/dashboard".to_string(),
        other => format!("/flow/{}", other.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keys_follow_convention() {
        let stage = Stage::new(
            StageId::PreOpVerification,
            Forward::Linear(StageId::VerificationBranch),
            Back::Single(StageId::DevProgress),
        );
        assert_eq!(stage.title_key(), "flow.pre_op_verification.title");
        assert_eq!(stage.description_key(), "flow.pre_op_verification.description");
    }

    #[test]
    fn test_dashboard_binds_root_level_path() {
        let stage = Stage::new(
            StageId::Dashboard,
            Forward::Linear(StageId::Improvement),
            Back::Single(StageId::Deployment),
        );
        assert_eq!(stage.path(), "/dashboard");
    }

    #[test]
    fn test_branch_shape_is_exclusive() {
        let stage = Stage::new(
            StageId::RiskLevelJudge,
            Forward::Branch(vec![
                BranchOption::new("low_medium", StageId::RiskPlanApproval, "flow.risk_level.low_medium"),
                BranchOption::new("high", StageId::GovernanceApproval, "flow.risk_level.high"),
            ]),
            Back::Single(StageId::RiskPlan),
        );
        assert!(stage.is_branch());
        assert!(!stage.is_merge());
        match stage.forward() {
            Forward::Branch(options) => {
                assert_eq!(options.len(), 2);
                assert_eq!(options[0].key(), "low_medium");
                assert_eq!(options[1].target(), StageId::GovernanceApproval);
            }
            Forward::Linear(_) => panic!("expected branch"),
        }
    }
}
