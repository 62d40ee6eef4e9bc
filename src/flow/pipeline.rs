//! The approval-flow pipeline: stage table and query surface.
//!
//! The pipeline is built once per process (lazily, on first access through
//! [`pipeline()`]) and validated at construction: duplicate or malformed
//! paths and stages unreachable from the entry are defects in the built-in
//! table, not runtime conditions, so construction fails fast on them.
//!
//! The stage graph is NOT a DAG: the flow deliberately loops between the
//! dashboard and the improvement stage, because operation and improvement
//! are recurring. No cycle check applies here.

use super::error::{FlowError, FlowResult};
use super::stage::{Back, BranchOption, Forward, Stage};
use super::stage_id::StageId;
use once_cell::sync::Lazy;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::collections::HashMap;

static PIPELINE: Lazy<Pipeline> = Lazy::new(|| {
    // The table is compile-time constant data; failing validation here is a
    // defect in this file, not a recoverable condition.
    Pipeline::build().expect("built-in stage table must validate")
});

/// Returns the process-wide approval-flow pipeline.
///
/// # Examples
///
/// ```
/// use aigov::flow::{pipeline, StageId};
///
/// let flow = pipeline();
/// assert_eq!(flow.len(), 23);
/// assert_eq!(flow.entry().id(), StageId::RequestForm);
/// ```
pub fn pipeline() -> &'static Pipeline {
    &PIPELINE
}

/// Immutable table of the 23 approval-flow stages with query operations.
///
/// Every call is a pure function of the table and its argument. Lookups by
/// user-supplied path or id string return `Option`; lookups by [`StageId`]
/// are total.
#[derive(Debug)]
pub struct Pipeline {
    /// Stages in declaration order
    stages: Vec<Stage>,
    /// Stage id to index in `stages`
    by_id: HashMap<StageId, usize>,
    /// Canonical path to index in `stages`
    by_path: HashMap<String, usize>,
}

impl Pipeline {
    /// Builds and validates the pipeline from the built-in stage table.
    pub(crate) fn build() -> FlowResult<Self> {
        let stages = stage_table();

        let mut by_id = HashMap::with_capacity(stages.len());
        let mut by_path = HashMap::with_capacity(stages.len());
        for (index, stage) in stages.iter().enumerate() {
            if !stage.path().starts_with('/') {
                return Err(FlowError::malformed_path(stage.id(), stage.path()));
            }
            by_id.insert(stage.id(), index);
            if let Some(&first) = by_path.get(stage.path()) {
                let first: &Stage = &stages[first];
                return Err(FlowError::duplicate_path(
                    stage.path(),
                    first.id(),
                    stage.id(),
                ));
            }
            by_path.insert(stage.path().to_string(), index);
        }

        let pipeline = Self {
            stages,
            by_id,
            by_path,
        };
        pipeline.check_reachability()?;
        Ok(pipeline)
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns the stage for an id.
    ///
    /// Total: every [`StageId`] is a defined stage by construction.
    pub fn stage(&self, id: StageId) -> &Stage {
        // by_id covers StageId::ALL; build() indexed every declared stage.
        &self.stages[self.by_id[&id]]
    }

    /// Looks up a stage by its string id token.
    ///
    /// Absence is a result, not a failure: the caller's fallback policy is
    /// to redirect to the entry stage.
    pub fn stage_by_id(&self, token: &str) -> Option<&Stage> {
        let id: StageId = token.parse().ok()?;
        Some(self.stage(id))
    }

    /// Looks up a stage by route path.
    ///
    /// Tries an exact match on the canonical path first; failing that,
    /// matches any stage whose path is a prefix of the input followed by
    /// `/`, so sub-routes of a stage resolve to the stage. Returns `None`
    /// when neither rule matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use aigov::flow::{pipeline, StageId};
    ///
    /// let flow = pipeline();
    /// let stage = flow.stage_by_path("/flow/risk-assessment/sub-detail").unwrap();
    /// assert_eq!(stage.id(), StageId::RiskAssessment);
    /// assert!(flow.stage_by_path("/flow/risk-assessmentX").is_none());
    /// ```
    pub fn stage_by_path(&self, path: &str) -> Option<&Stage> {
        if let Some(&index) = self.by_path.get(path) {
            return Some(&self.stages[index]);
        }
        self.stages.iter().find(|stage| {
            path.strip_prefix(stage.path())
                .is_some_and(|rest| rest.starts_with('/'))
        })
    }

    /// Resolves the path of the stage preceding `stage`.
    ///
    /// For a merge point this is the path of the FIRST declared parent;
    /// callers must not assume symmetry with the branch actually taken on
    /// the way in. Returns `None` only for the entry stage.
    pub fn previous_path(&self, stage: &Stage) -> Option<&str> {
        match stage.back() {
            Back::Entry => None,
            Back::Single(prev) => Some(self.stage(*prev).path()),
            Back::Merge(parents) => parents.first().map(|prev| self.stage(*prev).path()),
        }
    }

    /// Returns the designated entry stage.
    pub fn entry(&self) -> &Stage {
        self.stage(StageId::RequestForm)
    }

    /// Returns the dashboard stage.
    pub fn dashboard(&self) -> &Stage {
        self.stage(StageId::Dashboard)
    }

    /// Returns an iterator over all stages in declaration order.
    pub fn stages(&self) -> impl Iterator<Item = &Stage> {
        self.stages.iter()
    }

    /// Returns the zero-based position of a stage in declaration order.
    pub fn position(&self, id: StageId) -> usize {
        self.by_id[&id]
    }

    /// Returns wizard progress for a stage as a whole percentage.
    ///
    /// The dashboard stage is excluded from the denominator: it is a
    /// landing page, not a wizard step, so the final improvement stage
    /// reads as 100%.
    pub fn progress_percent(&self, id: StageId) -> u8 {
        let total = self.stages.len() - 1;
        let position = self.position(id);
        ((position as f64 / total as f64) * 100.0).round() as u8
    }

    /// Renders the stage graph in Graphviz dot format.
    ///
    /// Nodes are stage tokens; branch edges are labeled with their choice
    /// key, linear edges are unlabeled.
    pub fn to_dot(&self) -> String {
        let (graph, _) = self.forward_graph();
        format!("{}", Dot::new(&graph))
    }

    /// Builds a petgraph view of the forward edges.
    fn forward_graph(&self) -> (DiGraph<&str, &str>, HashMap<StageId, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::with_capacity(self.stages.len());
        for stage in &self.stages {
            nodes.insert(stage.id(), graph.add_node(stage.id().as_str()));
        }
        for stage in &self.stages {
            let from = nodes[&stage.id()];
            match stage.forward() {
                Forward::Linear(next) => {
                    graph.add_edge(from, nodes[next], "");
                }
                Forward::Branch(options) => {
                    for option in options {
                        graph.add_edge(from, nodes[&option.target()], option.key());
                    }
                }
            }
        }
        (graph, nodes)
    }

    /// Checks that every stage is reachable from the entry stage by
    /// following forward edges.
    fn check_reachability(&self) -> FlowResult<()> {
        let (graph, nodes) = self.forward_graph();
        let mut reached = vec![false; self.stages.len()];
        let mut bfs = Bfs::new(&graph, nodes[&StageId::RequestForm]);
        while let Some(node) = bfs.next(&graph) {
            reached[node.index()] = true;
        }
        for (stage, reached) in self.stages.iter().zip(reached) {
            if !reached {
                return Err(FlowError::unreachable(stage.id()));
            }
        }
        Ok(())
    }
}

/// The built-in stage table, in declaration order.
///
/// Edges transcribe the governance flowchart: request form through planning
/// and pre-review, risk assessment and planning with a risk-level fork,
/// development, pre-operation verification with a second risk fork, and
/// deployment into the dashboard/improvement loop.
fn stage_table() -> Vec<Stage> {
    use StageId::*;

    vec![
        Stage::new(RequestForm, Forward::Linear(ProjectCreate), Back::Entry),
        Stage::new(
            ProjectCreate,
            Forward::Linear(PlanningDoc),
            Back::Single(RequestForm),
        ),
        Stage::new(
            PlanningDoc,
            Forward::Linear(ModelDoc),
            Back::Single(ProjectCreate),
        ),
        Stage::new(
            ModelDoc,
            Forward::Linear(PreReviewRequest),
            Back::Single(PlanningDoc),
        ),
        Stage::new(
            PreReviewRequest,
            Forward::Linear(PreReviewResult),
            Back::Single(ModelDoc),
        ),
        Stage::new(
            PreReviewResult,
            Forward::Branch(vec![
                BranchOption::new("revision", PlanningDoc, "flow.revision_return"),
                BranchOption::new("approved", RiskAssessment, "flow.pre_review_approved_btn"),
            ]),
            Back::Single(PreReviewRequest),
        ),
        Stage::new(
            RiskAssessment,
            Forward::Linear(DevPlan),
            Back::Single(PreReviewResult),
        ),
        Stage::new(DevPlan, Forward::Linear(RiskPlan), Back::Single(RiskAssessment)),
        Stage::new(
            RiskPlan,
            Forward::Linear(RiskLevelJudge),
            Back::Single(DevPlan),
        ),
        Stage::new(
            RiskLevelJudge,
            Forward::Branch(vec![
                BranchOption::new("low_medium", RiskPlanApproval, "flow.risk_level.low_medium"),
                BranchOption::new("high", GovernanceApproval, "flow.risk_level.high"),
            ]),
            Back::Single(RiskPlan),
        ),
        Stage::new(
            RiskPlanApproval,
            Forward::Linear(DevRequest),
            Back::Single(RiskLevelJudge),
        ),
        Stage::new(
            GovernanceApproval,
            Forward::Linear(DevRequest),
            Back::Single(RiskLevelJudge),
        ),
        Stage::new(
            DevRequest,
            Forward::Linear(DevProgress),
            Back::Merge(vec![RiskPlanApproval, GovernanceApproval]),
        ),
        Stage::new(
            DevProgress,
            Forward::Linear(PreOpVerification),
            Back::Single(DevRequest),
        ),
        Stage::new(
            PreOpVerification,
            Forward::Linear(VerificationBranch),
            Back::Single(DevProgress),
        ),
        Stage::new(
            VerificationBranch,
            Forward::Branch(vec![
                BranchOption::new("medium", VerificationAdequacy, "flow.risk_level.medium"),
                BranchOption::new("high", ThirdPartyVerification, "flow.risk_level.high"),
            ]),
            Back::Single(PreOpVerification),
        ),
        Stage::new(
            VerificationAdequacy,
            Forward::Linear(OpApprovalRequest),
            Back::Single(VerificationBranch),
        ),
        Stage::new(
            ThirdPartyVerification,
            Forward::Linear(OpApprovalRequest),
            Back::Single(VerificationBranch),
        ),
        Stage::new(
            OpApprovalRequest,
            Forward::Linear(DeploymentApproval),
            Back::Merge(vec![VerificationAdequacy, ThirdPartyVerification]),
        ),
        Stage::new(
            DeploymentApproval,
            Forward::Linear(Deployment),
            Back::Single(OpApprovalRequest),
        ),
        Stage::new(
            Deployment,
            Forward::Linear(Dashboard),
            Back::Single(DeploymentApproval),
        ),
        Stage::new(Dashboard, Forward::Linear(Improvement), Back::Single(Deployment)),
        Stage::new(Improvement, Forward::Linear(Dashboard), Back::Single(Dashboard)),
    ]
}
