//! Transition tables and legality queries.
//!
//! The forward table below is the only hand-maintained direction. The
//! reverse table is its transpose, built once on first use, which makes
//! forward/backward consistency structural instead of a property to test.

use super::state::LifecycleState;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Predecessors per state, derived by transposing the forward table.
///
/// Iteration order is deterministic: predecessors appear in the declaration
/// order of their own `next_states` entries, scanned over
/// [`LifecycleState::ALL`].
static PREV: Lazy<HashMap<LifecycleState, Vec<LifecycleState>>> = Lazy::new(|| {
    let mut prev: HashMap<LifecycleState, Vec<LifecycleState>> = HashMap::new();
    for from in LifecycleState::ALL {
        for &to in from.next_states() {
            prev.entry(to).or_default().push(from);
        }
    }
    prev
});

impl LifecycleState {
    /// Returns the states this state may legally transition to, in
    /// declaration order.
    ///
    /// At most two successors exist anywhere in the machine; the three
    /// two-way forks are the pre-review decision, the risk-level judgment
    /// and the pre-operation test routing.
    ///
    /// # Examples
    ///
    /// ```
    /// use aigov::lifecycle::LifecycleState;
    ///
    /// assert_eq!(
    ///     LifecycleState::RiskPlan.next_states(),
    ///     &[LifecycleState::HighRiskReview, LifecycleState::NormalApproval],
    /// );
    /// ```
    pub fn next_states(self) -> &'static [LifecycleState] {
        use LifecycleState::*;

        match self {
            Draft => &[PlanningCompleted],
            PlanningCompleted => &[PreReview],
            PreReview => &[RevisionRequired, PreReviewApproved],
            RevisionRequired => &[PlanningCompleted],
            PreReviewApproved => &[RiskAssessment],
            RiskAssessment => &[RiskPlan],
            RiskPlan => &[HighRiskReview, NormalApproval],
            HighRiskReview => &[RiskPlanApproved],
            NormalApproval => &[RiskPlanApproved],
            RiskPlanApproved => &[DevelopmentRequested],
            DevelopmentRequested => &[InDevelopment],
            InDevelopment => &[PreOperationTest],
            PreOperationTest => &[ThirdPartyTest, ValidationChecked],
            ThirdPartyTest => &[ValidationChecked],
            ValidationChecked => &[OperationApprovalRequested],
            OperationApprovalRequested => &[DeploymentApproved],
            DeploymentApproved => &[Deployed],
            Deployed => &[Operating],
            Operating => &[Monitoring],
            Monitoring => &[ImprovementPlanned],
            ImprovementPlanned => &[Operating],
        }
    }

    /// Returns the states that may legally transition into this state.
    ///
    /// Empty exactly for the entry state `Draft`.
    pub fn prev_states(self) -> &'static [LifecycleState] {
        PREV.get(&self).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if this state may legally transition to `to`.
    pub fn can_transition_to(self, to: LifecycleState) -> bool {
        self.next_states().contains(&to)
    }
}

/// Returns true iff `from -> to` is a legal transition.
///
/// This is the sole gate a consumer should use before mutating a record's
/// state; the machine itself never performs the mutation.
///
/// # Examples
///
/// ```
/// use aigov::lifecycle::{can_transition, LifecycleState};
///
/// assert!(can_transition(LifecycleState::Monitoring, LifecycleState::ImprovementPlanned));
/// assert!(!can_transition(LifecycleState::Operating, LifecycleState::ImprovementPlanned));
/// ```
pub fn can_transition(from: LifecycleState, to: LifecycleState) -> bool {
    from.can_transition_to(to)
}

/// Returns the opaque display key for a transition's action label.
///
/// `Some` exactly for the legal transitions of the forward table; `None`
/// for every other pair.
pub fn transition_label_key(from: LifecycleState, to: LifecycleState) -> Option<&'static str> {
    use LifecycleState::*;

    let key = match (from, to) {
        (Draft, PlanningCompleted) => "lifecycle.transition.planning_completed",
        (PlanningCompleted, PreReview) => "lifecycle.transition.pre_review_request",
        (PreReview, RevisionRequired) => "lifecycle.transition.revision_required",
        (RevisionRequired, PlanningCompleted) => "lifecycle.transition.revision_done",
        (PreReview, PreReviewApproved) => "lifecycle.transition.pre_review_approved",
        (PreReviewApproved, RiskAssessment) => "lifecycle.transition.risk_assessment",
        (RiskAssessment, RiskPlan) => "lifecycle.transition.risk_plan",
        (RiskPlan, HighRiskReview) => "lifecycle.transition.high_risk",
        (RiskPlan, NormalApproval) => "lifecycle.transition.low_medium_risk",
        (HighRiskReview, RiskPlanApproved) => "lifecycle.transition.governance_approved",
        (NormalApproval, RiskPlanApproved) => "lifecycle.transition.internal_approved",
        (RiskPlanApproved, DevelopmentRequested) => "lifecycle.transition.dev_requested",
        (DevelopmentRequested, InDevelopment) => "lifecycle.transition.in_development",
        (InDevelopment, PreOperationTest) => "lifecycle.transition.pre_op_test",
        (PreOperationTest, ThirdPartyTest) => "lifecycle.transition.third_party",
        (PreOperationTest, ValidationChecked) => "lifecycle.transition.validation_checked",
        (ThirdPartyTest, ValidationChecked) => "lifecycle.transition.third_party_done",
        (ValidationChecked, OperationApprovalRequested) => {
            "lifecycle.transition.op_approval_requested"
        }
        (OperationApprovalRequested, DeploymentApproved) => {
            "lifecycle.transition.deployment_approved"
        }
        (DeploymentApproved, Deployed) => "lifecycle.transition.deployed",
        (Deployed, Operating) => "lifecycle.transition.operating",
        (Operating, Monitoring) => "lifecycle.transition.monitoring",
        (Monitoring, ImprovementPlanned) => "lifecycle.transition.improvement_planned",
        (ImprovementPlanned, Operating) => "lifecycle.transition.improvement_done",
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifecycleState::*;

    #[test]
    fn test_branch_points_in_declaration_order() {
        assert_eq!(PreReview.next_states(), &[RevisionRequired, PreReviewApproved]);
        assert_eq!(RiskPlan.next_states(), &[HighRiskReview, NormalApproval]);
        assert_eq!(PreOperationTest.next_states(), &[ThirdPartyTest, ValidationChecked]);
    }

    #[test]
    fn test_at_most_two_successors() {
        for state in LifecycleState::ALL {
            assert!(state.next_states().len() <= 2, "{} has too many successors", state);
        }
    }

    #[test]
    fn test_merge_points() {
        assert_eq!(RiskPlanApproved.prev_states(), &[HighRiskReview, NormalApproval]);
        assert_eq!(ValidationChecked.prev_states(), &[PreOperationTest, ThirdPartyTest]);
        assert_eq!(PlanningCompleted.prev_states(), &[Draft, RevisionRequired]);
        assert_eq!(Operating.prev_states(), &[Deployed, ImprovementPlanned]);
    }

    #[test]
    fn test_reverse_table_is_exact_transpose() {
        for from in LifecycleState::ALL {
            for to in LifecycleState::ALL {
                let forward = from.next_states().contains(&to);
                let backward = to.prev_states().contains(&from);
                assert_eq!(forward, backward, "asymmetry on {} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_draft_has_no_predecessors() {
        assert!(Draft.prev_states().is_empty());
        for state in LifecycleState::ALL {
            if state != Draft {
                assert!(!state.prev_states().is_empty(), "{} is orphaned", state);
            }
        }
    }

    #[test]
    fn test_operations_loop() {
        assert!(can_transition(Operating, Monitoring));
        assert!(can_transition(Monitoring, ImprovementPlanned));
        assert!(can_transition(ImprovementPlanned, Operating));
        // The shortcut is not legal; improvement is planned from monitoring
        assert!(!can_transition(Operating, ImprovementPlanned));
    }

    #[test]
    fn test_revision_loop() {
        assert!(can_transition(PreReview, RevisionRequired));
        assert!(can_transition(RevisionRequired, PlanningCompleted));
        assert!(can_transition(PlanningCompleted, PreReview));
    }

    #[test]
    fn test_label_keys_exactly_for_legal_transitions() {
        for from in LifecycleState::ALL {
            for to in LifecycleState::ALL {
                assert_eq!(
                    transition_label_key(from, to).is_some(),
                    can_transition(from, to),
                    "label/legality mismatch on {} -> {}",
                    from,
                    to
                );
            }
        }
    }

    #[test]
    fn test_no_terminal_state() {
        for state in LifecycleState::ALL {
            assert!(!state.next_states().is_empty(), "{} is terminal", state);
        }
    }
}
