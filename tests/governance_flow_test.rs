//! End-to-end checks of the governance engine's structural guarantees:
//! pipeline closure and path binding, lifecycle transition symmetry, legacy
//! migration behavior, and the transition-guarded record store.

use aigov::flow::{pipeline, Back, Forward, StageId};
use aigov::lifecycle::{can_transition, map_legacy_status, transition_label_key, LifecycleState};
use aigov::service::{InMemoryServiceStore, RiskLevel, ServiceId, ServiceRecord, StoreError};
use aigov::LegacyStatus;

#[test]
fn every_edge_references_a_defined_stage() {
    // Ids are a closed enum, so this is closure by construction; assert the
    // table agrees with the enum anyway.
    let flow = pipeline();
    assert_eq!(flow.len(), StageId::ALL.len());
    for stage in flow.stages() {
        match stage.forward() {
            Forward::Linear(next) => {
                assert_eq!(flow.stage(*next).id(), *next);
            }
            Forward::Branch(options) => {
                assert!(!options.is_empty());
                for option in options {
                    assert_eq!(flow.stage(option.target()).id(), option.target());
                }
            }
        }
        match stage.back() {
            Back::Entry => assert_eq!(stage.id(), StageId::RequestForm),
            Back::Single(prev) => {
                assert_eq!(flow.stage(*prev).id(), *prev);
            }
            Back::Merge(parents) => {
                assert!(!parents.is_empty());
                for parent in parents {
                    assert_eq!(flow.stage(*parent).id(), *parent);
                }
            }
        }
    }
}

#[test]
fn canonical_paths_are_unique_and_exact() {
    let flow = pipeline();
    let mut seen = std::collections::HashSet::new();
    for stage in flow.stages() {
        assert!(seen.insert(stage.path().to_string()));
    }

    // The exact strings are a routing compatibility contract.
    assert_eq!(flow.entry().path(), "/flow/request-form");
    assert_eq!(flow.dashboard().path(), "/dashboard");
    assert_eq!(
        flow.stage(StageId::ThirdPartyVerification).path(),
        "/flow/third-party-verification"
    );
}

#[test]
fn path_prefix_matching_requires_separator() {
    let flow = pipeline();
    assert_eq!(
        flow.stage_by_path("/flow/risk-assessment/sub-detail").unwrap().id(),
        StageId::RiskAssessment
    );
    assert!(flow.stage_by_path("/flow/risk-assessmentX").is_none());
    assert_eq!(
        flow.stage_by_path("/dashboard/widgets").unwrap().id(),
        StageId::Dashboard
    );
    // Absence is a result, the caller redirects to the entry stage.
    assert!(flow.stage_by_path("/flow/unknown-stage").is_none());
    assert!(flow.stage_by_id("unknown-stage").is_none());
}

#[test]
fn wizard_branches_carry_their_choices() {
    let flow = pipeline();

    let judge = flow.stage(StageId::RiskLevelJudge);
    match judge.forward() {
        Forward::Branch(options) => {
            let keys: Vec<&str> = options.iter().map(|o| o.key()).collect();
            assert_eq!(keys, vec!["low_medium", "high"]);
            assert_eq!(options[0].target(), StageId::RiskPlanApproval);
            assert_eq!(options[1].target(), StageId::GovernanceApproval);
        }
        Forward::Linear(_) => panic!("risk-level-judge must branch"),
    }

    // Both approval paths converge on the development request.
    match flow.stage(StageId::DevRequest).back() {
        Back::Merge(parents) => {
            assert_eq!(
                parents,
                &vec![StageId::RiskPlanApproval, StageId::GovernanceApproval]
            );
        }
        _ => panic!("dev-request must merge"),
    }
    assert_eq!(
        flow.previous_path(flow.stage(StageId::DevRequest)),
        Some("/flow/risk-plan-approval")
    );
}

#[test]
fn lifecycle_reverse_table_is_symmetric_over_all_pairs() {
    for from in LifecycleState::ALL {
        for to in LifecycleState::ALL {
            assert_eq!(
                from.next_states().contains(&to),
                to.prev_states().contains(&from),
                "asymmetry on {from} -> {to}",
            );
        }
    }
}

#[test]
fn lifecycle_forward_edges_stay_in_the_state_set() {
    // Membership is structural with a closed enum; assert the fan-out
    // bounds instead: at most two successors anywhere.
    for state in LifecycleState::ALL {
        assert!(state.next_states().len() <= 2);
        for next in state.next_states() {
            assert!(LifecycleState::ALL.contains(next));
        }
    }
}

#[test]
fn entry_and_operations_loop_behavior() {
    assert!(LifecycleState::Draft.prev_states().is_empty());
    assert!(can_transition(LifecycleState::Monitoring, LifecycleState::ImprovementPlanned));
    assert!(can_transition(LifecycleState::ImprovementPlanned, LifecycleState::Operating));
    assert!(!can_transition(LifecycleState::Operating, LifecycleState::ImprovementPlanned));
}

#[test]
fn risk_branch_converges() {
    assert_eq!(
        LifecycleState::RiskPlan.next_states(),
        &[LifecycleState::HighRiskReview, LifecycleState::NormalApproval]
    );
    assert_eq!(
        LifecycleState::RiskPlanApproved.prev_states(),
        &[LifecycleState::HighRiskReview, LifecycleState::NormalApproval]
    );
}

#[test]
fn legacy_mapping_is_deterministic() {
    assert_eq!(map_legacy_status("PLANNING"), LifecycleState::Draft);
    assert_eq!(map_legacy_status("DEVELOPING"), LifecycleState::InDevelopment);
    assert_eq!(
        map_legacy_status("EMERGENCY_STOP"),
        map_legacy_status("OPERATING")
    );
    assert_eq!(map_legacy_status("EMERGENCY_STOP"), LifecycleState::Operating);
    assert_eq!(map_legacy_status("definitely-not-a-status"), LifecycleState::Draft);
}

#[test]
fn transition_labels_cover_the_forward_table() {
    assert_eq!(
        transition_label_key(LifecycleState::Draft, LifecycleState::PlanningCompleted),
        Some("lifecycle.transition.planning_completed")
    );
    assert_eq!(
        transition_label_key(LifecycleState::Draft, LifecycleState::Deployed),
        None
    );
    for from in LifecycleState::ALL {
        for to in from.next_states() {
            assert!(transition_label_key(from, *to).is_some());
        }
    }
}

#[test]
fn tokens_round_trip_through_serde() {
    let id: StageId = serde_json::from_str("\"risk-assessment\"").unwrap();
    assert_eq!(id, StageId::RiskAssessment);
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"risk-assessment\"");

    let state: LifecycleState = serde_json::from_str("\"PreReviewApproved\"").unwrap();
    assert_eq!(state, LifecycleState::PreReviewApproved);

    let status: LegacyStatus = serde_json::from_str("\"EMERGENCY_STOP\"").unwrap();
    assert_eq!(status, LegacyStatus::EmergencyStop);

    let level: RiskLevel = serde_json::from_str("\"CRITICAL\"").unwrap();
    assert_eq!(serde_json::to_string(&level).unwrap(), "\"CRITICAL\"");
}

#[test]
fn store_guards_transitions_end_to_end() {
    let store = InMemoryServiceStore::new();
    store
        .insert(
            ServiceRecord::new("svc-004", "Diagnostic aid", RiskLevel::Critical, LegacyStatus::Planning)
                .with_owner("Medical AI"),
        )
        .unwrap();
    let id = ServiceId::new("svc-004");

    // Walk the happy path up to the pre-review fork.
    for next in [
        LifecycleState::PlanningCompleted,
        LifecycleState::PreReview,
        LifecycleState::PreReviewApproved,
        LifecycleState::RiskAssessment,
    ] {
        store.advance(&id, next).unwrap();
    }

    // Skipping ahead is rejected and leaves the record where it was.
    let err = store.advance(&id, LifecycleState::Deployed).unwrap_err();
    assert_eq!(
        err,
        StoreError::invalid_transition(LifecycleState::RiskAssessment, LifecycleState::Deployed)
    );
    assert_eq!(
        store.get(&id).unwrap().effective_state(),
        LifecycleState::RiskAssessment
    );
}

#[test]
fn wizard_progress_tracks_declaration_order() {
    let flow = pipeline();
    assert_eq!(flow.position(StageId::RequestForm), 0);
    assert_eq!(flow.progress_percent(StageId::RequestForm), 0);
    assert_eq!(flow.progress_percent(StageId::Improvement), 100);

    let mut last = 0;
    for id in StageId::ALL {
        let progress = flow.progress_percent(id);
        assert!(progress >= last, "progress regressed at {id}");
        last = progress;
    }
}

#[test]
fn dot_export_names_every_stage() {
    let dot = pipeline().to_dot();
    assert!(dot.starts_with("digraph"));
    for id in StageId::ALL {
        assert!(dot.contains(id.as_str()), "missing {id}");
    }
}
