//! Stage pipeline for the AI service approval flow.
//!
//! This module is the single source of truth for wizard navigation: which
//! stage a route belongs to, what comes next (one successor, or a set of
//! branch choices selected by an external risk judgment), and what came
//! before (one predecessor, or the first declared parent of a merge point).
//!
//! # Design
//!
//! The pipeline is a fixed table of 23 stages built once per process and
//! never mutated. This module hides the table representation and exposes
//! only pure queries: [`Pipeline::stage_by_path`], [`Pipeline::stage_by_id`],
//! [`Pipeline::previous_path`] and friends. Absence is a first-class result
//! (`Option`), never a panic: user-supplied paths and id strings may simply
//! not name a stage.
//!
//! Forward and backward edges are sum types ([`Forward`], [`Back`]) rather
//! than optional fields, so "a stage cannot both be linear and branch" is a
//! type-level invariant instead of a runtime assumption.

mod error;
mod pipeline;
mod stage;
mod stage_id;

pub use error::{FlowError, FlowResult};
pub use pipeline::{pipeline, Pipeline};
pub use stage::{Back, BranchOption, Forward, Stage};
pub use stage_id::StageId;
