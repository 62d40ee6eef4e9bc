//! Service record types.

use crate::lifecycle::{LegacyStatus, LifecycleState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a service record.
///
/// Ids are caller-supplied human-readable slugs (`"svc-001"`); the store
/// imposes no format beyond uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a new service id from a slug.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ServiceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Assessed risk level of an AI service.
///
/// Serialized as the SCREAMING tokens of the assessment records
/// (`"LOW"`, ..., `"CRITICAL"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Returns the opaque display key for this level's badge label.
    pub fn label_key(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk.low",
            RiskLevel::Medium => "risk.medium",
            RiskLevel::High => "risk.high",
            RiskLevel::Critical => "risk.critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        };
        f.write_str(token)
    }
}

/// One AI service tracked through the governance lifecycle.
///
/// A record owns exactly one current governance status. Newer records carry
/// an explicit [`LifecycleState`]; records predating the fine-grained
/// lifecycle only carry the coarse [`LegacyStatus`], and
/// [`ServiceRecord::effective_state`] bridges the two for display and
/// transition checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Unique service id
    pub id: ServiceId,
    /// Human-readable service name
    pub name: String,
    /// Business category slug
    pub category: String,
    /// Free-form description
    pub description: String,
    /// Assessed risk level
    pub risk_level: RiskLevel,
    /// Coarse legacy status, kept during the migration period
    pub status: LegacyStatus,
    /// Fine-grained lifecycle state, when the record has been migrated
    pub lifecycle_state: Option<LifecycleState>,
    /// Governance compliance rate in percent
    pub compliance_rate: u8,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Owning team or person
    pub owner: String,
}

impl ServiceRecord {
    /// Creates a new record with empty descriptive fields.
    pub fn new(
        id: impl Into<ServiceId>,
        name: impl Into<String>,
        risk_level: RiskLevel,
        status: LegacyStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            description: String::new(),
            risk_level,
            status,
            lifecycle_state: None,
            compliance_rate: 0,
            updated_at: Utc::now(),
            owner: String::new(),
        }
    }

    /// Sets the explicit lifecycle state.
    pub fn with_lifecycle_state(mut self, state: LifecycleState) -> Self {
        self.lifecycle_state = Some(state);
        self
    }

    /// Sets the owning team or person.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Sets the business category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns the governance state this record is effectively in.
    ///
    /// Prefers the explicit lifecycle state; falls back through the lossy
    /// legacy mapping for unmigrated records.
    pub fn effective_state(&self) -> LifecycleState {
        self.lifecycle_state
            .unwrap_or_else(|| self.status.to_lifecycle())
    }
}
