// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service request status taxonomy and alias reconciliation.
//!
//! Canonical statuses are the backend vocabulary. The alias table carries
//! the historical frontend vocabulary; every alias resolves to exactly one
//! canonical status (total, not injective). Resolution never falls back to
//! a default: an unrecognized value is surfaced to the caller as an error.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Canonical lifecycle states for a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Request created but not yet submitted by the customer.
    Draft,
    /// Submitted and queued for operator review.
    Submitted,
    /// Waiting on the customer's payment.
    PaymentPending,
    /// Waiting on the customer's questionnaire.
    AwaitingForm,
    /// Waiting on the customer's supporting documents.
    AwaitingDocuments,
    /// Under review by an operator.
    InReview,
    /// Review found required documents absent or unusable.
    MissingDocuments,
    /// All work finished successfully.
    Completed,
    /// Closed administratively (includes legacy cancellations).
    Closed,
    /// Reviewed and rejected.
    Rejected,
}

/// Legacy frontend vocabulary mapped onto canonical statuses.
///
/// The mapping collapses several historical names onto fewer canonical
/// values. No alias is ambiguous; several aliases may share a target.
pub const STATUS_ALIASES: &[(&str, Status)] = &[
    ("new", Status::Draft),
    ("awaiting_payment", Status::PaymentPending),
    ("pending_payment", Status::PaymentPending),
    ("awaiting_questionnaire", Status::AwaitingForm),
    ("questionnaire_pending", Status::AwaitingForm),
    ("documents_required", Status::AwaitingDocuments),
    ("documents_incomplete", Status::MissingDocuments),
    ("awaiting_review", Status::InReview),
    ("under_review", Status::InReview),
    ("processing", Status::InReview),
    ("cancelled", Status::Closed),
    ("canceled", Status::Closed),
    ("approved", Status::Completed),
    ("done", Status::Completed),
    ("declined", Status::Rejected),
];

impl Status {
    /// Every canonical status, for exhaustive iteration in tests and
    /// boundary code.
    pub const ALL: &'static [Self] = &[
        Self::Draft,
        Self::Submitted,
        Self::PaymentPending,
        Self::AwaitingForm,
        Self::AwaitingDocuments,
        Self::InReview,
        Self::MissingDocuments,
        Self::Completed,
        Self::Closed,
        Self::Rejected,
    ];

    /// Returns the string representation of the status.
    ///
    /// This is the canonical backend/API serialization form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::PaymentPending => "payment_pending",
            Self::AwaitingForm => "awaiting_form",
            Self::AwaitingDocuments => "awaiting_documents",
            Self::InReview => "in_review",
            Self::MissingDocuments => "missing_documents",
            Self::Completed => "completed",
            Self::Closed => "closed",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from its canonical string representation.
    ///
    /// Aliases are not accepted here; use [`Status::resolve`] for raw
    /// values that may carry the legacy vocabulary.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "submitted" => Ok(Self::Submitted),
            "payment_pending" => Ok(Self::PaymentPending),
            "awaiting_form" => Ok(Self::AwaitingForm),
            "awaiting_documents" => Ok(Self::AwaitingDocuments),
            "in_review" => Ok(Self::InReview),
            "missing_documents" => Ok(Self::MissingDocuments),
            "completed" => Ok(Self::Completed),
            "closed" => Ok(Self::Closed),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::UnknownStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Resolves a raw value to its canonical status.
    ///
    /// Canonical names are tried first, then the alias table. Resolving a
    /// canonical name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownStatus` if the value matches neither
    /// table. The resolver never substitutes a default.
    pub fn resolve(raw: &str) -> Result<Self, DomainError> {
        if let Ok(status) = Self::parse_str(raw) {
            return Ok(status);
        }
        STATUS_ALIASES
            .iter()
            .find(|(alias, _)| *alias == raw)
            .map(|&(_, status)| status)
            .ok_or_else(|| DomainError::UnknownStatus {
                status: raw.to_string(),
            })
    }

    /// Returns true if the request has reached a final state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Closed | Self::Rejected)
    }

    /// Returns true if the request is finished (completed or closed).
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed | Self::Closed)
    }

    /// Returns true if the request is sitting with a human reviewer.
    #[must_use]
    pub const fn is_in_review(&self) -> bool {
        matches!(self, Self::Submitted | Self::InReview)
    }
}

impl FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
