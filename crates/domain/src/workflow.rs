// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Workflow projection for service requests.
//!
//! This module derives a renderable five-step progress value from either a
//! bare status or a partial request record. Progress is **computed**, not
//! stored; every call is a pure function of its input.
//!
//! ## Invariants
//!
//! - Every canonical status maps to exactly one current step
//! - `completed_steps` is always the length-`current_step_index` prefix of
//!   [`STEP_SEQUENCE`]
//! - The status-only path yields percentages in {0, 25, 50, 75, 100}
//! - Record evidence wins over status-implied milestones
//!
//! ## Usage
//!
//! The output drives the portal's steppers, progress dots, and milestone
//! badges. The projector makes no assumption about how it is displayed.

use crate::request::ServiceRequestSummary;
use crate::status::Status;
use serde::{Deserialize, Serialize};

/// Coarse-grained stages of the request pipeline, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStep {
    /// Payment taken.
    Payment,
    /// Questionnaire filled in.
    Questionnaire,
    /// Supporting documents uploaded.
    Documents,
    /// Human review.
    Review,
    /// Request finished.
    Completed,
}

/// The five workflow steps in pipeline order.
pub const STEP_SEQUENCE: [WorkflowStep; 5] = [
    WorkflowStep::Payment,
    WorkflowStep::Questionnaire,
    WorkflowStep::Documents,
    WorkflowStep::Review,
    WorkflowStep::Completed,
];

impl WorkflowStep {
    /// Returns this step's position in [`STEP_SEQUENCE`] (0-based).
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::Payment => 0,
            Self::Questionnaire => 1,
            Self::Documents => 2,
            Self::Review => 3,
            Self::Completed => 4,
        }
    }

    /// Human-readable step label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::Questionnaire => "Questionnaire",
            Self::Documents => "Documents",
            Self::Review => "Review",
            Self::Completed => "Completed",
        }
    }

    const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Payment,
            1 => Self::Questionnaire,
            2 => Self::Documents,
            3 => Self::Review,
            _ => Self::Completed,
        }
    }
}

impl std::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Renderable workflow position for a single request.
///
/// The value is complete and internally consistent on every return; there
/// is no partially-populated variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct WorkflowProgress {
    /// The step the request currently sits on.
    pub current_step: WorkflowStep,
    /// 0-based index of `current_step` (0–4).
    pub current_step_index: u8,
    /// Strict prefix of [`STEP_SEQUENCE`] of length `current_step_index`.
    pub completed_steps: Vec<WorkflowStep>,
    /// Payment milestone reached.
    pub payment_completed: bool,
    /// Questionnaire milestone reached.
    pub questionnaire_completed: bool,
    /// Documents milestone reached.
    pub documents_uploaded: bool,
    /// Request is sitting with a human reviewer.
    pub is_in_review: bool,
    /// Request is finished (completed or closed).
    pub is_completed: bool,
    /// Request was rejected.
    pub is_rejected: bool,
    /// Linear 0–100 encoding of the step position.
    pub progress_percentage: f64,
}

/// Input accepted by [`project`]: a bare status or a partial record.
#[derive(Debug, Clone, Copy)]
pub enum ProjectionInput<'a> {
    /// Only the raw status is known (e.g., a compact list row).
    Status(Status),
    /// A partial record with milestone evidence is available.
    Request(&'a ServiceRequestSummary),
}

impl From<Status> for ProjectionInput<'_> {
    fn from(status: Status) -> Self {
        Self::Status(status)
    }
}

impl<'a> From<&'a ServiceRequestSummary> for ProjectionInput<'a> {
    fn from(summary: &'a ServiceRequestSummary) -> Self {
        Self::Request(summary)
    }
}

/// Milestone booleans in pipeline order.
struct Milestones {
    payment_completed: bool,
    questionnaire_completed: bool,
    documents_uploaded: bool,
}

/// Lifecycle flags derived from the canonical status.
struct LifecycleFlags {
    is_in_review: bool,
    is_completed: bool,
    is_rejected: bool,
}

impl LifecycleFlags {
    const fn for_status(status: Status) -> Self {
        Self {
            is_in_review: status.is_in_review(),
            is_completed: status.is_completed(),
            is_rejected: matches!(status, Status::Rejected),
        }
    }
}

/// Projects workflow progress from either input shape.
///
/// Dispatches to [`project_status`] or [`project_request`]; the two paths
/// legitimately use different evidence but agree on step index and
/// terminal flags for consistent inputs.
#[must_use]
pub fn project(input: ProjectionInput<'_>) -> WorkflowProgress {
    match input {
        ProjectionInput::Status(status) => project_status(status),
        ProjectionInput::Request(summary) => project_request(summary),
    }
}

/// Projects workflow progress from a bare canonical status.
///
/// Milestones are implied by the status via a fixed table; used where only
/// the status string is known.
#[must_use]
pub fn project_status(status: Status) -> WorkflowProgress {
    let (index, milestones) = status_milestones(status);
    build_progress(index, milestones, LifecycleFlags::for_status(status))
}

/// Projects workflow progress from a partial request record.
///
/// Milestones are evidence-driven: a payment identifier, questionnaire
/// timestamp/data, or document uploads on the record override whatever the
/// status alone would imply. The projector does not validate evidence
/// consistency; logically impossible combinations project as-is.
#[must_use]
pub fn project_request(summary: &ServiceRequestSummary) -> WorkflowProgress {
    let flags = LifecycleFlags::for_status(summary.status);
    let milestones = Milestones {
        payment_completed: summary.has_payment_evidence()
            || !matches!(summary.status, Status::PaymentPending),
        questionnaire_completed: summary.has_questionnaire_evidence(),
        documents_uploaded: summary.has_documents_evidence(),
    };

    // Walk the milestones in pipeline order; stop at the first gap.
    let index = if !milestones.payment_completed {
        0
    } else if !milestones.questionnaire_completed {
        1
    } else if !milestones.documents_uploaded {
        2
    } else if flags.is_completed {
        4
    } else {
        3
    };

    build_progress(index, milestones, flags)
}

/// Fixed status → (step index, milestones) table for the status-only path.
const fn status_milestones(status: Status) -> (u8, Milestones) {
    match status {
        Status::Draft | Status::PaymentPending => (
            0,
            Milestones {
                payment_completed: false,
                questionnaire_completed: false,
                documents_uploaded: false,
            },
        ),
        Status::AwaitingForm => (
            1,
            Milestones {
                payment_completed: true,
                questionnaire_completed: false,
                documents_uploaded: false,
            },
        ),
        Status::AwaitingDocuments | Status::MissingDocuments => (
            2,
            Milestones {
                payment_completed: true,
                questionnaire_completed: true,
                documents_uploaded: false,
            },
        ),
        Status::Submitted | Status::InReview | Status::Rejected => (
            3,
            Milestones {
                payment_completed: true,
                questionnaire_completed: true,
                documents_uploaded: true,
            },
        ),
        Status::Completed | Status::Closed => (
            4,
            Milestones {
                payment_completed: true,
                questionnaire_completed: true,
                documents_uploaded: true,
            },
        ),
    }
}

fn build_progress(index: u8, milestones: Milestones, flags: LifecycleFlags) -> WorkflowProgress {
    let completed_steps: Vec<WorkflowStep> = STEP_SEQUENCE
        .iter()
        .copied()
        .take(usize::from(index))
        .collect();

    WorkflowProgress {
        current_step: WorkflowStep::from_index(index),
        current_step_index: index,
        completed_steps,
        payment_completed: milestones.payment_completed,
        questionnaire_completed: milestones.questionnaire_completed,
        documents_uploaded: milestones.documents_uploaded,
        is_in_review: flags.is_in_review,
        is_completed: flags.is_completed,
        is_rejected: flags.is_rejected,
        progress_percentage: f64::from(index) / 4.0 * 100.0,
    }
}
