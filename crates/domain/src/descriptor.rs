// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display descriptors for canonical statuses.

use crate::status::Status;
use serde::Serialize;

/// Display metadata for a single canonical status.
///
/// Consumed by badge/stepper rendering outside this crate. The color class
/// is a semantic token, not a concrete color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDescriptor {
    /// Human-readable label.
    pub label: &'static str,
    /// Semantic color class for the status badge.
    pub color_class: &'static str,
    /// Whether the status denotes a successful terminal state.
    pub is_terminal_success: bool,
    /// Whether the status denotes a failed terminal state.
    pub is_terminal_failure: bool,
}

impl Status {
    /// Returns the display descriptor for this status.
    ///
    /// Every canonical status has exactly one descriptor; the exhaustive
    /// match makes a missing entry a compile error.
    #[must_use]
    pub const fn describe(&self) -> StatusDescriptor {
        match self {
            Self::Draft => StatusDescriptor {
                label: "Draft",
                color_class: "status-neutral",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::Submitted => StatusDescriptor {
                label: "Submitted",
                color_class: "status-info",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::PaymentPending => StatusDescriptor {
                label: "Payment Pending",
                color_class: "status-warning",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::AwaitingForm => StatusDescriptor {
                label: "Awaiting Questionnaire",
                color_class: "status-warning",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::AwaitingDocuments => StatusDescriptor {
                label: "Awaiting Documents",
                color_class: "status-warning",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::InReview => StatusDescriptor {
                label: "In Review",
                color_class: "status-info",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::MissingDocuments => StatusDescriptor {
                label: "Missing Documents",
                color_class: "status-danger",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::Completed => StatusDescriptor {
                label: "Completed",
                color_class: "status-success",
                is_terminal_success: true,
                is_terminal_failure: false,
            },
            // Closed collapses administrative closure and legacy
            // cancellations; the badge renders neutrally.
            Self::Closed => StatusDescriptor {
                label: "Closed",
                color_class: "status-neutral",
                is_terminal_success: false,
                is_terminal_failure: false,
            },
            Self::Rejected => StatusDescriptor {
                label: "Rejected",
                color_class: "status-danger",
                is_terminal_success: false,
                is_terminal_failure: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_is_total_with_nonempty_labels() {
        for status in Status::ALL {
            let descriptor = status.describe();
            assert!(!descriptor.label.is_empty(), "{status} has an empty label");
            assert!(
                !descriptor.color_class.is_empty(),
                "{status} has an empty color class"
            );
        }
    }

    #[test]
    fn test_terminal_flags_are_mutually_exclusive() {
        for status in Status::ALL {
            let descriptor = status.describe();
            assert!(
                !(descriptor.is_terminal_success && descriptor.is_terminal_failure),
                "{status} claims both terminal success and terminal failure"
            );
        }
    }

    #[test]
    fn test_terminal_descriptor_flags() {
        assert!(Status::Completed.describe().is_terminal_success);
        assert!(Status::Rejected.describe().is_terminal_failure);

        let closed = Status::Closed.describe();
        assert!(!closed.is_terminal_success);
        assert!(!closed.is_terminal_failure);
    }

    #[test]
    fn test_nonterminal_statuses_carry_no_terminal_flags() {
        for status in Status::ALL {
            if status.is_terminal() {
                continue;
            }
            let descriptor = status.describe();
            assert!(!descriptor.is_terminal_success, "{status}");
            assert!(!descriptor.is_terminal_failure, "{status}");
        }
    }
}
