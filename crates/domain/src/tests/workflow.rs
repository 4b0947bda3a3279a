// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-path consistency tests between the status-only and record-based
//! projections.

use crate::{
    ServiceRequestSummary, Status, WorkflowStep, project, project_request, project_status,
};
use serde_json::json;
use time::OffsetDateTime;

/// A record whose evidence fields are fully consistent with its status.
fn fully_evidenced(status: Status) -> ServiceRequestSummary {
    ServiceRequestSummary {
        payment_id: Some(String::from("pay_123")),
        form_completed_at: Some(OffsetDateTime::UNIX_EPOCH),
        form_data: Some(json!({"accepted": true})),
        documents_uploaded_at: Some(OffsetDateTime::UNIX_EPOCH),
        documents: Some(vec![String::from("doc_1"), String::from("doc_2")]),
        ..ServiceRequestSummary::from_status(status)
    }
}

#[test]
fn test_completed_record_agrees_with_status_projection() {
    let summary = fully_evidenced(Status::Completed);

    let from_record = project_request(&summary);
    let from_status = project_status(summary.status);

    assert_eq!(
        from_record.current_step_index,
        from_status.current_step_index
    );
    assert_eq!(from_record.is_completed, from_status.is_completed);
    assert_eq!(from_record.is_rejected, from_status.is_rejected);
    assert_eq!(from_record.current_step, WorkflowStep::Completed);
}

#[test]
fn test_terminal_records_agree_with_status_projection() {
    for status in [Status::Completed, Status::Closed, Status::Rejected] {
        let summary = fully_evidenced(status);

        let from_record = project_request(&summary);
        let from_status = project_status(status);

        assert_eq!(
            from_record.current_step_index, from_status.current_step_index,
            "{status}"
        );
        assert_eq!(from_record.is_completed, from_status.is_completed, "{status}");
        assert_eq!(from_record.is_rejected, from_status.is_rejected, "{status}");
    }
}

#[test]
fn test_record_prefix_invariant_holds_for_all_statuses() {
    for status in Status::ALL {
        let bare = ServiceRequestSummary::from_status(*status);
        let evidenced = fully_evidenced(*status);

        for progress in [project_request(&bare), project_request(&evidenced)] {
            assert_eq!(
                progress.completed_steps.len(),
                usize::from(progress.current_step_index),
                "{status}"
            );
            for (position, step) in progress.completed_steps.iter().enumerate() {
                assert_eq!(usize::from(step.index()), position, "{status}");
            }
        }
    }
}

#[test]
fn test_record_percentages_stay_in_bounds() {
    for status in Status::ALL {
        let summary = fully_evidenced(*status);
        let progress = project_request(&summary);

        assert!(progress.progress_percentage >= 0.0, "{status}");
        assert!(progress.progress_percentage <= 100.0, "{status}");
    }
}

#[test]
fn test_evidence_advances_a_stalled_status() {
    // The list view would show this request stuck at the payment step;
    // the record view sees the payment went through.
    let summary = ServiceRequestSummary {
        payment_id: Some(String::from("pay_456")),
        ..ServiceRequestSummary::from_status(Status::PaymentPending)
    };

    let from_status = project_status(summary.status);
    let from_record = project_request(&summary);

    assert_eq!(from_status.current_step_index, 0);
    assert!(from_record.current_step_index >= 1);
    assert!(from_record.payment_completed);
}

#[test]
fn test_entry_point_matches_both_paths_for_all_statuses() {
    for status in Status::ALL {
        let summary = fully_evidenced(*status);

        assert_eq!(project((*status).into()), project_status(*status));
        assert_eq!(project((&summary).into()), project_request(&summary));
    }
}
