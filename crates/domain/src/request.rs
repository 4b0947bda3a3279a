// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partial service request records as supplied by the remote API.

use crate::status::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// Read-only projection of a service request, as far as the workflow
/// projector needs it.
///
/// The full request entity (audit history, customer data, document
/// contents) is owned by the remote service; this type carries only the
/// milestone evidence fields. All evidence fields are optional and absent
/// fields simply mean "no evidence".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequestSummary {
    /// Canonical lifecycle status.
    pub status: Status,
    /// Payment identifier, present once a payment has been taken.
    #[serde(default)]
    pub payment_id: Option<String>,
    /// When the customer finished the questionnaire.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub form_completed_at: Option<OffsetDateTime>,
    /// Raw questionnaire answers; shape is owned by the form service.
    #[serde(default)]
    pub form_data: Option<Value>,
    /// When the customer finished uploading documents.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub documents_uploaded_at: Option<OffsetDateTime>,
    /// Identifiers of uploaded documents.
    #[serde(default)]
    pub documents: Option<Vec<String>>,
}

impl ServiceRequestSummary {
    /// Creates a summary carrying only a status, with no milestone evidence.
    #[must_use]
    pub const fn from_status(status: Status) -> Self {
        Self {
            status,
            payment_id: None,
            form_completed_at: None,
            form_data: None,
            documents_uploaded_at: None,
            documents: None,
        }
    }

    /// Returns true if the record carries direct payment evidence.
    #[must_use]
    pub const fn has_payment_evidence(&self) -> bool {
        self.payment_id.is_some()
    }

    /// Returns true if the record shows the questionnaire was completed.
    ///
    /// A completion timestamp or non-empty form data counts; an explicit
    /// `null` or an empty object does not.
    #[must_use]
    pub fn has_questionnaire_evidence(&self) -> bool {
        self.form_completed_at.is_some()
            || self.form_data.as_ref().is_some_and(|data| match data {
                Value::Null => false,
                Value::Object(fields) => !fields.is_empty(),
                _ => true,
            })
    }

    /// Returns true if the record shows documents were uploaded.
    #[must_use]
    pub fn has_documents_evidence(&self) -> bool {
        self.documents_uploaded_at.is_some()
            || self.documents.as_ref().is_some_and(|docs| !docs.is_empty())
    }
}
