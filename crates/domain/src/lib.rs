// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod descriptor;
mod error;
mod request;
mod status;
mod workflow;

#[cfg(test)]
mod tests;

pub use descriptor::StatusDescriptor;
pub use error::DomainError;
pub use request::ServiceRequestSummary;
pub use status::{STATUS_ALIASES, Status};
pub use workflow::{
    ProjectionInput, STEP_SEQUENCE, WorkflowProgress, WorkflowStep, project, project_request,
    project_status,
};
