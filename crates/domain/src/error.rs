// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during status resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Raw status value matched neither the canonical set nor the alias table.
    ///
    /// This is a data/integration error (e.g., a backend status value the
    /// portal has not been taught about yet). It must reach the caller;
    /// only the display boundary may decide to fall back to a safe default.
    UnknownStatus {
        /// The unrecognized raw value.
        status: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStatus { status } => {
                write!(f, "Unknown service request status '{status}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
