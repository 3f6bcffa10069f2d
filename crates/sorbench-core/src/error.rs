// Dweve SORBench - SOR benchmark result aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the run identity model.

use thiserror::Error;

/// Errors raised while building run identities from external input.
///
/// # Examples
///
/// ```
/// use sorbench_core::CoreError;
///
/// let err = CoreError::UnknownMethod(9);
/// assert_eq!(err.to_string(), "Unknown method discriminant: 9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A method discriminant outside `0..=4`.
    #[error("Unknown method discriminant: {0}")]
    UnknownMethod(u8),

    /// An array size token that is not `<I>_<J>_<K>`.
    #[error("Invalid array size '{value}': {reason}")]
    InvalidArraySize {
        /// The rejected token.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn invalid_size(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArraySize {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_display() {
        let err = CoreError::invalid_size("8_8", "expected three components");
        assert_eq!(
            err.to_string(),
            "Invalid array size '8_8': expected three components"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CoreError::UnknownMethod(7), CoreError::UnknownMethod(7));
        assert_ne!(CoreError::UnknownMethod(7), CoreError::UnknownMethod(8));
    }
}
