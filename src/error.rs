// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for offset arithmetic.

/// Error type for all fallible operations in the calstep crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OffsetError {
    /// Arithmetic was attempted on a [`DateOffset`](crate::DateOffset) whose
    /// configuration selected no duration key, so no concrete offset exists.
    #[error("offset is unconfigured: no duration key was selected")]
    Unconfigured,

    /// The host point-in-time type cannot represent the computed result
    /// (typically a year outside its supported range).
    #[error("computed date is out of range for the host time type")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            OffsetError::Unconfigured.to_string(),
            "offset is unconfigured: no duration key was selected"
        );
        assert_eq!(
            OffsetError::OutOfRange.to_string(),
            "computed date is out of range for the host time type"
        );
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<OffsetError>();
    }
}
