//! MessagePack decoder error type.

use msgpack_value_buffers::BufferError;
use thiserror::Error;

/// Error type for MessagePack decoding.
///
/// Encoding has no error path: every [`Value`](crate::Value) within the
/// 32-bit length ceiling has a wire form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MsgPackError {
    /// The input ended before a length field or payload was complete.
    #[error("insufficient data")]
    InsufficientData,
    /// Reserved tag byte or a payload that failed UTF-8 validation.
    #[error("invalid data")]
    InvalidData,
    /// Arrays and maps nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),
}

impl MsgPackError {
    /// `true` when more input could turn this failure into a success.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, MsgPackError::InsufficientData)
    }
}

impl From<BufferError> for MsgPackError {
    fn from(_: BufferError) -> Self {
        MsgPackError::InsufficientData
    }
}
