//! Convenience MessagePack helpers.

use crate::Value;

use super::{DecodeOptions, MsgPackDecoder, MsgPackEncoder, MsgPackError};

/// Encodes `value` with a fresh encoder.
///
/// # Panics
///
/// If a length inside `value` exceeds `u32::MAX`.
pub fn encode(value: &Value) -> Vec<u8> {
    MsgPackEncoder::new().encode(value)
}

/// Decodes the first value of `input` with default options, returning it
/// together with the unread remainder.
pub fn decode(input: &[u8]) -> Result<(Value, &[u8]), MsgPackError> {
    MsgPackDecoder::new().decode(input)
}

/// Like [`decode`], with caller-supplied options.
pub fn decode_with(
    input: &[u8],
    options: DecodeOptions,
) -> Result<(Value, &[u8]), MsgPackError> {
    MsgPackDecoder::with_options(options).decode(input)
}

/// Decodes the first value of `input` and ignores whatever follows it.
pub fn decode_first(input: &[u8], options: DecodeOptions) -> Result<Value, MsgPackError> {
    decode_with(input, options).map(|(value, _)| value)
}

/// Decodes every value in `input` until it is exhausted.
///
/// Fails as a whole if any value fails; a trailing partial message yields
/// [`MsgPackError::InsufficientData`].
pub fn decode_all(input: &[u8], options: DecodeOptions) -> Result<Vec<Value>, MsgPackError> {
    let decoder = MsgPackDecoder::with_options(options);
    let mut values = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let (value, remainder) = decoder.decode(rest)?;
        values.push(value);
        rest = remainder;
    }
    Ok(values)
}
