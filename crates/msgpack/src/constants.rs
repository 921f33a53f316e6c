//! MessagePack marker constants.

/// One-byte MessagePack markers that carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MsgPackMarker {
    Nil = 0xc0,
    /// Never used by the format; decoding it is an error.
    Reserved = 0xc1,
    False = 0xc2,
    True = 0xc3,
}

/// Largest value a positive fixint can carry.
pub const POS_FIXINT_MAX: u64 = 0x7f;
/// Smallest value a negative fixint can carry.
pub const NEG_FIXINT_MIN: i64 = -0x20;
/// Longest string (in UTF-8 bytes) that fits a fixstr header.
pub const FIXSTR_MAX_LEN: usize = 0x1f;
/// Most elements a fixarray header can announce.
pub const FIXARRAY_MAX_LEN: usize = 0x0f;
/// Most pairs a fixmap header can announce.
pub const FIXMAP_MAX_LEN: usize = 0x0f;
/// Ceiling for every length field on the wire.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Nesting limit applied by [`DecodeOptions::default`](crate::DecodeOptions).
pub const DEFAULT_MAX_DEPTH: usize = 512;
