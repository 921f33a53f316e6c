//! `MsgPackDecoder` — MessagePack bytes to [`Value`].
//!
//! Decoding is a pure function of the input: the decoder reads exactly one
//! value and hands back the unread suffix, so a buffer holding several
//! concatenated messages can be drained with repeated calls.

use msgpack_value_buffers::Reader;
use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_MAX_DEPTH;
use super::error::MsgPackError;
use crate::value::{Map, Value};

/// Caller-supplied decode settings.
///
/// Deserializes from any serde format with missing fields taking their
/// defaults, so it can sit inside a host application's config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Decode every str-family payload as [`Value::Binary`] instead of
    /// [`Value::String`], for peers that predate the bin types.
    pub compatibility: bool,
    /// Deepest array/map nesting accepted. A scalar has depth 0, `[1]` has
    /// depth 1.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            compatibility: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compatibility(mut self, compatibility: bool) -> Self {
        self.compatibility = compatibility;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Stateless MessagePack decoder; safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct MsgPackDecoder {
    options: DecodeOptions,
}

impl MsgPackDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decodes one value from the front of `input`.
    ///
    /// Returns the value and the bytes that follow it. On failure nothing is
    /// returned besides the error.
    pub fn decode<'a>(&self, input: &'a [u8]) -> Result<(Value, &'a [u8]), MsgPackError> {
        let mut reader = Reader::new(input);
        let value = self.read_any(&mut reader, 0)?;
        Ok((value, reader.remainder()))
    }

    /// Reads one value at the reader's cursor. `depth` counts the containers
    /// that enclose it.
    pub fn read_any(&self, reader: &mut Reader<'_>, depth: usize) -> Result<Value, MsgPackError> {
        let byte = reader.u8()?;
        match byte {
            // positive fixint
            0x00..=0x7f => Ok(Value::UInt(byte as u64)),
            // fixmap
            0x80..=0x8f => self.read_map(reader, (byte & 0x0f) as usize, depth),
            // fixarray
            0x90..=0x9f => self.read_arr(reader, (byte & 0x0f) as usize, depth),
            // fixstr
            0xa0..=0xbf => self.read_str(reader, (byte & 0x1f) as usize),
            0xc0 => Ok(Value::Nil),
            0xc1 => Err(MsgPackError::InvalidData),
            0xc2 => Ok(Value::Bool(false)),
            0xc3 => Ok(Value::Bool(true)),
            // bin8, bin16, bin32
            0xc4..=0xc6 => {
                let n = read_len(reader, 1 << (byte - 0xc4))?;
                Ok(Value::Binary(reader.buf(n)?.to_vec()))
            }
            // ext8, ext16, ext32
            0xc7..=0xc9 => {
                let n = read_len(reader, 1 << (byte - 0xc7))?;
                read_ext(reader, n)
            }
            0xca => Ok(Value::Float(reader.f32()?)),
            0xcb => Ok(Value::Double(reader.f64()?)),
            // uint8, uint16, uint32, uint64
            0xcc..=0xcf => Ok(Value::UInt(reader.uint_be(1 << (byte - 0xcc))?)),
            // int8, int16, int32, int64
            0xd0 => Ok(Value::Int(reader.i8()? as i64)),
            0xd1 => Ok(Value::Int(reader.i16()? as i64)),
            0xd2 => Ok(Value::Int(reader.i32()? as i64)),
            0xd3 => Ok(Value::Int(reader.i64()?)),
            // fixext1, fixext2, fixext4, fixext8, fixext16
            0xd4..=0xd8 => read_ext(reader, 1 << (byte - 0xd4)),
            // str8, str16, str32
            0xd9..=0xdb => {
                let n = read_len(reader, 1 << (byte - 0xd9))?;
                self.read_str(reader, n)
            }
            // array16, array32
            0xdc..=0xdd => {
                let n = read_len(reader, 2 << (byte - 0xdc))?;
                self.read_arr(reader, n, depth)
            }
            // map16, map32
            0xde..=0xdf => {
                let n = read_len(reader, 2 << (byte - 0xde))?;
                self.read_map(reader, n, depth)
            }
            // negative fixint: 0xe0..0xff -> -32..-1
            0xe0..=0xff => Ok(Value::Int(byte as i8 as i64)),
        }
    }

    /// Depth of a container opened inside `depth` enclosing containers.
    fn enter(&self, depth: usize) -> Result<usize, MsgPackError> {
        let depth = depth + 1;
        if depth > self.options.max_depth {
            return Err(MsgPackError::DepthLimitExceeded(self.options.max_depth));
        }
        Ok(depth)
    }

    fn read_arr(
        &self,
        reader: &mut Reader<'_>,
        size: usize,
        depth: usize,
    ) -> Result<Value, MsgPackError> {
        let depth = self.enter(depth)?;
        // Every element takes at least one byte, so a declared count larger
        // than the remaining input never gets to allocate.
        let mut arr = Vec::with_capacity(size.min(reader.size()));
        for _ in 0..size {
            arr.push(self.read_any(reader, depth)?);
        }
        Ok(Value::Array(arr))
    }

    /// Reads `size` pairs laid out key, value, key, value. A repeated key
    /// keeps its first position and takes the last value.
    fn read_map(
        &self,
        reader: &mut Reader<'_>,
        size: usize,
        depth: usize,
    ) -> Result<Value, MsgPackError> {
        let depth = self.enter(depth)?;
        let mut map = Map::with_capacity(size.min(reader.size() / 2));
        for _ in 0..size {
            let key = self.read_any(reader, depth)?;
            let val = self.read_any(reader, depth)?;
            map.insert(key, val);
        }
        Ok(Value::Map(map))
    }

    fn read_str(&self, reader: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
        let bytes = reader.buf(size)?;
        if self.options.compatibility {
            return Ok(Value::Binary(bytes.to_vec()));
        }
        let s = std::str::from_utf8(bytes).map_err(|_| MsgPackError::InvalidData)?;
        Ok(Value::String(s.to_owned()))
    }
}

/// Reads a big-endian length field of `width` bytes.
fn read_len(reader: &mut Reader<'_>, width: usize) -> Result<usize, MsgPackError> {
    let n = reader.uint_be(width)?;
    // A length beyond the address space can never be satisfied by the input.
    usize::try_from(n).map_err(|_| MsgPackError::InsufficientData)
}

/// Reads the signed type byte and `size` payload bytes of an extension.
fn read_ext(reader: &mut Reader<'_>, size: usize) -> Result<Value, MsgPackError> {
    let ty = reader.i8()?;
    let data = reader.buf(size)?;
    Ok(Value::Extended(ty, data.to_vec()))
}
