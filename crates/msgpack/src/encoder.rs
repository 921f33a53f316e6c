//! `MsgPackEncoder` — [`Value`] to MessagePack bytes.
//!
//! Every value is written with the smallest tag class that can hold it.

use msgpack_value_buffers::Writer;

use super::constants::{
    MsgPackMarker, FIXARRAY_MAX_LEN, FIXMAP_MAX_LEN, FIXSTR_MAX_LEN, MAX_LEN, NEG_FIXINT_MIN,
    POS_FIXINT_MAX,
};
use crate::value::{Map, Value};

/// Panics when a length does not fit a 32-bit length field.
#[inline]
fn assert_len(kind: &str, length: usize) {
    assert!(
        length <= MAX_LEN,
        "{kind} length {length} exceeds the MessagePack limit of {MAX_LEN}"
    );
}

pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl Default for MsgPackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes `value` and returns the bytes.
    ///
    /// # Panics
    ///
    /// If any string, binary, array, map or extension payload inside `value`
    /// is longer than `u32::MAX`.
    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Nil => self.write_nil(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int(i) => self.write_integer(*i),
            Value::UInt(u) => self.write_u_integer(*u),
            Value::Float(f) => self.write_float(*f),
            Value::Double(d) => self.write_double(*d),
            Value::String(s) => self.write_str(s),
            Value::Binary(b) => self.write_bin(b),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(map) => self.write_map(map),
            Value::Extended(ty, data) => self.write_ext(*ty, data),
        }
    }

    pub fn write_nil(&mut self) {
        self.writer.u8(MsgPackMarker::Nil as u8);
    }

    pub fn write_boolean(&mut self, b: bool) {
        let marker = if b {
            MsgPackMarker::True
        } else {
            MsgPackMarker::False
        };
        self.writer.u8(marker as u8);
    }

    pub fn write_float(&mut self, float: f32) {
        self.writer.u8f32(0xca, float);
    }

    pub fn write_double(&mut self, double: f64) {
        self.writer.u8f64(0xcb, double);
    }

    /// Encodes a non-negative integer: positive fixint, uint8/16/32/64.
    pub fn write_u_integer(&mut self, uint: u64) {
        let writer = &mut self.writer;
        if uint <= POS_FIXINT_MAX {
            writer.u8(uint as u8);
        } else if uint <= 0xff {
            writer.u8u8(0xcc, uint as u8);
        } else if uint <= 0xffff {
            writer.u8u16(0xcd, uint as u16);
        } else if uint <= 0xffff_ffff {
            writer.u8u32(0xce, uint as u32);
        } else {
            writer.u8u64(0xcf, uint);
        }
    }

    /// Encodes a signed integer. Non-negative values take the unsigned path.
    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
            return;
        }
        let writer = &mut self.writer;
        if int >= NEG_FIXINT_MIN {
            // negative fixint: 0xe0..0xff
            writer.i8(int as i8);
        } else if int >= i8::MIN as i64 {
            writer.u8u8(0xd0, int as i8 as u8);
        } else if int >= i16::MIN as i64 {
            writer.u8u16(0xd1, int as i16 as u16);
        } else if int >= i32::MIN as i64 {
            writer.u8u32(0xd2, int as i32 as u32);
        } else {
            writer.u8u64(0xd3, int as u64);
        }
    }

    pub fn write_str_hdr(&mut self, length: usize) {
        assert_len("string", length);
        if length <= FIXSTR_MAX_LEN {
            self.writer.u8(0xa0 | length as u8);
        } else if length <= 0xff {
            self.writer.u8u8(0xd9, length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xda, length as u16);
        } else {
            self.writer.u8u32(0xdb, length as u32);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_str_hdr(s.len());
        self.writer.utf8(s);
    }

    pub fn write_bin_hdr(&mut self, length: usize) {
        assert_len("binary", length);
        if length <= 0xff {
            self.writer.u8u8(0xc4, length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xc5, length as u16);
        } else {
            self.writer.u8u32(0xc6, length as u32);
        }
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_bin_hdr(buf.len());
        self.writer.buf(buf);
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        assert_len("array", length);
        if length <= FIXARRAY_MAX_LEN {
            self.writer.u8(0x90 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xdc, length as u16);
        } else {
            self.writer.u8u32(0xdd, length as u32);
        }
    }

    pub fn write_arr(&mut self, arr: &[Value]) {
        self.write_arr_hdr(arr.len());
        for item in arr {
            self.write_any(item);
        }
    }

    pub fn write_map_hdr(&mut self, length: usize) {
        assert_len("map", length);
        if length <= FIXMAP_MAX_LEN {
            self.writer.u8(0x80 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xde, length as u16);
        } else {
            self.writer.u8u32(0xdf, length as u32);
        }
    }

    /// Writes the pair count, then each key directly followed by its value.
    pub fn write_map(&mut self, map: &Map) {
        self.write_map_hdr(map.len());
        for (key, val) in map {
            self.write_any(key);
            self.write_any(val);
        }
    }

    pub fn write_ext_hdr(&mut self, tag: i8, length: usize) {
        assert_len("extension", length);
        let tag = tag as u8;
        match length {
            1 => self.writer.u8u8(0xd4, tag),
            2 => self.writer.u8u8(0xd5, tag),
            4 => self.writer.u8u8(0xd6, tag),
            8 => self.writer.u8u8(0xd7, tag),
            16 => self.writer.u8u8(0xd8, tag),
            _ => {
                if length <= 0xff {
                    self.writer.u8u8(0xc7, length as u8);
                } else if length <= 0xffff {
                    self.writer.u8u16(0xc8, length as u16);
                } else {
                    self.writer.u8u32(0xc9, length as u32);
                }
                self.writer.u8(tag);
            }
        }
    }

    pub fn write_ext(&mut self, tag: i8, data: &[u8]) {
        self.write_ext_hdr(tag, data.len());
        self.writer.buf(data);
    }
}
