//! MessagePack codec over a dynamically-typed [`Value`] model.
//!
//! ```
//! use msgpack_value::{decode, encode, Value};
//!
//! let bytes = encode(&Value::UInt(42));
//! assert_eq!(bytes, [0x2a]);
//!
//! let (value, rest) = decode(&bytes).unwrap();
//! assert_eq!(value, Value::Int(42));
//! assert!(rest.is_empty());
//! ```

mod convert;
mod value;

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod util;

pub use constants::MsgPackMarker;
pub use decoder::{DecodeOptions, MsgPackDecoder};
pub use encoder::MsgPackEncoder;
pub use error::MsgPackError;
pub use util::{decode, decode_all, decode_first, decode_with, encode};
pub use value::{Map, Value};
