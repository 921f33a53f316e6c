//! Byte buffer primitives for the MessagePack codec.
//!
//! [`Writer`] is a growable, append-only big-endian writer. [`Reader`] is a
//! cursor over a borrowed byte slice whose every read is bounds-checked.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
