//! [`Value`] — the dynamically-typed MessagePack value model.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// Key/value storage behind [`Value::Map`].
///
/// Iteration follows insertion order, but equality and hashing ignore it.
pub type Map = IndexMap<Value, Value>;

/// One MessagePack value.
///
/// The variant set mirrors the wire format's type families and is closed.
/// Equality and hashing are hand-written:
/// - `Int` and `UInt` compare equal when they hold the same non-negative number,
/// - `Float` never equals `Double`, and floats compare by IEEE754 bit pattern,
/// - maps compare as unordered sets of pairs.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f32),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    Array(Vec<Value>),
    Map(Map),
    /// Application-defined extension: signed type tag plus opaque payload.
    Extended(i8, Vec<u8>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::UInt(a), Value::UInt(b)) => a == b,
            (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Binary(a), Value::Binary(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Extended(ta, da), Value::Extended(tb, db)) => ta == tb && da == db,
            _ => false,
        }
    }
}

impl Eq for Value {}

// Discriminators fed to the hasher. Int and UInt share one for non-negative
// numbers so that cross-variant equal values hash identically.
const HASH_NIL: u8 = 0;
const HASH_BOOL: u8 = 1;
const HASH_NEG_INT: u8 = 2;
const HASH_UINT: u8 = 3;
const HASH_FLOAT: u8 = 4;
const HASH_DOUBLE: u8 = 5;
const HASH_STRING: u8 = 6;
const HASH_BINARY: u8 = 7;
const HASH_ARRAY: u8 = 8;
const HASH_MAP: u8 = 9;
const HASH_EXTENDED: u8 = 10;

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Nil => state.write_u8(HASH_NIL),
            Value::Bool(b) => {
                state.write_u8(HASH_BOOL);
                b.hash(state);
            }
            Value::Int(i) => match u64::try_from(*i) {
                Ok(u) => {
                    state.write_u8(HASH_UINT);
                    u.hash(state);
                }
                Err(_) => {
                    state.write_u8(HASH_NEG_INT);
                    i.hash(state);
                }
            },
            Value::UInt(u) => {
                state.write_u8(HASH_UINT);
                u.hash(state);
            }
            Value::Float(f) => {
                state.write_u8(HASH_FLOAT);
                f.to_bits().hash(state);
            }
            Value::Double(d) => {
                state.write_u8(HASH_DOUBLE);
                d.to_bits().hash(state);
            }
            Value::String(s) => {
                state.write_u8(HASH_STRING);
                s.hash(state);
            }
            Value::Binary(b) => {
                state.write_u8(HASH_BINARY);
                b.hash(state);
            }
            Value::Array(items) => {
                state.write_u8(HASH_ARRAY);
                items.hash(state);
            }
            Value::Map(map) => {
                state.write_u8(HASH_MAP);
                state.write_usize(map.len());
                // Commutative fold: pair order must not change the hash.
                let combined = map
                    .iter()
                    .map(|(k, v)| {
                        let mut h = DefaultHasher::new();
                        k.hash(&mut h);
                        v.hash(&mut h);
                        h.finish()
                    })
                    .fold(0u64, u64::wrapping_add);
                state.write_u64(combined);
            }
            Value::Extended(ty, data) => {
                state.write_u8(HASH_EXTENDED);
                ty.hash(state);
                data.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "bool({b})"),
            Value::Int(i) => write!(f, "int({i})"),
            Value::UInt(u) => write!(f, "uint({u})"),
            Value::Float(v) => write!(f, "float({v:?})"),
            Value::Double(v) => write!(f, "double({v:?})"),
            Value::String(s) => write!(f, "string({s})"),
            Value::Binary(b) => write!(f, "data({} bytes)", b.len()),
            Value::Array(items) => {
                write!(f, "array([")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "])")
            }
            Value::Map(map) => {
                write!(f, "map([")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "])")
            }
            Value::Extended(ty, data) => write!(f, "extended({ty}, {} bytes)", data.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash_of(value: &Value) -> u64 {
        let mut h = DefaultHasher::new();
        value.hash(&mut h);
        h.finish()
    }

    #[test]
    fn int_and_uint_compare_by_number() {
        assert_eq!(Value::Int(5), Value::UInt(5));
        assert_eq!(Value::UInt(0), Value::Int(0));
        assert_ne!(Value::Int(-1), Value::UInt(u64::MAX));
        assert_ne!(Value::Int(-1), Value::UInt(1));
        assert_eq!(hash_of(&Value::Int(5)), hash_of(&Value::UInt(5)));
        assert_eq!(hash_of(&Value::Int(0)), hash_of(&Value::UInt(0)));
    }

    #[test]
    fn float_never_equals_double() {
        assert_ne!(Value::Float(1.0), Value::Double(1.0));
        assert_eq!(Value::Float(1.5), Value::Float(1.5));
        assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
    }

    #[test]
    fn map_equality_ignores_order() {
        let mut a = Map::new();
        a.insert(Value::String("a".into()), Value::UInt(1));
        a.insert(Value::String("b".into()), Value::UInt(2));
        let mut b = Map::new();
        b.insert(Value::String("b".into()), Value::UInt(2));
        b.insert(Value::String("a".into()), Value::Int(1));
        let (a, b) = (Value::Map(a), Value::Map(b));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn map_keys_unify_int_and_uint() {
        let mut map = Map::new();
        map.insert(Value::Int(7), Value::Nil);
        map.insert(Value::UInt(7), Value::Bool(true));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(&Value::Int(7)), Some(&Value::Bool(true)));
    }

    #[test]
    fn extended_compares_type_and_payload() {
        assert_eq!(Value::Extended(5, vec![1]), Value::Extended(5, vec![1]));
        assert_ne!(Value::Extended(5, vec![1]), Value::Extended(6, vec![1]));
        assert_ne!(Value::Extended(5, vec![1]), Value::Binary(vec![1]));
    }

    #[test]
    fn description_matrix() {
        assert_eq!(Value::Nil.to_string(), "nil");
        assert_eq!(Value::Bool(true).to_string(), "bool(true)");
        assert_eq!(Value::Int(-1).to_string(), "int(-1)");
        assert_eq!(Value::UInt(2).to_string(), "uint(2)");
        assert_eq!(Value::Float(0.0).to_string(), "float(0.0)");
        assert_eq!(Value::Double(1.618).to_string(), "double(1.618)");
        assert_eq!(Value::String("".into()).to_string(), "string()");
        assert_eq!(Value::Binary(vec![0, 1, 2, 3, 4]).to_string(), "data(5 bytes)");
        assert_eq!(
            Value::Array(vec![Value::Int(1), Value::Bool(true), Value::String("".into())])
                .to_string(),
            "array([int(1), bool(true), string()])"
        );
        assert_eq!(Value::Extended(5, vec![]).to_string(), "extended(5, 0 bytes)");

        let mut map = Map::new();
        map.insert(Value::String("c".into()), Value::String("cookie".into()));
        assert_eq!(Value::Map(map).to_string(), "map([string(c): string(cookie)])");
    }
}
