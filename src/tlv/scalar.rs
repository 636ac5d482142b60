//! Single-field scalar payloads (`PRIORITY1`, `DOMAIN`, `SLAVE_ONLY`, ...).
//!
//! These are the bulk of the registry by count but not by code: each wraps
//! one integer or boolean field with the same decode/encode/JSON shape, so
//! they share one generic-ish set of small wrapper types rather than one
//! struct per managementId.

use crate::error::{record_here, Error, Result};
use crate::wire::{Reader, Timestamp, Writer};
use serde_json::Value;

fn check_len(available: usize, needed: usize) -> Result<()> {
    if available < needed {
        return Err(record_here!(Error::Length(format!(
            "need {needed} octets, TLV carries {available}"
        ))));
    }
    Ok(())
}

/// A single `u8` field, keyed by its JSON field name.
#[derive(Debug, Clone)]
pub struct U8Field {
    pub key: &'static str,
    pub value: u8,
}

impl U8Field {
    pub fn decode_named(r: &mut Reader, len: usize, key: &'static str) -> Result<Self> {
        check_len(len, 1)?;
        Ok(Self {
            key,
            value: r.read_u8()?,
        })
    }

    pub fn wire_len(&self) -> usize {
        1
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.value)
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert(self.key.to_string(), Value::from(self.value));
        Value::Object(obj)
    }

    pub fn from_json(v: &Value, key: &'static str) -> Result<Self> {
        let obj = super::json_object(v, key)?;
        let value = super::json_u64(obj, key)?;
        if value > u8::MAX as u64 {
            return Err(Error::Val {
                field: key,
                value: value as i64,
            });
        }
        Ok(Self {
            key,
            value: value as u8,
        })
    }
}

/// A single signed `i8` field (log2 interval fields).
#[derive(Debug, Clone)]
pub struct I8Field {
    pub key: &'static str,
    pub value: i8,
}

impl I8Field {
    pub fn decode_named(r: &mut Reader, len: usize, key: &'static str) -> Result<Self> {
        check_len(len, 1)?;
        Ok(Self {
            key,
            value: r.read_i8()?,
        })
    }

    pub fn wire_len(&self) -> usize {
        1
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_i8(self.value)
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert(self.key.to_string(), Value::from(self.value));
        Value::Object(obj)
    }

    pub fn from_json(v: &Value, key: &'static str) -> Result<Self> {
        let obj = super::json_object(v, key)?;
        let value = super::json_i64(obj, key)?;
        if value < i8::MIN as i64 || value > i8::MAX as i64 {
            return Err(Error::Val {
                field: key,
                value,
            });
        }
        Ok(Self {
            key,
            value: value as i8,
        })
    }
}

/// A single `u16` field.
#[derive(Debug, Clone)]
pub struct U16Field {
    pub key: &'static str,
    pub value: u16,
}

impl U16Field {
    pub fn decode_named(r: &mut Reader, len: usize, key: &'static str) -> Result<Self> {
        check_len(len, 2)?;
        Ok(Self {
            key,
            value: r.read_u16()?,
        })
    }

    pub fn wire_len(&self) -> usize {
        2
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.value)
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert(self.key.to_string(), Value::from(self.value));
        Value::Object(obj)
    }

    pub fn from_json(v: &Value, key: &'static str) -> Result<Self> {
        let obj = super::json_object(v, key)?;
        let value = super::json_u64(obj, key)?;
        if value > u16::MAX as u64 {
            return Err(Error::Val {
                field: key,
                value: value as i64,
            });
        }
        Ok(Self {
            key,
            value: value as u16,
        })
    }
}

/// A single-octet boolean field (the low bit carries the value, §4.5).
#[derive(Debug, Clone)]
pub struct BoolField {
    pub key: &'static str,
    pub value: bool,
}

impl BoolField {
    pub fn decode_named(r: &mut Reader, len: usize, key: &'static str) -> Result<Self> {
        check_len(len, 1)?;
        Ok(Self {
            key,
            value: r.read_u8()? & 1 != 0,
        })
    }

    pub fn wire_len(&self) -> usize {
        1
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.value as u8)
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert(self.key.to_string(), Value::Bool(self.value));
        Value::Object(obj)
    }

    pub fn from_json(v: &Value, key: &'static str) -> Result<Self> {
        let obj = super::json_object(v, key)?;
        Ok(Self {
            key,
            value: super::json_bool(obj, key)?,
        })
    }
}

/// A single `Timestamp` field (`TIME`).
#[derive(Debug, Clone)]
pub struct TimestampField {
    pub key: &'static str,
    pub value: Timestamp,
}

impl TimestampField {
    pub fn decode_named(r: &mut Reader, len: usize, key: &'static str) -> Result<Self> {
        check_len(len, Timestamp::WIRE_LEN)?;
        Ok(Self {
            key,
            value: Timestamp::decode(r)?,
        })
    }

    pub fn wire_len(&self) -> usize {
        Timestamp::WIRE_LEN
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.value.encode(w)
    }

    pub fn to_json(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert(self.key.to_string(), Value::String(self.value.to_json_string()));
        Value::Object(obj)
    }

    pub fn from_json(v: &Value, key: &'static str) -> Result<Self> {
        let obj = super::json_object(v, key)?;
        let s = super::json_str(obj, key)?;
        Ok(Self {
            key,
            value: Timestamp::from_json_string(s)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u8_field_round_trips_wire_and_json() {
        let field = U8Field {
            key: "priority1",
            value: 153,
        };
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        field.encode(&mut w).unwrap();
        let mut r = Reader::new(&buf[..1]);
        let decoded = U8Field::decode_named(&mut r, 1, "priority1").unwrap();
        assert_eq!(decoded.value, 153);

        let json = field.to_json();
        let back = U8Field::from_json(&json, "priority1").unwrap();
        assert_eq!(back.value, 153);
    }

    #[test]
    fn u8_field_rejects_short_buffer() {
        let mut r = Reader::new(&[]);
        assert!(U8Field::decode_named(&mut r, 0, "priority1").is_err());
    }

    #[test]
    fn u8_field_from_json_rejects_out_of_range() {
        let v = Value::from(serde_json::json!({"priority1": 300}));
        assert!(U8Field::from_json(&v, "priority1").is_err());
    }

    #[test]
    fn i8_field_round_trips_negative_value() {
        let field = I8Field {
            key: "logSyncInterval",
            value: -7,
        };
        let mut buf = [0u8; 4];
        let mut w = Writer::new(&mut buf);
        field.encode(&mut w).unwrap();
        let mut r = Reader::new(&buf[..1]);
        let decoded = I8Field::decode_named(&mut r, 1, "logSyncInterval").unwrap();
        assert_eq!(decoded.value, -7);
    }

    #[test]
    fn bool_field_decodes_low_bit_only() {
        let mut r = Reader::new(&[0xFE]);
        let decoded = BoolField::decode_named(&mut r, 1, "slaveOnly").unwrap();
        assert!(!decoded.value);
    }

    #[test]
    fn bool_field_from_json_accepts_string_coercion() {
        let v = serde_json::json!({"slaveOnly": "enable"});
        let decoded = BoolField::from_json(&v, "slaveOnly").unwrap();
        assert!(decoded.value);
    }

    #[test]
    fn timestamp_field_round_trips_through_json_string() {
        let field = TimestampField {
            key: "currentTime",
            value: Timestamp {
                seconds: 10,
                nanoseconds: 500_000_000,
            },
        };
        let json = field.to_json();
        let back = TimestampField::from_json(&json, "currentTime").unwrap();
        assert_eq!(back.value.seconds, 10);
        assert_eq!(back.value.nanoseconds, 500_000_000);
    }
}
