//! JSON parser/acceptor (C7): consume a generic JSON object tree and
//! populate a new [`Message`] configured for sending, per §4.7/§6.2.
//!
//! This module only walks a [`serde_json::Value`] tree; the pluggable
//! tokenizer boundary described in the REDESIGN FLAGS is `serde_json`
//! itself here; a caller wanting json-c/libfastjson semantics need only
//! produce an equivalent `Value` tree upstream of this module.

use crate::error::{Error, Result};
use crate::management_id::ManagementId;
use crate::message::Message;
use crate::tlv::Payload;
use crate::types::{ActionField, MessageType};
use crate::wire::{ClockIdentity, PortIdentity};
use serde_json::{Map, Value};

const TOP_LEVEL_KEYS: &[&str] = &[
    "actionField",
    "managementId",
    "sequenceId",
    "sdoId",
    "domainNumber",
    "versionPTP",
    "minorVersionPTP",
    "unicastFlag",
    "PTPProfileSpecific",
    "messageType",
    "tlvType",
    "sourcePortIdentity",
    "targetPortIdentity",
    "dataField",
];

/// The result of a successful accept: a buildable [`Message`] plus flags
/// recording which optional header keys the document actually supplied
/// (§4.7 point 5's `haveDomainNumber()`-style queries).
#[derive(Debug, Clone)]
pub struct Accepted {
    pub message: Message,
    have_sequence_id: bool,
    have_sdo_id: bool,
    have_domain_number: bool,
    have_source_port_identity: bool,
    have_target_port_identity: bool,
}

impl Accepted {
    pub fn action_field(&self) -> Option<ActionField> {
        self.message.get_reply_action()
    }

    pub fn management_id(&self) -> Option<ManagementId> {
        self.message.get_tlv_id()
    }

    pub fn have_sequence_id(&self) -> bool {
        self.have_sequence_id
    }

    pub fn have_sdo_id(&self) -> bool {
        self.have_sdo_id
    }

    pub fn have_domain_number(&self) -> bool {
        self.have_domain_number
    }

    pub fn have_source_port_identity(&self) -> bool {
        self.have_source_port_identity
    }

    pub fn have_target_port_identity(&self) -> bool {
        self.have_target_port_identity
    }
}

fn json_object<'a>(v: &'a Value, ctx: &str) -> Result<&'a Map<String, Value>> {
    v.as_object().ok_or_else(|| Error::Json(format!("{ctx}: expected a JSON object")))
}

/// `int ↔ double` when integer-valued; string via `strtoll`-style base-0
/// parsing (accepts `0x`/`0` prefixes), mirroring §4.7 point 1.
fn coerce_i64(v: &Value, key: &str) -> Result<i64> {
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 {
                    Ok(f as i64)
                } else {
                    Err(Error::Json(format!("{key}: expected an integer-valued number")))
                }
            } else {
                Err(Error::Json(format!("{key}: not representable as i64")))
            }
        }
        Value::String(s) => {
            let s = s.trim();
            let (neg, s) = match s.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, s),
            };
            let v = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                i64::from_str_radix(hex, 16)
            } else if s.len() > 1 && s.starts_with('0') {
                i64::from_str_radix(&s[1..], 8)
            } else {
                s.parse::<i64>()
            }
            .map_err(|_| Error::Json(format!("{key}: invalid integer literal {s}")))?;
            Ok(if neg { -v } else { v })
        }
        _ => Err(Error::Json(format!("{key}: expected a number or numeric string"))),
    }
}

fn coerce_u16(v: &Value, key: &str) -> Result<u16> {
    let i = coerce_i64(v, key)?;
    u16::try_from(i).map_err(|_| Error::Json(format!("{key}: {i} out of range for u16")))
}

fn coerce_u8(v: &Value, key: &str) -> Result<u8> {
    let i = coerce_i64(v, key)?;
    u8::try_from(i).map_err(|_| Error::Json(format!("{key}: {i} out of range for u8")))
}

fn coerce_bool(v: &Value, key: &str) -> Result<bool> {
    crate::tlv::json_bool_coerce(v, key)
}

fn port_identity_from_json(v: &Value, key: &str) -> Result<PortIdentity> {
    let obj = json_object(v, key)?;
    let clock_identity = obj
        .get("clockIdentity")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Json(format!("{key}.clockIdentity must be a string")))?;
    let clock_identity = ClockIdentity::from_canonical_string(clock_identity)?;
    let port_number = obj
        .get("portNumber")
        .ok_or_else(|| Error::Json(format!("missing {key}.portNumber")))?;
    let port_number = coerce_u16(port_number, "portNumber")?;
    Ok(PortIdentity {
        clock_identity,
        port_number,
    })
}

/// Build a new [`Message`] ready for [`Message::build`] from its accepted
/// JSON form (§4.7, §6.2).
pub fn from_json(v: &Value) -> Result<Message> {
    Ok(accept(v)?.message)
}

/// As [`from_json`], but also reports which optional header keys were present.
pub fn accept(v: &Value) -> Result<Accepted> {
    let obj = json_object(v, "document")?;
    for key in obj.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            return Err(Error::Json(format!("unknown top-level key: {key}")));
        }
    }

    let action_str = obj
        .get("actionField")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Json("missing required key actionField".into()))?;
    let action = ActionField::from_str_ci(action_str)
        .ok_or_else(|| Error::Json(format!("unrecognized actionField: {action_str}")))?;

    let id_str = obj
        .get("managementId")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Json("missing required key managementId".into()))?;
    let id = ManagementId::from_name(id_str)
        .ok_or_else(|| Error::Json(format!("unrecognized managementId: {id_str}")))?;

    let empty_scope = id.scope().empty;
    let data_field = obj.get("dataField");
    let needs_data = !empty_scope && !matches!(action, ActionField::Get);
    let payload = match (needs_data, data_field) {
        (true, Some(Value::Null)) | (true, None) => {
            return Err(Error::Json(format!("{id_str} requires a dataField for {action_str}")))
        }
        (true, Some(df)) => Some(Payload::from_json(id, df)?),
        (false, Some(v)) if !v.is_null() => {
            return Err(Error::Json(format!("{id_str} must not carry a dataField for {action_str}")))
        }
        _ => None,
    };

    let mut message = Message::new();
    message.set_action(id, action, payload)?;

    let mut have_sequence_id = false;
    let mut have_sdo_id = false;
    let mut have_domain_number = false;
    let mut have_source_port_identity = false;
    let mut have_target_port_identity = false;

    if let Some(v) = obj.get("sequenceId") {
        message.header.sequence_id = coerce_u16(v, "sequenceId")?;
        have_sequence_id = true;
    }
    if let Some(v) = obj.get("sdoId") {
        message.header.sdo_id = coerce_u16(v, "sdoId")?;
        have_sdo_id = true;
    }
    if let Some(v) = obj.get("domainNumber") {
        message.header.domain_number = coerce_u8(v, "domainNumber")?;
        have_domain_number = true;
    }
    if let Some(v) = obj.get("versionPTP") {
        message.header.version_ptp = coerce_u8(v, "versionPTP")? & 0x0F;
    }
    if let Some(v) = obj.get("unicastFlag") {
        message.header.flags = set_bit(message.header.flags, 0x0004, coerce_bool(v, "unicastFlag")?);
    }
    if let Some(v) = obj.get("PTPProfileSpecific") {
        let bits = coerce_u8(v, "PTPProfileSpecific")? & 0x03;
        message.header.flags = (message.header.flags & !0x0060) | ((bits as u16) << 5);
    }
    if let Some(v) = obj.get("messageType") {
        let s = v
            .as_str()
            .ok_or_else(|| Error::Json("messageType must be a string".into()))?;
        message.header.message_type = match s.to_ascii_uppercase().as_str() {
            "MANAGEMENT" => MessageType::Management,
            "SIGNALING" => MessageType::Signaling,
            other => return Err(Error::Json(format!("unsupported messageType: {other}"))),
        };
    }
    if let Some(v) = obj.get("sourcePortIdentity") {
        message.header.source_port_identity = port_identity_from_json(v, "sourcePortIdentity")?;
        have_source_port_identity = true;
    }
    if let Some(v) = obj.get("targetPortIdentity") {
        message.target_port_identity = port_identity_from_json(v, "targetPortIdentity")?;
        have_target_port_identity = true;
    }
    Ok(Accepted {
        message,
        have_sequence_id,
        have_sdo_id,
        have_domain_number,
        have_source_port_identity,
        have_target_port_identity,
    })
}

fn set_bit(flags: u16, bit: u16, value: bool) -> u16 {
    if value {
        flags | bit
    } else {
        flags & !bit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionField;
    use serde_json::json;

    #[test]
    fn domain_set_accepts_string_number() {
        let doc = json!({
            "actionField": "SET",
            "managementId": "DOMAIN",
            "dataField": { "domainNumber": 7 }
        });
        let msg = from_json(&doc).unwrap();
        let mut buf = [0u8; 128];
        let n = msg.build(&mut buf).unwrap();
        let parsed = Message::parse(&buf[..n], true).unwrap();
        match parsed.get_data() {
            Some(Payload::Domain(f)) => assert_eq!(f.value, 7),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn slave_only_accepts_enable_string_as_bool() {
        let doc = json!({
            "actionField": "SET",
            "managementId": "SLAVE_ONLY",
            "dataField": { "slaveOnly": "enable" }
        });
        let msg = from_json(&doc).unwrap();
        let mut buf = [0u8; 128];
        let n = msg.build(&mut buf).unwrap();
        let parsed = Message::parse(&buf[..n], true).unwrap();
        match parsed.get_data() {
            Some(Payload::SlaveOnly(f)) => assert!(f.value),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn get_with_dataField_is_rejected() {
        let doc = json!({
            "actionField": "GET",
            "managementId": "PRIORITY1",
            "dataField": { "priority1": 1 }
        });
        assert!(from_json(&doc).is_err());
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let doc = json!({
            "actionField": "GET",
            "managementId": "PRIORITY1",
            "bogus": 1
        });
        assert!(from_json(&doc).is_err());
    }

    #[test]
    fn action_field_round_trips_through_accepted() {
        let doc = json!({"actionField": "GET", "managementId": "PRIORITY1"});
        let accepted = accept(&doc).unwrap();
        assert_eq!(accepted.action_field(), Some(ActionField::Get));
        assert!(!accepted.have_domain_number());
    }
}
