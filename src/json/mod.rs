//! JSON serializer (C6): walk a parsed [`Message`] and emit the canonical
//! document described by §4.6/§6.2. The acceptor lives in [`accept`].

pub mod accept;

use crate::header::Header;
use crate::message::{ManagementBody, Message};
use crate::tlv::ManagementErrorId;
use crate::types::{ActionField, MessageType, TlvType};
use crate::wire::PortIdentity;
use serde_json::{Map, Value};

pub use accept::from_json;

fn port_identity_json(id: PortIdentity) -> Value {
    let mut m = Map::new();
    m.insert(
        "clockIdentity".to_string(),
        Value::String(id.clock_identity.to_canonical_string()),
    );
    m.insert("portNumber".to_string(), Value::from(id.port_number));
    Value::Object(m)
}

/// `PTPProfileSpecific`: the two profile-specific bits of the header flags
/// field (IEEE 1588-2019 Table 37, bits 5-6).
fn ptp_profile_specific(flags: u16) -> u64 {
    ((flags >> 5) & 0x3) as u64
}

fn header_fields(m: &mut Map<String, Value>, header: &Header) {
    m.insert("sequenceId".to_string(), Value::from(header.sequence_id));
    m.insert("sdoId".to_string(), Value::from(header.sdo_id));
    m.insert("domainNumber".to_string(), Value::from(header.domain_number));
    m.insert("versionPTP".to_string(), Value::from(header.version_ptp));
    m.insert("minorVersionPTP".to_string(), Value::from(0u8));
    m.insert(
        "unicastFlag".to_string(),
        Value::Bool(header.flags & 0x0004 != 0),
    );
    m.insert(
        "PTPProfileSpecific".to_string(),
        Value::from(ptp_profile_specific(header.flags)),
    );
    let message_type = match header.message_type {
        MessageType::Management => "MANAGEMENT",
        MessageType::Signaling => "SIGNALING",
        other => other.as_str(),
    };
    m.insert("messageType".to_string(), Value::String(message_type.to_string()));
    m.insert(
        "sourcePortIdentity".to_string(),
        port_identity_json(header.source_port_identity),
    );
}

/// Emit the canonical JSON form of a parsed message (§4.6).
pub fn to_json(msg: &Message) -> Value {
    let mut m = Map::new();
    header_fields(&mut m, &msg.header);
    m.insert(
        "targetPortIdentity".to_string(),
        port_identity_json(msg.get_target()),
    );

    match msg.header.message_type {
        MessageType::Signaling => {
            let tlvs: Vec<Value> = msg.signaling_tlvs().iter().map(|t| t.to_json()).collect();
            m.insert("TLVs".to_string(), Value::Array(tlvs));
        }
        _ => {
            if let Some(action) = msg.get_reply_action() {
                m.insert("actionField".to_string(), Value::String(action.as_str().to_string()));
            }
            management_body_json(&mut m, msg);
        }
    }

    Value::Object(m)
}

fn management_body_json(m: &mut Map<String, Value>, msg: &Message) {
    match msg.raw_body() {
        Some(ManagementBody::Error(err)) => {
            m.insert(
                "tlvType".to_string(),
                Value::String(TlvType::ManagementErrorStatus.as_str().to_string()),
            );
            let id_name = msg
                .get_tlv_id()
                .map(|id| id.name().to_string())
                .unwrap_or_else(|| format!("0x{:04x}", err.management_id));
            m.insert("managementId".to_string(), Value::String(id_name));
            let error_name = ManagementErrorId::from_wire(err.management_error_id)
                .map(|e| e.as_str().to_string())
                .unwrap_or_else(|| format!("0x{:04x}", err.management_error_id));
            m.insert("managementErrorId".to_string(), Value::String(error_name));
            m.insert(
                "displayData".to_string(),
                match &err.display_data {
                    Some(text) => Value::String(text.0.clone()),
                    None => Value::Null,
                },
            );
        }
        Some(ManagementBody::Data(payload)) => {
            m.insert(
                "tlvType".to_string(),
                Value::String(TlvType::Management.as_str().to_string()),
            );
            let id_name = match msg.get_tlv_id() {
                Some(id) => id.name().to_string(),
                None => msg
                    .management_id_raw
                    .map(|v| format!("0x{:04x}", v))
                    .unwrap_or_else(|| "UNKNOWN".to_string()),
            };
            m.insert("managementId".to_string(), Value::String(id_name));
            m.insert("dataField".to_string(), payload.to_json());
        }
        None => {
            m.insert(
                "tlvType".to_string(),
                Value::String(TlvType::Management.as_str().to_string()),
            );
            let id_name = msg
                .get_tlv_id()
                .map(|id| id.name().to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string());
            m.insert("managementId".to_string(), Value::String(id_name));
            m.insert("dataField".to_string(), Value::Null);
        }
    }
}

/// Render `msg` as indented JSON text, per §4.6's caller-controlled base indent.
pub fn to_json_string(msg: &Message, base_indent: usize) -> crate::error::Result<String> {
    let text = serde_json::to_string_pretty(&to_json(msg))
        .map_err(|e| crate::error::Error::Json(e.to_string()))?;
    if base_indent == 0 {
        return Ok(text);
    }
    let pad = "  ".repeat(base_indent);
    Ok(text
        .lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::management_id::ManagementId;
    use crate::tlv::scalar::U8Field;
    use crate::tlv::Payload;

    #[test]
    fn management_get_emits_null_data_field() {
        let mut msg = Message::new();
        msg.set_action(ManagementId::Priority1, ActionField::Get, None).unwrap();
        let mut buf = [0u8; 128];
        let n = msg.build(&mut buf).unwrap();
        let parsed = Message::parse(&buf[..n], true).unwrap();

        let v = to_json(&parsed);
        assert_eq!(v["managementId"], Value::String("PRIORITY1".to_string()));
        assert_eq!(v["actionField"], Value::String("GET".to_string()));
        assert_eq!(v["dataField"], Value::Null);
    }

    #[test]
    fn management_set_emits_data_field_object() {
        let mut msg = Message::new();
        msg.set_action(
            ManagementId::Priority1,
            ActionField::Set,
            Some(Payload::Priority1(U8Field { key: "priority1", value: 200 })),
        )
        .unwrap();
        let mut buf = [0u8; 128];
        let n = msg.build(&mut buf).unwrap();
        let parsed = Message::parse(&buf[..n], true).unwrap();

        let v = to_json(&parsed);
        assert_eq!(v["dataField"]["priority1"], Value::from(200));
    }
}
