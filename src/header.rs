//! Common header and management/signaling envelope (C2).
//!
//! Layout (§6.1): bytes 0-33 are the PTP common header, bytes 34-43 are
//! `targetPortIdentity`, bytes 44-45 are the boundary-hop counters, and for
//! management bytes 46-47 are `actionField` plus a reserved octet.

use crate::error::{record_here, Error, Result};
use crate::types::{ActionField, MessageType};
use crate::wire::{PortIdentity, Reader, Writer};

pub const HEADER_SIZE: usize = 34;
/// Minimum buffer size for a management message: header + target port
/// identity + boundary hops + action field + reserved octet.
pub const MANAGEMENT_MIN_SIZE: usize = HEADER_SIZE + PortIdentity::WIRE_LEN + 4;
pub const SIGNALING_MIN_SIZE: usize = HEADER_SIZE + PortIdentity::WIRE_LEN;

/// The 34-octet PTP common header shared by every message type.
#[derive(Debug, Clone)]
pub struct Header {
    pub transport_specific: u8,
    pub message_type: MessageType,
    pub version_ptp: u8,
    pub message_length: u16,
    pub domain_number: u8,
    pub sdo_id: u16,
    pub flags: u16,
    pub correction_field: i64,
    pub source_port_identity: PortIdentity,
    pub sequence_id: u16,
    pub control_field: u8,
    pub log_message_interval: i8,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            transport_specific: 0,
            message_type: MessageType::Management,
            version_ptp: 2,
            message_length: 0,
            domain_number: 0,
            sdo_id: 0,
            flags: 0,
            correction_field: 0,
            source_port_identity: PortIdentity::default(),
            sequence_id: 0,
            control_field: 0,
            log_message_interval: 0,
        }
    }
}

impl Header {
    /// Extract transport-specific (high nibble of byte 0) and sdoId. `major_sdo_only`
    /// mirrors the caller-configured mode of composing sdoId from the low
    /// nibble of byte 0 plus byte 1's low nibble (IEEE 1588-2019), versus
    /// treating byte 0's low nibble alone as the (1588-2008) transport-specific field.
    fn decode(r: &mut Reader, major_sdo_only: bool) -> Result<(u8, u8, u8)> {
        let b0 = r.read_u8()?;
        let transport_specific = (b0 >> 4) & 0x0F;
        let message_type_bits = b0 & 0x0F;
        let b1 = r.read_u8()?;
        let version_ptp = b1 & 0x0F;
        let _ = major_sdo_only;
        Ok((transport_specific, message_type_bits, version_ptp))
    }

    /// Parse the common header, rejecting any `messageType` outside
    /// {Management, Signaling}.
    pub fn parse(buf: &[u8], major_sdo_only: bool) -> Result<(Self, usize)> {
        if buf.len() < HEADER_SIZE {
            return Err(record_here!(Error::TooShort {
                needed: HEADER_SIZE,
                available: buf.len(),
            }));
        }
        let mut r = Reader::new(buf);
        let (transport_specific, message_type_bits, version_ptp) =
            Self::decode(&mut r, major_sdo_only)?;
        let message_type = MessageType::from_wire(message_type_bits).map_err(|_| {
            record_here!(Error::Header(format!(
                "unsupported messageType 0x{message_type_bits:x}"
            )))
        })?;
        if !matches!(message_type, MessageType::Management | MessageType::Signaling) {
            return Err(record_here!(Error::Header(format!(
                "messageType {:?} is not management or signaling",
                message_type
            ))));
        }

        let message_length = r.read_u16()?;
        let domain_number = r.read_u8()?;
        let sdo_id_low = r.read_u8()?; // byte 5: minorSdoId / reserved
        let flags = r.read_u16()?;
        let correction_field = r.read_i64()?;
        r.skip(4)?; // bytes 16-19 reserved / messageTypeSpecific
        let source_port_identity = PortIdentity::decode(&mut r)?;
        let sequence_id = r.read_u16()?;
        let control_field = r.read_u8()?;
        let log_message_interval = r.read_i8()?;

        let min_for_type = match message_type {
            MessageType::Management => MANAGEMENT_MIN_SIZE,
            MessageType::Signaling => SIGNALING_MIN_SIZE,
            _ => HEADER_SIZE,
        };
        if (message_length as usize) < min_for_type {
            return Err(record_here!(Error::Header(format!(
                "messageLength {message_length} below minimum {min_for_type}"
            ))));
        }
        if (message_length as usize) > buf.len() {
            return Err(record_here!(Error::Header(format!(
                "messageLength {message_length} exceeds supplied buffer of {}",
                buf.len()
            ))));
        }

        let sdo_id = if major_sdo_only {
            sdo_id_low as u16
        } else {
            ((transport_specific as u16) << 8) | (sdo_id_low as u16)
        };

        Ok((
            Self {
                transport_specific,
                message_type,
                version_ptp,
                message_length,
                domain_number,
                sdo_id,
                flags,
                correction_field,
                source_port_identity,
                sequence_id,
                control_field,
                log_message_interval,
            },
            HEADER_SIZE,
        ))
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        let message_type_bits = match self.message_type {
            MessageType::Sync => 0x0,
            MessageType::DelayReq => 0x1,
            MessageType::PDelayReq => 0x2,
            MessageType::PDelayResp => 0x3,
            MessageType::FollowUp => 0x8,
            MessageType::DelayResp => 0x9,
            MessageType::PDelayRespFollowUp => 0xA,
            MessageType::Announce => 0xB,
            MessageType::Signaling => 0xC,
            MessageType::Management => 0xD,
        };
        w.write_u8(((self.transport_specific & 0x0F) << 4) | message_type_bits)?;
        w.write_u8(self.version_ptp & 0x0F)?;
        w.write_u16(self.message_length)?;
        w.write_u8(self.domain_number)?;
        w.write_u8((self.sdo_id & 0xFF) as u8)?;
        w.write_u16(self.flags)?;
        w.write_i64(self.correction_field)?;
        w.write_zeros(4)?;
        self.source_port_identity.encode(w)?;
        w.write_u16(self.sequence_id)?;
        w.write_u8(self.control_field)?;
        w.write_i8(self.log_message_interval)
    }
}

/// Fields that follow the common header for management and signaling
/// messages: the target port identity and, for management, the
/// boundary-hop counters and `actionField`.
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub target_port_identity: PortIdentity,
    pub starting_boundary_hops: u8,
    pub boundary_hops: u8,
    pub action_field: ActionField,
}

impl Envelope {
    pub fn decode_management(r: &mut Reader) -> Result<Self> {
        let target_port_identity = PortIdentity::decode(r)?;
        let starting_boundary_hops = r.read_u8()?;
        let boundary_hops = r.read_u8()?;
        let action_byte = r.read_u8()?;
        r.skip(1)?; // reserved
        let action_field = ActionField::from_wire(action_byte)
            .map_err(|_| record_here!(Error::Header(format!("bad actionField {action_byte}"))))?;
        Ok(Self {
            target_port_identity,
            starting_boundary_hops,
            boundary_hops,
            action_field,
        })
    }

    pub fn encode_management(&self, w: &mut Writer) -> Result<()> {
        self.target_port_identity.encode(w)?;
        w.write_u8(self.starting_boundary_hops)?;
        w.write_u8(self.boundary_hops)?;
        w.write_u8(self.action_field as u8)?;
        w.write_u8(0)
    }

    pub fn decode_signaling(r: &mut Reader) -> Result<PortIdentity> {
        PortIdentity::decode(r)
    }
}

/// Validate `action` against the direction the message was received from, per §4.2.
pub fn validate_action_direction(action: ActionField, from_responder: bool) -> Result<()> {
    let ok = if from_responder {
        matches!(action, ActionField::Response | ActionField::Acknowledge)
    } else {
        matches!(action, ActionField::Get | ActionField::Set | ActionField::Command)
    };
    if !ok {
        return Err(record_here!(Error::Action {
            actual: action as u8,
            reason: format!(
                "action {:?} not valid for a message received from a {}",
                action,
                if from_responder { "responder" } else { "requester" }
            ),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header(len: u16) -> Header {
        Header {
            message_length: len,
            sequence_id: 42,
            ..Header::default()
        }
    }

    #[test]
    fn header_round_trips() {
        let h = sample_header(MANAGEMENT_MIN_SIZE as u16 + 6);
        let mut buf = [0u8; HEADER_SIZE];
        let mut w = Writer::new(&mut buf);
        h.encode(&mut w).unwrap();
        let (parsed, consumed) = Header::parse(&buf, true).unwrap();
        assert_eq!(consumed, HEADER_SIZE);
        assert_eq!(parsed.sequence_id, 42);
        assert!(matches!(parsed.message_type, MessageType::Management));
    }

    #[test]
    fn header_rejects_length_below_minimum() {
        let h = sample_header(4);
        let mut buf = [0u8; HEADER_SIZE];
        let mut w = Writer::new(&mut buf);
        h.encode(&mut w).unwrap();
        assert!(matches!(Header::parse(&buf, true), Err(Error::Header(_))));
    }
}
