//! Message object (C5): build, parse, and hold the pending-send /
//! last-received state of one management or signaling exchange.
//!
//! A [`Message`] is a thin state machine over the lower layers: [`header`]
//! gives it the common header and envelope, [`management_id`] gives it the
//! registry, [`tlv`] gives it the payload codec, [`signaling`] gives it the
//! TLV list traversal. Nothing here re-derives wire layout.

use crate::error::{record_here, Error, Result};
use crate::header::{Envelope, Header, MANAGEMENT_MIN_SIZE};
use crate::management_id::ManagementId;
use crate::signaling::SignalingTlv;
use crate::tlv::{org_ext, ManagementErrorStatus, Payload};
use crate::types::{ActionField, MessageType, TlvType};
use crate::wire::{Reader, Writer};

/// The body of a parsed or to-be-built management message: either a normal
/// payload tagged by its managementId, or the error TLV IEEE 1588 substitutes
/// for it (§3.4 invariant 6).
#[derive(Debug, Clone)]
pub enum ManagementBody {
    Data(Payload),
    Error(ManagementErrorStatus),
}

/// One parsed or to-be-built PTP management/signaling exchange.
///
/// Mirrors the pmc-style request/reply life cycle: a caller populates the
/// header and envelope fields and calls [`Message::set_action`] then
/// [`Message::build`] to get wire bytes to send; on the receive side,
/// [`Message::parse`] turns wire bytes back into a `Message` and the getters
/// below read off the result.
#[derive(Debug, Clone)]
pub struct Message {
    pub header: Header,
    pub management_id: Option<ManagementId>,
    /// The raw wire managementId when it did not match a known registry entry
    /// (§4.3/§7: unknown ids are surfaced, not rejected).
    pub management_id_raw: Option<u16>,
    pub target_port_identity: crate::wire::PortIdentity,
    pub starting_boundary_hops: u8,
    pub boundary_hops: u8,
    pending_action: Option<ActionField>,
    pending_data: Option<Payload>,
    last_body: Option<ManagementBody>,
    last_signaling_tlvs: Vec<SignalingTlv>,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            header: Header::default(),
            management_id: None,
            management_id_raw: None,
            target_port_identity: crate::wire::PortIdentity::default(),
            starting_boundary_hops: 0,
            boundary_hops: 0,
            pending_action: None,
            pending_data: None,
            last_body: None,
            last_signaling_tlvs: Vec::new(),
        }
    }
}

impl Message {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the managementId and actionField for the next [`Message::build`],
    /// validating that `action` is a permitted request verb for this
    /// managementId (§4.1). `data` is required unless the id's scope is
    /// marked `empty`.
    pub fn set_action(&mut self, id: ManagementId, action: ActionField, data: Option<Payload>) -> Result<()> {
        id.validate_request_action(action)?;
        if !id.scope().empty && data.is_none() && !matches!(action, ActionField::Get) {
            return Err(record_here!(Error::Action {
                actual: action as u8,
                reason: format!("{} requires a payload for {:?}", id.name(), action),
            }));
        }
        self.header.message_type = MessageType::Management;
        self.pending_action = Some(action);
        self.management_id = Some(id);
        self.pending_data = data;
        Ok(())
    }

    /// Clear whatever payload is queued for the next build, without
    /// disturbing the managementId/action already set.
    pub fn clear_data(&mut self) {
        self.pending_data = None;
    }

    /// Serialize the currently staged request into `buf`, returning the
    /// number of octets written.
    #[tracing::instrument(level = "trace", skip(self, buf), fields(management_id = ?self.management_id, action = ?self.pending_action))]
    pub fn build(&self, buf: &mut [u8]) -> Result<usize> {
        let id = self
            .management_id
            .ok_or_else(|| record_here!(Error::Header("no managementId staged for build".into())))?;
        let action = self
            .pending_action
            .ok_or_else(|| record_here!(Error::Header("no actionField staged for build".into())))?;

        let body_len = self.pending_data.as_ref().map(|p| p.wire_len()).unwrap_or(0);
        let tlv_value_len = 2 + body_len; // managementId + payload, before padding
        let padded_value_len = tlv_value_len + (tlv_value_len % 2);
        let message_length = MANAGEMENT_MIN_SIZE + 4 + padded_value_len;
        if buf.len() < message_length {
            return Err(record_here!(Error::Size {
                needed: message_length,
                capacity: buf.len(),
            }));
        }

        let mut header = self.header.clone();
        header.message_type = MessageType::Management;
        header.message_length = message_length as u16;

        let mut w = Writer::new(buf);
        header.encode(&mut w)?;
        let envelope = Envelope {
            target_port_identity: self.target_port_identity,
            starting_boundary_hops: self.starting_boundary_hops,
            boundary_hops: self.boundary_hops,
            action_field: action,
        };
        envelope.encode_management(&mut w)?;

        w.write_u16(TlvType::Management.wire_value())?;
        w.write_u16(padded_value_len as u16)?;
        w.write_u16(id.wire_value())?;
        if let Some(data) = &self.pending_data {
            data.encode(&mut w)?;
        }
        crate::wire::pad_to_even(&mut w, tlv_value_len)?;

        Ok(w.position())
    }

    /// Parse a wire-format management or signaling message from `buf`.
    /// `major_sdo_only` selects the 1588-2008 vs 2019 sdoId layout, per
    /// [`Header::parse`].
    #[tracing::instrument(level = "trace", skip(buf))]
    pub fn parse(buf: &[u8], major_sdo_only: bool) -> Result<Self> {
        let (header, consumed) = Header::parse(buf, major_sdo_only)?;
        let mut r = Reader::new(&buf[..header.message_length as usize]);
        r.skip(consumed)?;

        match header.message_type {
            MessageType::Management => Self::parse_management(header, &mut r),
            MessageType::Signaling => Self::parse_signaling(header, buf, &mut r),
            other => Err(record_here!(Error::Header(format!(
                "{:?} is not a management or signaling message",
                other
            )))),
        }
    }

    fn parse_management(header: Header, r: &mut Reader) -> Result<Self> {
        let envelope = Envelope::decode_management(r)?;

        let tlv_type = r.read_u16()?;
        let tlv_len = r.read_u16()? as usize;
        if tlv_len < 2 {
            return Err(record_here!(Error::Length(
                "management TLV length must be at least 2".into()
            )));
        }

        let mut msg = Self {
            header,
            management_id: None,
            management_id_raw: None,
            target_port_identity: envelope.target_port_identity,
            starting_boundary_hops: envelope.starting_boundary_hops,
            boundary_hops: envelope.boundary_hops,
            pending_action: Some(envelope.action_field),
            pending_data: None,
            last_body: None,
            last_signaling_tlvs: Vec::new(),
        };

        let body = if TlvType::from_wire(tlv_type) == Some(TlvType::ManagementErrorStatus) {
            let err = ManagementErrorStatus::decode(r, tlv_len)?;
            msg.management_id = ManagementId::from_wire(err.management_id);
            msg.management_id_raw = Some(err.management_id);
            ManagementBody::Error(err)
        } else if TlvType::from_wire(tlv_type) == Some(TlvType::OrganizationExtension) && is_smpte_org_ext(r, tlv_len)? {
            let start = r.position();
            let smpte = org_ext::SmpteMngId::decode(r, tlv_len)?;
            let consumed = r.position() - start;
            if consumed > tlv_len {
                return Err(record_here!(Error::Length(
                    "SMPTE_MNG_ID decoder overran its TLV length".into()
                )));
            }
            r.skip(tlv_len - consumed)?;
            msg.management_id = Some(ManagementId::SmpteMngId);
            msg.management_id_raw = Some(ManagementId::SmpteMngId.wire_value());
            ManagementBody::Data(Payload::SmpteMngId(smpte))
        } else {
            let id_raw = r.read_u16()?;
            msg.management_id_raw = Some(id_raw);
            let body_len = tlv_len - 2;
            match ManagementId::from_wire(id_raw) {
                Some(id) => {
                    msg.management_id = Some(id);
                    if matches!(envelope.action_field, ActionField::Get | ActionField::Set | ActionField::Command) {
                        id.validate_request_action(envelope.action_field)?;
                    }
                    ManagementBody::Data(Payload::decode(id, r, body_len)?)
                }
                None => {
                    tracing::debug!(management_id = id_raw, "unrecognized managementId, surfacing raw bytes");
                    ManagementBody::Data(Payload::Raw(r.read_bytes(body_len)?.to_vec()))
                }
            }
        };
        msg.last_body = Some(body);
        if tlv_len % 2 == 1 {
            r.skip(1)?;
        }
        Ok(msg)
    }

    fn parse_signaling(header: Header, full_buf: &[u8], r: &mut Reader) -> Result<Self> {
        let target_port_identity = Envelope::decode_signaling(r)?;
        let tail_start = r.position();
        let tail_end = header.message_length as usize;
        let tlvs = SignalingTlv::decode_all(&full_buf[tail_start..tail_end])?;
        Ok(Self {
            header,
            management_id: None,
            management_id_raw: None,
            target_port_identity,
            starting_boundary_hops: 0,
            boundary_hops: 0,
            pending_action: None,
            pending_data: None,
            last_body: None,
            last_signaling_tlvs: tlvs,
        })
    }

    /// Walk every signaling TLV in the last-parsed message, calling `f` on
    /// each in wire order. No-op on a management message.
    pub fn traverse_sig_tlvs(&self, mut f: impl FnMut(&SignalingTlv)) {
        for tlv in &self.last_signaling_tlvs {
            f(tlv);
        }
    }

    pub fn signaling_tlvs(&self) -> &[SignalingTlv] {
        &self.last_signaling_tlvs
    }

    /// The managementId carried by the last-parsed message.
    pub fn get_tlv_id(&self) -> Option<ManagementId> {
        self.management_id
    }

    /// The last-parsed body, tagged as data or error TLV. Used by the JSON
    /// serializer, which needs to tell the two apart even when `getData()`
    /// and `getErrId()` both return `None` (the unbuilt/unparsed state).
    pub fn raw_body(&self) -> Option<&ManagementBody> {
        self.last_body.as_ref()
    }

    /// The payload of the last-parsed message, if it was not a
    /// MANAGEMENT_ERROR_STATUS reply.
    pub fn get_data(&self) -> Option<&Payload> {
        match &self.last_body {
            Some(ManagementBody::Data(p)) => Some(p),
            _ => None,
        }
    }

    /// The error TLV of the last-parsed message, if it was a
    /// MANAGEMENT_ERROR_STATUS reply.
    pub fn get_err_id(&self) -> Option<u16> {
        match &self.last_body {
            Some(ManagementBody::Error(e)) => Some(e.management_error_id),
            _ => None,
        }
    }

    pub fn get_err_display(&self) -> Option<&str> {
        match &self.last_body {
            Some(ManagementBody::Error(e)) => e.display_data.as_ref().map(|t| t.0.as_str()),
            _ => None,
        }
    }

    pub fn get_reply_action(&self) -> Option<ActionField> {
        self.pending_action
    }

    pub fn get_sequence(&self) -> u16 {
        self.header.sequence_id
    }

    pub fn get_peer(&self) -> crate::wire::PortIdentity {
        self.header.source_port_identity
    }

    pub fn get_target(&self) -> crate::wire::PortIdentity {
        self.target_port_identity
    }
}

/// Peek an `ORGANIZATION_EXTENSION` TLV's `organizationId`/`organizationSubType`
/// without consuming them, per §4.4's OUI-sniffing dispatch rule.
fn is_smpte_org_ext(r: &Reader, tlv_len: usize) -> Result<bool> {
    if tlv_len < 6 {
        return Ok(false);
    }
    let head = r.peek_array::<6>()?;
    let organization_id: [u8; 3] = head[0..3].try_into().unwrap();
    let organization_sub_type: [u8; 3] = head[3..6].try_into().unwrap();
    Ok(org_ext::is_smpte(&organization_id, &organization_sub_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlv::scalar::U8Field;
    use crate::wire::PortIdentity;

    fn get_request(id: ManagementId) -> Message {
        let mut msg = Message::new();
        msg.header.sequence_id = 7;
        msg.target_port_identity = PortIdentity::default();
        msg.set_action(id, ActionField::Get, None).unwrap();
        msg
    }

    #[test]
    fn null_ptp_management_get_is_54_octets() {
        let msg = get_request(ManagementId::NullPtpManagement);
        let mut buf = [0u8; 128];
        let n = msg.build(&mut buf).unwrap();
        assert_eq!(n, MANAGEMENT_MIN_SIZE + 4 + 2);
    }

    #[test]
    fn priority1_set_then_response_round_trips() {
        let mut req = Message::new();
        req.target_port_identity = PortIdentity::default();
        req.set_action(
            ManagementId::Priority1,
            ActionField::Set,
            Some(Payload::Priority1(U8Field {
                key: "priority1",
                value: 128,
            })),
        )
        .unwrap();
        let mut buf = [0u8; 128];
        let n = req.build(&mut buf).unwrap();

        let parsed = Message::parse(&buf[..n], true).unwrap();
        assert_eq!(parsed.get_tlv_id(), Some(ManagementId::Priority1));
        match parsed.get_data() {
            Some(Payload::Priority1(f)) => assert_eq!(f.value, 128),
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn user_description_length_is_even_padded() {
        let payload = crate::tlv::data_sets::UserDescription {
            user_description: crate::wire::PtpText::new("a".repeat(61)),
        };
        assert_eq!(payload.wire_len(), 62);
        let mut req = Message::new();
        req.set_action(
            ManagementId::UserDescription,
            ActionField::Set,
            Some(Payload::UserDescription(payload)),
        )
        .unwrap();
        let mut buf = [0u8; 256];
        let n = req.build(&mut buf).unwrap();
        assert_eq!(n % 2, 0);
    }

    #[test]
    fn management_error_status_parses_as_error_body() {
        let mut buf = [0u8; 128];
        let mut header = Header::default();
        header.message_type = MessageType::Management;
        let error = ManagementErrorStatus {
            management_id: ManagementId::Priority1.wire_value(),
            management_error_id: crate::tlv::ManagementErrorId::NotSetable as u16,
            display_data: None,
        };
        let tlv_len = error.wire_len();
        header.message_length = (MANAGEMENT_MIN_SIZE + 4 + tlv_len) as u16;

        let mut w = Writer::new(&mut buf);
        header.encode(&mut w).unwrap();
        let envelope = Envelope {
            target_port_identity: PortIdentity::default(),
            starting_boundary_hops: 1,
            boundary_hops: 1,
            action_field: ActionField::Response,
        };
        envelope.encode_management(&mut w).unwrap();
        w.write_u16(TlvType::ManagementErrorStatus.wire_value()).unwrap();
        w.write_u16(tlv_len as u16).unwrap();
        error.encode(&mut w).unwrap();
        let len = w.position();

        let parsed = Message::parse(&buf[..len], true).unwrap();
        assert_eq!(parsed.get_err_id(), Some(crate::tlv::ManagementErrorId::NotSetable as u16));
    }

    #[test]
    fn organization_extension_smpte_oui_dispatches_to_smpte_mng_id() {
        use crate::tlv::org_ext::SmpteMngId;

        let smpte = SmpteMngId {
            organization_id: [0x68, 0x97, 0xe8],
            organization_sub_type: [0x00, 0x00, 0x01],
            default_system_frame_rate_numerator: 30,
            default_system_frame_rate_denominator: 1,
            master_locking_status: 0,
            time_address_flags: 0,
            current_local_offset: 0,
            jump_seconds: 0,
            time_of_next_jump: 0,
            time_of_next_jam: 0,
            time_of_previous_jam: 0,
            previous_jam_local_offset: 0,
            daylight_saving: 0,
            leap_second_jump: 0,
        };
        let natural_len = smpte.wire_len();
        let tlv_len = natural_len + (natural_len % 2);

        let mut buf = [0u8; 128];
        let mut header = Header::default();
        header.message_type = MessageType::Management;
        header.message_length = (MANAGEMENT_MIN_SIZE + 4 + tlv_len) as u16;

        let mut w = Writer::new(&mut buf);
        header.encode(&mut w).unwrap();
        let envelope = Envelope {
            target_port_identity: PortIdentity::default(),
            starting_boundary_hops: 1,
            boundary_hops: 1,
            action_field: ActionField::Response,
        };
        envelope.encode_management(&mut w).unwrap();
        w.write_u16(TlvType::OrganizationExtension.wire_value()).unwrap();
        w.write_u16(tlv_len as u16).unwrap();
        smpte.encode(&mut w).unwrap();
        if natural_len % 2 == 1 {
            crate::wire::pad_to_even(&mut w, natural_len).unwrap();
        }
        let len = w.position();

        let parsed = Message::parse(&buf[..len], true).unwrap();
        assert_eq!(parsed.get_tlv_id(), Some(ManagementId::SmpteMngId));
        match parsed.get_data() {
            Some(Payload::SmpteMngId(p)) => {
                assert_eq!(p.default_system_frame_rate_numerator, 30);
                assert_eq!(p.default_system_frame_rate_denominator, 1);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }
}
