//! The management data-set payloads: `CLOCK_DESCRIPTION`, `*_DATA_SET`,
//! `FAULT_LOG`, and the time-properties sub-fields split into their own
//! managementIds by this registry (`UTC_PROPERTIES`, `TRACEABILITY_PROPERTIES`,
//! `TIMESCALE_PROPERTIES`).

use super::{json_bool, json_get, json_object, json_str, json_u64};
use crate::error::{record_here, Error, Result};
use crate::types::{ClockAccuracy, Flags, PortAddress, TimeSource};
use crate::wire::{ClockIdentity, ClockQuality, PortIdentity, PtpText, Reader, TimeInterval, Timestamp, Writer};
use serde_json::{Map, Value};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Object(m)
}

/// `CLOCK_DESCRIPTION` (§3.3): static identification of the responding clock.
#[derive(Debug, Clone)]
pub struct ClockDescription {
    pub clock_type: u16,
    pub physical_layer_protocol: PtpText,
    pub physical_address: Vec<u8>,
    pub protocol_address: PortAddress,
    pub manufacturer_identity: [u8; 3],
    pub product_description: PtpText,
    pub revision_data: PtpText,
    pub user_description: PtpText,
    pub profile_identity: [u8; 6],
}

impl ClockDescription {
    pub fn wire_len(&self) -> usize {
        2 + self.physical_layer_protocol.wire_len()
            + 2
            + self.physical_address.len()
            + self.protocol_address.wire_len()
            + 3
            + self.product_description.wire_len()
            + self.revision_data.wire_len()
            + self.user_description.wire_len()
            + 6
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let start = r.position();
        let clock_type = r.read_u16()?;
        let physical_layer_protocol = PtpText::decode(r)?;
        let phys_len = r.read_u16()? as usize;
        let physical_address = r.read_bytes(phys_len)?.to_vec();
        let protocol_address = PortAddress::decode(r)?;
        let manufacturer_identity = r.read_array::<3>()?;
        let product_description = PtpText::decode(r)?;
        let revision_data = PtpText::decode(r)?;
        let user_description = PtpText::decode(r)?;
        let profile_identity = r.read_array::<6>()?;
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length(
                "CLOCK_DESCRIPTION overran its TLV length".into()
            )));
        }
        Ok(Self {
            clock_type,
            physical_layer_protocol,
            physical_address,
            protocol_address,
            manufacturer_identity,
            product_description,
            revision_data,
            user_description,
            profile_identity,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.clock_type)?;
        self.physical_layer_protocol.encode(w)?;
        w.write_u16(self.physical_address.len() as u16)?;
        w.write_bytes(&self.physical_address)?;
        self.protocol_address.encode(w)?;
        w.write_bytes(&self.manufacturer_identity)?;
        self.product_description.encode(w)?;
        self.revision_data.encode(w)?;
        self.user_description.encode(w)?;
        w.write_bytes(&self.profile_identity)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("clockType", Value::from(self.clock_type)),
            (
                "physicalLayerProtocol",
                Value::String(self.physical_layer_protocol.0.clone()),
            ),
            ("physicalAddress", Value::String(hex_colon(&self.physical_address))),
            (
                "protocolAddress",
                obj(vec![
                    (
                        "networkProtocol",
                        Value::String(
                            crate::types::NetworkProtocol::from_wire(self.protocol_address.network_protocol)
                                .map(|p| p.as_str().to_string())
                                .unwrap_or_else(|| format!("0x{:04x}", self.protocol_address.network_protocol)),
                        ),
                    ),
                    ("addressField", Value::String(self.protocol_address.address_to_string())),
                ]),
            ),
            ("manufacturerIdentity", Value::String(hex_colon(&self.manufacturer_identity))),
            ("productDescription", Value::String(self.product_description.0.clone())),
            ("revisionData", Value::String(self.revision_data.0.clone())),
            ("userDescription", Value::String(self.user_description.0.clone())),
            ("profileIdentity", Value::String(hex_colon(&self.profile_identity))),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "CLOCK_DESCRIPTION")?;
        let protocol_address_v = json_get(o, "protocolAddress")?;
        let pa_obj = json_object(protocol_address_v, "protocolAddress")?;
        let proto_str = json_str(pa_obj, "networkProtocol")?;
        let network_protocol = crate::types::NetworkProtocol::from_str_ci(proto_str)
            .map(|p| p as u16)
            .ok_or_else(|| Error::Json(format!("unknown networkProtocol: {proto_str}")))?;
        let address_str = json_str(pa_obj, "addressField")?;
        let protocol_address = PortAddress::address_from_string(network_protocol, address_str)?;
        Ok(Self {
            clock_type: json_u64(o, "clockType")? as u16,
            physical_layer_protocol: PtpText::new(json_str(o, "physicalLayerProtocol")?),
            physical_address: from_hex_colon(json_str(o, "physicalAddress")?)?,
            protocol_address,
            manufacturer_identity: array3(from_hex_colon(json_str(o, "manufacturerIdentity")?)?)?,
            product_description: PtpText::new(json_str(o, "productDescription")?),
            revision_data: PtpText::new(json_str(o, "revisionData")?),
            user_description: PtpText::new(json_str(o, "userDescription")?),
            profile_identity: array6(from_hex_colon(json_str(o, "profileIdentity")?)?)?,
        })
    }
}

fn hex_colon(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")
}

fn from_hex_colon(s: &str) -> Result<Vec<u8>> {
    s.split(':')
        .filter(|p| !p.is_empty())
        .map(|p| u8::from_str_radix(p, 16).map_err(|_| Error::Json(format!("invalid hex octet: {p}"))))
        .collect()
}

fn array3(v: Vec<u8>) -> Result<[u8; 3]> {
    v.try_into().map_err(|v: Vec<u8>| Error::Json(format!("expected 3 octets, got {}", v.len())))
}

fn array6(v: Vec<u8>) -> Result<[u8; 6]> {
    v.try_into().map_err(|v: Vec<u8>| Error::Json(format!("expected 6 octets, got {}", v.len())))
}

/// `USER_DESCRIPTION`.
#[derive(Debug, Clone)]
pub struct UserDescription {
    pub user_description: PtpText,
}

impl UserDescription {
    pub fn wire_len(&self) -> usize {
        self.user_description.wire_len()
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let _ = len;
        Ok(Self {
            user_description: PtpText::decode(r)?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.user_description.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![("userDescription", Value::String(self.user_description.0.clone()))])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "USER_DESCRIPTION")?;
        Ok(Self {
            user_description: PtpText::new(json_str(o, "userDescription")?),
        })
    }
}

/// One entry of `FAULT_LOG`.
#[derive(Debug, Clone)]
pub struct FaultRecord {
    pub fault_time: Timestamp,
    pub severity_code: u8,
    pub fault_name: PtpText,
    pub fault_value: PtpText,
    pub fault_description: PtpText,
}

impl FaultRecord {
    fn wire_len(&self) -> usize {
        2 + Timestamp::WIRE_LEN
            + 1
            + self.fault_name.wire_len()
            + self.fault_value.wire_len()
            + self.fault_description.wire_len()
    }

    fn decode(r: &mut Reader) -> Result<Self> {
        let record_len = r.read_u16()? as usize;
        let start = r.position();
        let fault_time = Timestamp::decode(r)?;
        let severity_code = r.read_u8()?;
        let fault_name = PtpText::decode(r)?;
        let fault_value = PtpText::decode(r)?;
        let fault_description = PtpText::decode(r)?;
        let consumed = r.position() - start;
        if consumed > record_len {
            return Err(record_here!(Error::Length("faultRecord overran faultRecordLength".into())));
        }
        r.skip(record_len - consumed)?;
        Ok(Self {
            fault_time,
            severity_code,
            fault_name,
            fault_value,
            fault_description,
        })
    }

    fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16((self.wire_len() - 2) as u16)?;
        self.fault_time.encode(w)?;
        w.write_u8(self.severity_code)?;
        self.fault_name.encode(w)?;
        self.fault_value.encode(w)?;
        self.fault_description.encode(w)
    }

    fn to_json(&self) -> Value {
        obj(vec![
            ("faultTime", Value::String(self.fault_time.to_json_string())),
            (
                "severityCode",
                Value::String(
                    crate::types::FaultRecordSeverity::from_wire(self.severity_code)
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| format!("0x{:02x}", self.severity_code)),
                ),
            ),
            ("faultName", Value::String(self.fault_name.0.clone())),
            ("faultValue", Value::String(self.fault_value.0.clone())),
            ("faultDescription", Value::String(self.fault_description.0.clone())),
        ])
    }
}

/// `FAULT_LOG`.
#[derive(Debug, Clone)]
pub struct FaultLog {
    pub fault_records: Vec<FaultRecord>,
}

impl FaultLog {
    pub fn wire_len(&self) -> usize {
        2 + self.fault_records.iter().map(FaultRecord::wire_len).sum::<usize>()
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let start = r.position();
        let count = r.read_u16()? as usize;
        let mut fault_records = Vec::with_capacity(count);
        for _ in 0..count {
            fault_records.push(FaultRecord::decode(r)?);
        }
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length("FAULT_LOG overran its TLV length".into())));
        }
        Ok(Self { fault_records })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.fault_records.len() as u16)?;
        for r in &self.fault_records {
            r.encode(w)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![(
            "faultRecords",
            Value::Array(self.fault_records.iter().map(FaultRecord::to_json).collect()),
        )])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("FAULT_LOG is a read-only (GET-only) data set, not buildable from JSON".into()))
    }
}

/// `DEFAULT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct DefaultDataSet {
    pub two_step_flag: bool,
    pub slave_only: bool,
    pub number_ports: u16,
    pub priority1: u8,
    pub priority2: u8,
    pub clock_quality: ClockQuality,
    pub clock_identity: ClockIdentity,
    pub domain_number: u8,
}

impl DefaultDataSet {
    pub fn wire_len(&self) -> usize {
        20
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 20 {
            return Err(record_here!(Error::Length("DEFAULT_DATA_SET needs 20 octets".into())));
        }
        let flags = r.read_u8()?;
        r.skip(1)?;
        let number_ports = r.read_u16()?;
        let priority1 = r.read_u8()?;
        let priority2 = r.read_u8()?;
        let clock_quality = ClockQuality::decode(r)?;
        let domain_number = r.read_u8()?;
        r.skip(1)?;
        let clock_identity = ClockIdentity::decode(r)?;
        Ok(Self {
            two_step_flag: flags & 0x01 != 0,
            slave_only: flags & 0x02 != 0,
            number_ports,
            priority1,
            priority2,
            clock_quality,
            clock_identity,
            domain_number,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        let flags = (self.two_step_flag as u8) | ((self.slave_only as u8) << 1);
        w.write_u8(flags)?;
        w.write_u8(0)?;
        w.write_u16(self.number_ports)?;
        w.write_u8(self.priority1)?;
        w.write_u8(self.priority2)?;
        self.clock_quality.encode(w)?;
        w.write_u8(self.domain_number)?;
        w.write_u8(0)?;
        self.clock_identity.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("twoStepFlag", Value::Bool(self.two_step_flag)),
            ("slaveOnly", Value::Bool(self.slave_only)),
            ("numberPorts", Value::from(self.number_ports)),
            ("priority1", Value::from(self.priority1)),
            ("priority2", Value::from(self.priority2)),
            (
                "clockQuality",
                obj(vec![
                    ("clockClass", Value::from(self.clock_quality.clock_class)),
                    ("clockAccuracy", Value::String(ClockAccuracy::emit(self.clock_quality.clock_accuracy))),
                    (
                        "offsetScaledLogVariance",
                        Value::from(self.clock_quality.offset_scaled_log_variance),
                    ),
                ]),
            ),
            ("domainNumber", Value::from(self.domain_number)),
            ("clockIdentity", Value::String(self.clock_identity.to_canonical_string())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("DEFAULT_DATA_SET is GET-only, not buildable from JSON".into()))
    }
}

/// `CURRENT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct CurrentDataSet {
    pub steps_removed: u16,
    pub offset_from_master: TimeInterval,
    pub mean_path_delay: TimeInterval,
}

impl CurrentDataSet {
    pub fn wire_len(&self) -> usize {
        2 + TimeInterval::WIRE_LEN * 2
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 2 + TimeInterval::WIRE_LEN * 2 {
            return Err(record_here!(Error::Length("CURRENT_DATA_SET needs 18 octets".into())));
        }
        Ok(Self {
            steps_removed: r.read_u16()?,
            offset_from_master: TimeInterval::decode(r)?,
            mean_path_delay: TimeInterval::decode(r)?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.steps_removed)?;
        self.offset_from_master.encode(w)?;
        self.mean_path_delay.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("stepsRemoved", Value::from(self.steps_removed)),
            ("offsetFromMaster", Value::from(self.offset_from_master.to_nanoseconds())),
            ("meanPathDelay", Value::from(self.mean_path_delay.to_nanoseconds())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("CURRENT_DATA_SET is GET-only, not buildable from JSON".into()))
    }
}

/// `PARENT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct ParentDataSet {
    pub parent_port_identity: PortIdentity,
    pub parent_stats: bool,
    pub observed_parent_offset_scaled_log_variance: u16,
    pub observed_parent_clock_phase_change_rate: i32,
    pub grandmaster_priority1: u8,
    pub grandmaster_priority2: u8,
    pub grandmaster_clock_quality: ClockQuality,
    pub grandmaster_identity: ClockIdentity,
}

impl ParentDataSet {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 2 + 2 + 4 + 1 + 1 + ClockQuality::WIRE_LEN + ClockIdentity::WIRE_LEN
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 32 {
            return Err(record_here!(Error::Length("PARENT_DATA_SET needs 32 octets".into())));
        }
        let parent_port_identity = PortIdentity::decode(r)?;
        let parent_stats = r.read_u8()? != 0;
        r.skip(1)?;
        let observed_parent_offset_scaled_log_variance = r.read_u16()?;
        let observed_parent_clock_phase_change_rate = r.read_i32()?;
        let grandmaster_priority1 = r.read_u8()?;
        let grandmaster_priority2 = r.read_u8()?;
        let grandmaster_clock_quality = ClockQuality::decode(r)?;
        let grandmaster_identity = ClockIdentity::decode(r)?;
        Ok(Self {
            parent_port_identity,
            parent_stats,
            observed_parent_offset_scaled_log_variance,
            observed_parent_clock_phase_change_rate,
            grandmaster_priority1,
            grandmaster_priority2,
            grandmaster_clock_quality,
            grandmaster_identity,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.parent_port_identity.encode(w)?;
        w.write_u8(self.parent_stats as u8)?;
        w.write_u8(0)?;
        w.write_u16(self.observed_parent_offset_scaled_log_variance)?;
        w.write_i32(self.observed_parent_clock_phase_change_rate)?;
        w.write_u8(self.grandmaster_priority1)?;
        w.write_u8(self.grandmaster_priority2)?;
        self.grandmaster_clock_quality.encode(w)?;
        self.grandmaster_identity.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("parentPortIdentity", Value::String(self.parent_port_identity.to_canonical_string())),
            ("parentStats", Value::Bool(self.parent_stats)),
            (
                "observedParentOffsetScaledLogVariance",
                Value::from(self.observed_parent_offset_scaled_log_variance),
            ),
            (
                "observedParentClockPhaseChangeRate",
                Value::from(self.observed_parent_clock_phase_change_rate),
            ),
            ("grandmasterPriority1", Value::from(self.grandmaster_priority1)),
            ("grandmasterPriority2", Value::from(self.grandmaster_priority2)),
            (
                "grandmasterClockQuality",
                obj(vec![
                    ("clockClass", Value::from(self.grandmaster_clock_quality.clock_class)),
                    (
                        "clockAccuracy",
                        Value::String(ClockAccuracy::emit(self.grandmaster_clock_quality.clock_accuracy)),
                    ),
                    (
                        "offsetScaledLogVariance",
                        Value::from(self.grandmaster_clock_quality.offset_scaled_log_variance),
                    ),
                ]),
            ),
            ("grandmasterIdentity", Value::String(self.grandmaster_identity.to_canonical_string())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PARENT_DATA_SET is GET-only, not buildable from JSON".into()))
    }
}

/// `TIME_PROPERTIES_DATA_SET`.
#[derive(Debug, Clone)]
pub struct TimePropertiesDataSet {
    pub current_utc_offset: i16,
    pub flags: Flags,
    pub time_source: u8,
}

impl TimePropertiesDataSet {
    pub fn wire_len(&self) -> usize {
        4
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 4 {
            return Err(record_here!(Error::Length("TIME_PROPERTIES_DATA_SET needs 4 octets".into())));
        }
        Ok(Self {
            current_utc_offset: r.read_i16()?,
            flags: Flags(r.read_u8()?),
            time_source: r.read_u8()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_i16(self.current_utc_offset)?;
        w.write_u8(self.flags.0)?;
        w.write_u8(self.time_source)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("currentUtcOffset", Value::from(self.current_utc_offset)),
            ("leap61", Value::Bool(self.flags.test(Flags::LI_61))),
            ("leap59", Value::Bool(self.flags.test(Flags::LI_59))),
            ("currentUtcOffsetValid", Value::Bool(self.flags.test(Flags::UTCV))),
            ("ptpTimescale", Value::Bool(self.flags.test(Flags::PTP_TIMESCALE))),
            ("timeTraceable", Value::Bool(self.flags.test(Flags::TIME_TRACEABLE))),
            ("frequencyTraceable", Value::Bool(self.flags.test(Flags::FREQUENCY_TRACEABLE))),
            ("timeSource", Value::String(TimeSource::emit(self.time_source))),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "TIME_PROPERTIES_DATA_SET")?;
        let mut flags = Flags::default();
        flags.set(Flags::LI_61, json_bool(o, "leap61")?);
        flags.set(Flags::LI_59, json_bool(o, "leap59")?);
        flags.set(Flags::UTCV, json_bool(o, "currentUtcOffsetValid")?);
        flags.set(Flags::PTP_TIMESCALE, json_bool(o, "ptpTimescale")?);
        flags.set(Flags::TIME_TRACEABLE, json_bool(o, "timeTraceable")?);
        flags.set(Flags::FREQUENCY_TRACEABLE, json_bool(o, "frequencyTraceable")?);
        let source_str = json_str(o, "timeSource")?;
        let time_source = TimeSource::from_str_ci(source_str)
            .map(|s| s as u8)
            .ok_or_else(|| Error::Json(format!("unknown timeSource: {source_str}")))?;
        Ok(Self {
            current_utc_offset: json_get(o, "currentUtcOffset")?
                .as_i64()
                .ok_or_else(|| Error::Json("currentUtcOffset must be an integer".into()))? as i16,
            flags,
            time_source,
        })
    }
}

/// `PORT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct PortDataSet {
    pub port_identity: PortIdentity,
    pub port_state: u8,
    pub log_min_delay_req_interval: i8,
    pub peer_mean_path_delay: TimeInterval,
    pub log_announce_interval: i8,
    pub announce_receipt_timeout: u8,
    pub log_sync_interval: i8,
    pub delay_mechanism: u8,
    pub log_min_pdelay_req_interval: i8,
    pub version_number: u8,
}

impl PortDataSet {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 1 + 1 + TimeInterval::WIRE_LEN + 1 + 1 + 1 + 1 + 1 + 1
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 26 {
            return Err(record_here!(Error::Length("PORT_DATA_SET needs 26 octets".into())));
        }
        Ok(Self {
            port_identity: PortIdentity::decode(r)?,
            port_state: r.read_u8()?,
            log_min_delay_req_interval: r.read_i8()?,
            peer_mean_path_delay: TimeInterval::decode(r)?,
            log_announce_interval: r.read_i8()?,
            announce_receipt_timeout: r.read_u8()?,
            log_sync_interval: r.read_i8()?,
            delay_mechanism: r.read_u8()?,
            log_min_pdelay_req_interval: r.read_i8()?,
            version_number: r.read_u8()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        w.write_u8(self.port_state)?;
        w.write_i8(self.log_min_delay_req_interval)?;
        self.peer_mean_path_delay.encode(w)?;
        w.write_i8(self.log_announce_interval)?;
        w.write_u8(self.announce_receipt_timeout)?;
        w.write_i8(self.log_sync_interval)?;
        w.write_u8(self.delay_mechanism)?;
        w.write_i8(self.log_min_pdelay_req_interval)?;
        w.write_u8(self.version_number)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            (
                "portState",
                Value::String(
                    crate::types::PortState::from_wire(self.port_state)
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| format!("0x{:02x}", self.port_state)),
                ),
            ),
            ("logMinDelayReqInterval", Value::from(self.log_min_delay_req_interval)),
            ("peerMeanPathDelay", Value::from(self.peer_mean_path_delay.to_nanoseconds())),
            ("logAnnounceInterval", Value::from(self.log_announce_interval)),
            ("announceReceiptTimeout", Value::from(self.announce_receipt_timeout)),
            ("logSyncInterval", Value::from(self.log_sync_interval)),
            (
                "delayMechanism",
                Value::from(self.delay_mechanism),
            ),
            ("logMinPdelayReqInterval", Value::from(self.log_min_pdelay_req_interval)),
            ("versionNumber", Value::from(self.version_number)),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PORT_DATA_SET is GET-only, not buildable from JSON".into()))
    }
}

/// `UTC_PROPERTIES`: the UTC-offset slice of the time-properties data set,
/// settable independently (linuxptp extension range reuse, §4.4).
#[derive(Debug, Clone)]
pub struct UtcProperties {
    pub current_utc_offset: i16,
    pub flags: Flags,
}

impl UtcProperties {
    pub fn wire_len(&self) -> usize {
        4
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 4 {
            return Err(record_here!(Error::Length("UTC_PROPERTIES needs 4 octets".into())));
        }
        let current_utc_offset = r.read_i16()?;
        let flags = Flags(r.read_u8()?);
        r.skip(1)?;
        Ok(Self { current_utc_offset, flags })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_i16(self.current_utc_offset)?;
        w.write_u8(self.flags.0)?;
        w.write_u8(0)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("currentUtcOffset", Value::from(self.current_utc_offset)),
            ("currentUtcOffsetValid", Value::Bool(self.flags.test(Flags::UTCV))),
            ("leap61", Value::Bool(self.flags.test(Flags::LI_61))),
            ("leap59", Value::Bool(self.flags.test(Flags::LI_59))),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "UTC_PROPERTIES")?;
        let mut flags = Flags::default();
        flags.set(Flags::UTCV, json_bool(o, "currentUtcOffsetValid")?);
        flags.set(Flags::LI_61, json_bool(o, "leap61")?);
        flags.set(Flags::LI_59, json_bool(o, "leap59")?);
        Ok(Self {
            current_utc_offset: json_get(o, "currentUtcOffset")?
                .as_i64()
                .ok_or_else(|| Error::Json("currentUtcOffset must be an integer".into()))? as i16,
            flags,
        })
    }
}

/// `TRACEABILITY_PROPERTIES`.
#[derive(Debug, Clone)]
pub struct TraceabilityProperties {
    pub flags: Flags,
}

impl TraceabilityProperties {
    pub fn wire_len(&self) -> usize {
        2
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 2 {
            return Err(record_here!(Error::Length("TRACEABILITY_PROPERTIES needs 2 octets".into())));
        }
        let flags = Flags(r.read_u8()?);
        r.skip(1)?;
        Ok(Self { flags })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.flags.0)?;
        w.write_u8(0)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("timeTraceable", Value::Bool(self.flags.test(Flags::TIME_TRACEABLE))),
            ("frequencyTraceable", Value::Bool(self.flags.test(Flags::FREQUENCY_TRACEABLE))),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "TRACEABILITY_PROPERTIES")?;
        let mut flags = Flags::default();
        flags.set(Flags::TIME_TRACEABLE, json_bool(o, "timeTraceable")?);
        flags.set(Flags::FREQUENCY_TRACEABLE, json_bool(o, "frequencyTraceable")?);
        Ok(Self { flags })
    }
}

/// `TIMESCALE_PROPERTIES`.
#[derive(Debug, Clone)]
pub struct TimescaleProperties {
    pub ptp_timescale: bool,
}

impl TimescaleProperties {
    pub fn wire_len(&self) -> usize {
        2
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 2 {
            return Err(record_here!(Error::Length("TIMESCALE_PROPERTIES needs 2 octets".into())));
        }
        let byte = r.read_u8()?;
        r.skip(1)?;
        Ok(Self {
            ptp_timescale: byte & Flags::PTP_TIMESCALE != 0,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(if self.ptp_timescale { Flags::PTP_TIMESCALE } else { 0 })?;
        w.write_u8(0)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![("ptpTimescale", Value::Bool(self.ptp_timescale))])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "TIMESCALE_PROPERTIES")?;
        Ok(Self {
            ptp_timescale: json_bool(o, "ptpTimescale")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClockAccuracy;

    fn sample_default_data_set() -> DefaultDataSet {
        DefaultDataSet {
            two_step_flag: true,
            slave_only: false,
            number_ports: 1,
            priority1: 128,
            priority2: 128,
            clock_quality: ClockQuality {
                clock_class: 248,
                clock_accuracy: ClockAccuracy::Within1Us as u8,
                offset_scaled_log_variance: 0xFFFF,
            },
            clock_identity: ClockIdentity([0xc4, 0x7d, 0x46, 0xff, 0xfe, 0x20, 0xac, 0xae]),
            domain_number: 0,
        }
    }

    #[test]
    fn default_data_set_round_trips_wire() {
        let payload = sample_default_data_set();
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        payload.encode(&mut w).unwrap();
        let len = w.position();
        assert_eq!(len, payload.wire_len());
        let mut r = Reader::new(&buf[..len]);
        let decoded = DefaultDataSet::decode(&mut r, len).unwrap();
        assert_eq!(decoded.priority1, 128);
        assert!(decoded.two_step_flag);
        assert!(!decoded.slave_only);
        assert_eq!(decoded.clock_identity.to_canonical_string(), payload.clock_identity.to_canonical_string());
    }

    #[test]
    fn default_data_set_is_get_only_in_json() {
        let payload = sample_default_data_set();
        let json = payload.to_json();
        assert_eq!(json["priority1"], Value::from(128));
        assert!(DefaultDataSet::from_json(&json).is_err());
    }

    #[test]
    fn default_data_set_decode_rejects_short_length() {
        let mut r = Reader::new(&[0u8; 10]);
        assert!(DefaultDataSet::decode(&mut r, 10).is_err());
    }

    #[test]
    fn timescale_properties_round_trips_json() {
        let payload = TimescaleProperties { ptp_timescale: true };
        let json = payload.to_json();
        let back = TimescaleProperties::from_json(&json).unwrap();
        assert!(back.ptp_timescale);
    }
}
