//! linuxptp-specific (`_NP`) management payloads. These sit outside the
//! IEEE 1588 managementId ranges and exist purely to expose `ptp4l`'s own
//! runtime state; their wire layout is implementation-defined, not
//! standardized, so it is pinned here rather than derived from a table.

use super::{json_bool, json_get, json_object, json_str, json_u64};
use crate::error::{record_here, Error, Result};
use crate::types::{ClockAccuracy, LinuxptpPowerProfileVersion, LinuxptpTimeStamp, LinuxptpUnicastState, PortState};
use crate::wire::{ClockIdentity, ClockQuality, PortIdentity, PtpText, Reader, TimeInterval, Writer};
use crate::types::PortAddress;
use serde_json::{Map, Value};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Object(m)
}

/// Number of PTP message-type counters carried by `PORT_STATS_NP`'s rx/tx
/// arrays, mirroring linuxptp's own fixed `MAX_MESSAGE_TYPES` sizing.
const NP_MSG_TYPE_COUNT: usize = 14;

/// `TIME_STATUS_NP`.
#[derive(Debug, Clone)]
pub struct TimeStatusNp {
    pub master_offset: i64,
    pub ingress_time: i64,
    pub cumulative_scaled_rate_offset: i32,
    pub scaled_last_gm_phase_change: i32,
    pub gm_time_base_indicator: u16,
    pub last_gm_phase_change: TimeInterval,
    pub gm_present: u32,
    pub gm_identity: ClockIdentity,
}

impl TimeStatusNp {
    pub fn wire_len(&self) -> usize {
        8 + 8 + 4 + 4 + 2 + TimeInterval::WIRE_LEN + 4 + ClockIdentity::WIRE_LEN
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 46 {
            return Err(record_here!(Error::Length("TIME_STATUS_NP needs 46 octets".into())));
        }
        Ok(Self {
            master_offset: r.read_i64()?,
            ingress_time: r.read_i64()?,
            cumulative_scaled_rate_offset: r.read_i32()?,
            scaled_last_gm_phase_change: r.read_i32()?,
            gm_time_base_indicator: r.read_u16()?,
            last_gm_phase_change: TimeInterval::decode(r)?,
            gm_present: r.read_u32()?,
            gm_identity: ClockIdentity::decode(r)?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_i64(self.master_offset)?;
        w.write_i64(self.ingress_time)?;
        w.write_i32(self.cumulative_scaled_rate_offset)?;
        w.write_i32(self.scaled_last_gm_phase_change)?;
        w.write_u16(self.gm_time_base_indicator)?;
        self.last_gm_phase_change.encode(w)?;
        w.write_u32(self.gm_present)?;
        self.gm_identity.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("master_offset", Value::from(self.master_offset)),
            ("ingress_time", Value::from(self.ingress_time)),
            ("cumulativeScaledRateOffset", Value::from(self.cumulative_scaled_rate_offset)),
            ("scaledLastGmPhaseChange", Value::from(self.scaled_last_gm_phase_change)),
            ("gmTimeBaseIndicator", Value::from(self.gm_time_base_indicator)),
            ("lastGmPhaseChange", Value::from(self.last_gm_phase_change.to_nanoseconds())),
            ("gmPresent", Value::from(self.gm_present)),
            ("gmIdentity", Value::String(self.gm_identity.to_canonical_string())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("TIME_STATUS_NP is GET-only, not buildable from JSON".into()))
    }
}

/// `GRANDMASTER_SETTINGS_NP`.
#[derive(Debug, Clone)]
pub struct GrandmasterSettingsNp {
    pub clock_quality: ClockQuality,
    pub current_utc_offset: i16,
    pub flags: u8,
    pub time_source: u8,
}

impl GrandmasterSettingsNp {
    pub fn wire_len(&self) -> usize {
        ClockQuality::WIRE_LEN + 2 + 1 + 1
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 8 {
            return Err(record_here!(Error::Length("GRANDMASTER_SETTINGS_NP needs 8 octets".into())));
        }
        Ok(Self {
            clock_quality: ClockQuality::decode(r)?,
            current_utc_offset: r.read_i16()?,
            flags: r.read_u8()?,
            time_source: r.read_u8()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.clock_quality.encode(w)?;
        w.write_i16(self.current_utc_offset)?;
        w.write_u8(self.flags)?;
        w.write_u8(self.time_source)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
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
            ("currentUtcOffset", Value::from(self.current_utc_offset)),
            ("flags", Value::from(self.flags)),
            ("timeSource", Value::String(crate::types::TimeSource::emit(self.time_source))),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "GRANDMASTER_SETTINGS_NP")?;
        let cq = json_object(json_get(o, "clockQuality")?, "clockQuality")?;
        let accuracy_str = json_str(cq, "clockAccuracy")?;
        let clock_accuracy = ClockAccuracy::from_str_ci(accuracy_str)
            .map(|a| a as u8)
            .ok_or_else(|| Error::Json(format!("unknown clockAccuracy: {accuracy_str}")))?;
        let source_str = json_str(o, "timeSource")?;
        let time_source = crate::types::TimeSource::from_str_ci(source_str)
            .map(|s| s as u8)
            .ok_or_else(|| Error::Json(format!("unknown timeSource: {source_str}")))?;
        Ok(Self {
            clock_quality: ClockQuality {
                clock_class: json_u64(cq, "clockClass")? as u8,
                clock_accuracy,
                offset_scaled_log_variance: json_u64(cq, "offsetScaledLogVariance")? as u16,
            },
            current_utc_offset: json_get(o, "currentUtcOffset")?
                .as_i64()
                .ok_or_else(|| Error::Json("currentUtcOffset must be an integer".into()))? as i16,
            flags: json_u64(o, "flags")? as u8,
            time_source,
        })
    }
}

/// `PORT_DATA_SET_NP`.
#[derive(Debug, Clone)]
pub struct PortDataSetNp {
    pub neighbor_prop_delay_thresh: u32,
    pub as_capable: bool,
}

impl PortDataSetNp {
    pub fn wire_len(&self) -> usize {
        8
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 8 {
            return Err(record_here!(Error::Length("PORT_DATA_SET_NP needs 8 octets".into())));
        }
        Ok(Self {
            neighbor_prop_delay_thresh: r.read_u32()?,
            as_capable: r.read_i32()? != 0,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u32(self.neighbor_prop_delay_thresh)?;
        w.write_i32(self.as_capable as i32)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("neighborPropDelayThresh", Value::from(self.neighbor_prop_delay_thresh)),
            ("asCapable", Value::Bool(self.as_capable)),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "PORT_DATA_SET_NP")?;
        Ok(Self {
            neighbor_prop_delay_thresh: json_u64(o, "neighborPropDelayThresh")? as u32,
            as_capable: json_bool(o, "asCapable")?,
        })
    }
}

/// `SUBSCRIBE_EVENTS_NP`.
#[derive(Debug, Clone)]
pub struct SubscribeEventsNp {
    pub duration: u16,
    pub bitmask: [u8; 8],
}

impl SubscribeEventsNp {
    pub fn wire_len(&self) -> usize {
        2 + 8
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 10 {
            return Err(record_here!(Error::Length("SUBSCRIBE_EVENTS_NP needs 10 octets".into())));
        }
        Ok(Self {
            duration: r.read_u16()?,
            bitmask: r.read_array::<8>()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.duration)?;
        w.write_bytes(&self.bitmask)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("duration", Value::from(self.duration)),
            (
                "bitmask",
                Value::String(self.bitmask.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")),
            ),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "SUBSCRIBE_EVENTS_NP")?;
        let hex = json_str(o, "bitmask")?;
        let bytes: Vec<u8> = hex
            .split(':')
            .filter(|p| !p.is_empty())
            .map(|p| u8::from_str_radix(p, 16).map_err(|_| Error::Json(format!("invalid hex octet: {p}"))))
            .collect::<Result<_>>()?;
        let bitmask: [u8; 8] = bytes
            .try_into()
            .map_err(|_| Error::Json("bitmask must be exactly 8 octets".into()))?;
        Ok(Self {
            duration: json_u64(o, "duration")? as u16,
            bitmask,
        })
    }
}

/// `PORT_PROPERTIES_NP`.
#[derive(Debug, Clone)]
pub struct PortPropertiesNp {
    pub port_identity: PortIdentity,
    pub port_state: u8,
    pub timestamping: u8,
    pub interface: PtpText,
}

impl PortPropertiesNp {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 1 + 1 + self.interface.wire_len()
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let _ = len;
        Ok(Self {
            port_identity: PortIdentity::decode(r)?,
            port_state: r.read_u8()?,
            timestamping: r.read_u8()?,
            interface: PtpText::decode(r)?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        w.write_u8(self.port_state)?;
        w.write_u8(self.timestamping)?;
        self.interface.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            (
                "portState",
                Value::String(
                    PortState::from_wire(self.port_state)
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| format!("0x{:02x}", self.port_state)),
                ),
            ),
            (
                "timestamping",
                Value::String(
                    LinuxptpTimeStamp::from_wire(self.timestamping)
                        .map(|t| t.as_str().to_string())
                        .unwrap_or_else(|| format!("0x{:02x}", self.timestamping)),
                ),
            ),
            ("interface", Value::String(self.interface.0.clone())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PORT_PROPERTIES_NP is GET-only, not buildable from JSON".into()))
    }
}

/// `PORT_STATS_NP`.
#[derive(Debug, Clone)]
pub struct PortStatsNp {
    pub port_identity: PortIdentity,
    pub rx_msg_type: [u64; NP_MSG_TYPE_COUNT],
    pub tx_msg_type: [u64; NP_MSG_TYPE_COUNT],
}

impl PortStatsNp {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 8 * NP_MSG_TYPE_COUNT * 2
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < Self::min_len() {
            return Err(record_here!(Error::Length(format!(
                "PORT_STATS_NP needs {} octets",
                Self::min_len()
            ))));
        }
        let port_identity = PortIdentity::decode(r)?;
        let mut rx_msg_type = [0u64; NP_MSG_TYPE_COUNT];
        for slot in rx_msg_type.iter_mut() {
            *slot = r.read_u64()?;
        }
        let mut tx_msg_type = [0u64; NP_MSG_TYPE_COUNT];
        for slot in tx_msg_type.iter_mut() {
            *slot = r.read_u64()?;
        }
        Ok(Self {
            port_identity,
            rx_msg_type,
            tx_msg_type,
        })
    }

    fn min_len() -> usize {
        PortIdentity::WIRE_LEN + 8 * NP_MSG_TYPE_COUNT * 2
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        for v in self.rx_msg_type {
            w.write_u64(v)?;
        }
        for v in self.tx_msg_type {
            w.write_u64(v)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            ("rxMsgType", Value::Array(self.rx_msg_type.iter().map(|v| Value::from(*v)).collect())),
            ("txMsgType", Value::Array(self.tx_msg_type.iter().map(|v| Value::from(*v)).collect())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PORT_STATS_NP is GET-only, not buildable from JSON".into()))
    }
}

/// `PORT_SERVICE_STATS_NP`.
#[derive(Debug, Clone, Default)]
pub struct PortServiceStatsNp {
    pub port_identity: PortIdentity,
    pub announce_timeout: u64,
    pub sync_timeout: u64,
    pub delay_timeout: u64,
    pub unicast_service_timeout: u64,
    pub unicast_request_timeout: u64,
    pub master_announce_timeout: u64,
    pub master_sync_timeout: u64,
    pub qualification_timeout: u64,
    pub sync_mismatch: u64,
    pub followup_mismatch: u64,
}

impl PortServiceStatsNp {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 8 * 10
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < PortIdentity::WIRE_LEN + 80 {
            return Err(record_here!(Error::Length("PORT_SERVICE_STATS_NP needs 90 octets".into())));
        }
        Ok(Self {
            port_identity: PortIdentity::decode(r)?,
            announce_timeout: r.read_u64()?,
            sync_timeout: r.read_u64()?,
            delay_timeout: r.read_u64()?,
            unicast_service_timeout: r.read_u64()?,
            unicast_request_timeout: r.read_u64()?,
            master_announce_timeout: r.read_u64()?,
            master_sync_timeout: r.read_u64()?,
            qualification_timeout: r.read_u64()?,
            sync_mismatch: r.read_u64()?,
            followup_mismatch: r.read_u64()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        for v in [
            self.announce_timeout,
            self.sync_timeout,
            self.delay_timeout,
            self.unicast_service_timeout,
            self.unicast_request_timeout,
            self.master_announce_timeout,
            self.master_sync_timeout,
            self.qualification_timeout,
            self.sync_mismatch,
            self.followup_mismatch,
        ] {
            w.write_u64(v)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            ("announce_timeout", Value::from(self.announce_timeout)),
            ("sync_timeout", Value::from(self.sync_timeout)),
            ("delay_timeout", Value::from(self.delay_timeout)),
            ("unicast_service_timeout", Value::from(self.unicast_service_timeout)),
            ("unicast_request_timeout", Value::from(self.unicast_request_timeout)),
            ("master_announce_timeout", Value::from(self.master_announce_timeout)),
            ("master_sync_timeout", Value::from(self.master_sync_timeout)),
            ("qualification_timeout", Value::from(self.qualification_timeout)),
            ("sync_mismatch", Value::from(self.sync_mismatch)),
            ("followup_mismatch", Value::from(self.followup_mismatch)),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PORT_SERVICE_STATS_NP is GET-only, not buildable from JSON".into()))
    }
}

/// One row of `UNICAST_MASTER_TABLE_NP`.
#[derive(Debug, Clone)]
pub struct UnicastMasterEntry {
    pub port_identity: PortIdentity,
    pub clock_quality: ClockQuality,
    pub selected: bool,
    pub port_state: u8,
    pub priority1: u8,
    pub priority2: u8,
    pub port_address: PortAddress,
}

/// `UNICAST_MASTER_TABLE_NP`.
#[derive(Debug, Clone)]
pub struct UnicastMasterTableNp {
    pub actual_table_size: u16,
    pub unicast_masters: Vec<UnicastMasterEntry>,
}

impl UnicastMasterTableNp {
    pub fn wire_len(&self) -> usize {
        2 + self
            .unicast_masters
            .iter()
            .map(|e| PortIdentity::WIRE_LEN + ClockQuality::WIRE_LEN + 4 + e.port_address.wire_len())
            .sum::<usize>()
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let start = r.position();
        let actual_table_size = r.read_u16()?;
        let mut unicast_masters = Vec::with_capacity(actual_table_size as usize);
        for _ in 0..actual_table_size {
            let port_identity = PortIdentity::decode(r)?;
            let clock_quality = ClockQuality::decode(r)?;
            let selected = r.read_u8()? != 0;
            let port_state = r.read_u8()?;
            let priority1 = r.read_u8()?;
            let priority2 = r.read_u8()?;
            let port_address = PortAddress::decode(r)?;
            unicast_masters.push(UnicastMasterEntry {
                port_identity,
                clock_quality,
                selected,
                port_state,
                priority1,
                priority2,
                port_address,
            });
        }
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length("UNICAST_MASTER_TABLE_NP overran its TLV length".into())));
        }
        Ok(Self {
            actual_table_size,
            unicast_masters,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.unicast_masters.len() as u16)?;
        for e in &self.unicast_masters {
            e.port_identity.encode(w)?;
            e.clock_quality.encode(w)?;
            w.write_u8(e.selected as u8)?;
            w.write_u8(e.port_state)?;
            w.write_u8(e.priority1)?;
            w.write_u8(e.priority2)?;
            e.port_address.encode(w)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("actualTableSize", Value::from(self.actual_table_size)),
            (
                "unicast_masters",
                Value::Array(
                    self.unicast_masters
                        .iter()
                        .map(|e| {
                            obj(vec![
                                ("portIdentity", Value::String(e.port_identity.to_canonical_string())),
                                (
                                    "clockQuality",
                                    obj(vec![
                                        ("clockClass", Value::from(e.clock_quality.clock_class)),
                                        (
                                            "clockAccuracy",
                                            Value::String(ClockAccuracy::emit(e.clock_quality.clock_accuracy)),
                                        ),
                                        (
                                            "offsetScaledLogVariance",
                                            Value::from(e.clock_quality.offset_scaled_log_variance),
                                        ),
                                    ]),
                                ),
                                ("selected", Value::Bool(e.selected)),
                                (
                                    "portState",
                                    Value::String(
                                        LinuxptpUnicastState::from_wire(e.port_state)
                                            .map(|s| s.as_str().to_string())
                                            .unwrap_or_else(|| format!("0x{:02x}", e.port_state)),
                                    ),
                                ),
                                ("priority1", Value::from(e.priority1)),
                                ("priority2", Value::from(e.priority2)),
                                ("portAddress", Value::String(e.port_address.address_to_string())),
                            ])
                        })
                        .collect(),
                ),
            ),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("UNICAST_MASTER_TABLE_NP is GET-only, not buildable from JSON".into()))
    }
}

/// `PORT_HWCLOCK_NP`.
#[derive(Debug, Clone)]
pub struct PortHwclockNp {
    pub port_identity: PortIdentity,
    pub phc_index: i32,
    pub flags: u8,
}

impl PortHwclockNp {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 4 + 1 + 1
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 16 {
            return Err(record_here!(Error::Length("PORT_HWCLOCK_NP needs 16 octets".into())));
        }
        let port_identity = PortIdentity::decode(r)?;
        let phc_index = r.read_i32()?;
        let flags = r.read_u8()?;
        r.skip(1)?;
        Ok(Self {
            port_identity,
            phc_index,
            flags,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        w.write_i32(self.phc_index)?;
        w.write_u8(self.flags)?;
        w.write_u8(0)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            ("phc_index", Value::from(self.phc_index)),
            ("flags", Value::from(self.flags)),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PORT_HWCLOCK_NP is GET-only, not buildable from JSON".into()))
    }
}

/// `POWER_PROFILE_SETTINGS_NP`.
#[derive(Debug, Clone)]
pub struct PowerProfileSettingsNp {
    pub version: u16,
    pub grandmaster_id: u16,
    pub grandmaster_time_inaccuracy: u32,
    pub network_time_inaccuracy: u32,
    pub total_time_inaccuracy: u32,
}

impl PowerProfileSettingsNp {
    pub fn wire_len(&self) -> usize {
        2 + 2 + 4 + 4 + 4
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 16 {
            return Err(record_here!(Error::Length("POWER_PROFILE_SETTINGS_NP needs 16 octets".into())));
        }
        Ok(Self {
            version: r.read_u16()?,
            grandmaster_id: r.read_u16()?,
            grandmaster_time_inaccuracy: r.read_u32()?,
            network_time_inaccuracy: r.read_u32()?,
            total_time_inaccuracy: r.read_u32()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.version)?;
        w.write_u16(self.grandmaster_id)?;
        w.write_u32(self.grandmaster_time_inaccuracy)?;
        w.write_u32(self.network_time_inaccuracy)?;
        w.write_u32(self.total_time_inaccuracy)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            (
                "version",
                Value::String(
                    LinuxptpPowerProfileVersion::from_wire(self.version)
                        .map(|v| v.as_str().to_string())
                        .unwrap_or_else(|| format!("0x{:04x}", self.version)),
                ),
            ),
            ("grandmasterID", Value::from(self.grandmaster_id)),
            ("grandmasterTimeInaccuracy", Value::from(self.grandmaster_time_inaccuracy)),
            ("networkTimeInaccuracy", Value::from(self.network_time_inaccuracy)),
            ("totalTimeInaccuracy", Value::from(self.total_time_inaccuracy)),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "POWER_PROFILE_SETTINGS_NP")?;
        let version_str = json_str(o, "version")?;
        let version = match version_str {
            "NONE" => LinuxptpPowerProfileVersion::None as u16,
            "IEEE_C37_238_2011" => LinuxptpPowerProfileVersion::Ieee2011 as u16,
            "IEEE_C37_238_2017" => LinuxptpPowerProfileVersion::Ieee2017 as u16,
            other => return Err(Error::Json(format!("unknown power profile version: {other}"))),
        };
        Ok(Self {
            version,
            grandmaster_id: json_u64(o, "grandmasterID")? as u16,
            grandmaster_time_inaccuracy: json_u64(o, "grandmasterTimeInaccuracy")? as u32,
            network_time_inaccuracy: json_u64(o, "networkTimeInaccuracy")? as u32,
            total_time_inaccuracy: json_u64(o, "totalTimeInaccuracy")? as u32,
        })
    }
}

/// `CMLDS_INFO_NP`.
#[derive(Debug, Clone)]
pub struct CmldsInfoNp {
    pub mean_link_delay: TimeInterval,
    pub scaled_neighbor_rate_ratio: i32,
    pub as_capable: bool,
}

impl CmldsInfoNp {
    pub fn wire_len(&self) -> usize {
        TimeInterval::WIRE_LEN + 4 + 1 + 3
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 16 {
            return Err(record_here!(Error::Length("CMLDS_INFO_NP needs 16 octets".into())));
        }
        let mean_link_delay = TimeInterval::decode(r)?;
        let scaled_neighbor_rate_ratio = r.read_i32()?;
        let as_capable = r.read_u8()? != 0;
        r.skip(3)?;
        Ok(Self {
            mean_link_delay,
            scaled_neighbor_rate_ratio,
            as_capable,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.mean_link_delay.encode(w)?;
        w.write_i32(self.scaled_neighbor_rate_ratio)?;
        w.write_u8(self.as_capable as u8)?;
        w.write_zeros(3)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("meanLinkDelay", Value::from(self.mean_link_delay.to_nanoseconds())),
            ("scaledNeighborRateRatio", Value::from(self.scaled_neighbor_rate_ratio)),
            ("as_capable", Value::Bool(self.as_capable)),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("CMLDS_INFO_NP is GET-only, not buildable from JSON".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_status_np_round_trips_wire() {
        let payload = TimeStatusNp {
            master_offset: -1234,
            ingress_time: 999_999_999,
            cumulative_scaled_rate_offset: 42,
            scaled_last_gm_phase_change: 0,
            gm_time_base_indicator: 1,
            last_gm_phase_change: TimeInterval(0),
            gm_present: 1,
            gm_identity: ClockIdentity([0xc4, 0x7d, 0x46, 0xff, 0xfe, 0x20, 0xac, 0xae]),
        };
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        payload.encode(&mut w).unwrap();
        let len = w.position();
        assert_eq!(len, payload.wire_len());
        let mut r = Reader::new(&buf[..len]);
        let decoded = TimeStatusNp::decode(&mut r, len).unwrap();
        assert_eq!(decoded.master_offset, -1234);
        assert_eq!(decoded.ingress_time, 999_999_999);
    }

    #[test]
    fn subscribe_events_np_round_trips_bitmask_through_json() {
        let payload = SubscribeEventsNp {
            duration: 60,
            bitmask: [0xff, 0, 0, 0, 0, 0, 0, 0],
        };
        let mut buf = [0u8; 16];
        let mut w = Writer::new(&mut buf);
        payload.encode(&mut w).unwrap();
        let len = w.position();
        let mut r = Reader::new(&buf[..len]);
        let decoded = SubscribeEventsNp::decode(&mut r, len).unwrap();
        assert_eq!(decoded.duration, 60);
        assert_eq!(decoded.bitmask, payload.bitmask);

        let json = decoded.to_json();
        let back = SubscribeEventsNp::from_json(&json).unwrap();
        assert_eq!(back.bitmask, payload.bitmask);
        assert_eq!(back.duration, 60);
    }

    #[test]
    fn subscribe_events_np_from_json_rejects_wrong_bitmask_length() {
        let json = obj(vec![
            ("duration", Value::from(60)),
            ("bitmask", Value::String("ff:00".to_string())),
        ]);
        assert!(SubscribeEventsNp::from_json(&json).is_err());
    }

    #[test]
    fn time_status_np_decode_rejects_short_length() {
        let mut r = Reader::new(&[0u8; 10]);
        assert!(TimeStatusNp::decode(&mut r, 10).is_err());
    }
}
