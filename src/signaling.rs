//! Signaling TLVs (§3.2's `tlvType` enumeration, signaling-only members).
//!
//! Unlike a management message (one TLV, `actionField`-scoped), a SIGNALING
//! message carries zero or more TLVs back to back; [`SignalingTlv::decode_all`]
//! walks a buffer until it is exhausted, per §4.2's traversal contract.

use crate::error::{record_here, Error, Result};
use crate::management_id::ManagementId;
use crate::tlv::{ManagementErrorId, ManagementErrorStatus, Payload};
use crate::types::{PortAddress, TlvType};
use crate::wire::{ClockIdentity, PortIdentity, Reader, TimeInterval, Timestamp, Writer};
use serde_json::{Map, Value};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Object(m)
}

/// `PATH_TRACE` signaling TLV: the same clockIdentity chain as the
/// management `PATH_TRACE_LIST`, carried unsolicited on Announce-adjacent
/// signaling exchanges.
#[derive(Debug, Clone)]
pub struct PathTrace {
    pub path_sequence: Vec<ClockIdentity>,
}

/// `ORGANIZATION_EXTENSION` (both the propagate and do-not-propagate variants
/// share this shape; only the `tlvType` discriminant differs).
#[derive(Debug, Clone)]
pub struct OrganizationExtension {
    pub organization_id: [u8; 3],
    pub organization_sub_type: [u8; 3],
    pub data_field: Vec<u8>,
}

/// `ALTERNATE_TIME_OFFSET_INDICATOR`.
#[derive(Debug, Clone)]
pub struct AlternateTimeOffsetIndicator {
    pub key_field: u8,
    pub current_offset: i32,
    pub jump_seconds: i32,
    pub time_of_next_jump: u64,
    pub display_name: crate::wire::PtpText,
}

/// `L1_SYNC`.
#[derive(Debug, Clone)]
pub struct L1Sync {
    pub tx_coherent_is_required: bool,
    pub rx_coherent_is_required: bool,
    pub congruent_is_required: bool,
    pub optional_tlv_present: bool,
}

/// `PORT_COMMUNICATION_AVAILABILITY`.
#[derive(Debug, Clone)]
pub struct PortCommunicationAvailability {
    pub sync_message_availability: u8,
    pub delay_resp_message_availability: u8,
}

/// `PROTOCOL_ADDRESS`.
#[derive(Debug, Clone)]
pub struct ProtocolAddress {
    pub port_address: PortAddress,
}

/// `CUMULATIVE_RATE_RATIO`.
#[derive(Debug, Clone)]
pub struct CumulativeRateRatio {
    pub scaled_cumulative_rate_ratio: i32,
}

/// One row of `SLAVE_RX_SYNC_TIMING_DATA`.
#[derive(Debug, Clone)]
pub struct SyncTimingRecord {
    pub sequence_id: u16,
    pub sync_origin_timestamp: Timestamp,
    pub total_correction_field: i64,
    pub scaled_cumulative_rate_ratio: i32,
    pub sync_event_ingress_timestamp: Timestamp,
    pub total_correction_field_2: i64,
}

/// `SLAVE_RX_SYNC_TIMING_DATA`.
#[derive(Debug, Clone)]
pub struct SlaveRxSyncTimingData {
    pub sync_source_port_identity: PortIdentity,
    pub records: Vec<SyncTimingRecord>,
}

/// One row of `SLAVE_RX_SYNC_COMPUTED_DATA`.
#[derive(Debug, Clone)]
pub struct SyncComputedRecord {
    pub sequence_id: u16,
    pub offset_from_master: TimeInterval,
    pub mean_path_delay: TimeInterval,
    pub scaled_neighbor_rate_ratio: i32,
}

/// `SLAVE_RX_SYNC_COMPUTED_DATA`.
#[derive(Debug, Clone)]
pub struct SlaveRxSyncComputedData {
    pub sync_source_port_identity: PortIdentity,
    pub computed_flags: u8,
    pub scaled_neighbor_rate_ratio_valid: bool,
    pub records: Vec<SyncComputedRecord>,
}

/// One row of `SLAVE_TX_EVENT_TIMESTAMPS`.
#[derive(Debug, Clone)]
pub struct EventTimestampRecord {
    pub sequence_id: u16,
    pub event_egress_timestamp: Timestamp,
}

/// `SLAVE_TX_EVENT_TIMESTAMPS`.
#[derive(Debug, Clone)]
pub struct SlaveTxEventTimestamps {
    pub source_port_identity: PortIdentity,
    pub event_message_type: u8,
    pub records: Vec<EventTimestampRecord>,
}

/// `ENHANCED_ACCURACY_METRICS`.
#[derive(Debug, Clone)]
pub struct EnhancedAccuracyMetrics {
    pub bc_hop_count: u8,
    pub tc_hop_count: u8,
    pub max_ge_tc: f64,
    pub max_ge_bc: f64,
    pub max_ge_combined: f64,
    pub variance_explained_max: f64,
}

/// `SLAVE_DELAY_TIMING_DATA_NP`.
#[derive(Debug, Clone)]
pub struct SlaveDelayTimingDataNp {
    pub source_port_identity: PortIdentity,
    pub records: Vec<DelayTimingRecord>,
}

/// One row of `SLAVE_DELAY_TIMING_DATA_NP`.
#[derive(Debug, Clone)]
pub struct DelayTimingRecord {
    pub sequence_id: u16,
    pub delay_origin_timestamp: Timestamp,
    pub delay_response_timestamp: Timestamp,
}

/// Any signaling TLV this codec understands, tagged by [`TlvType`].
#[derive(Debug, Clone)]
pub enum SignalingTlv {
    PathTrace(PathTrace),
    OrganizationExtensionPropagate(OrganizationExtension),
    OrganizationExtensionDoNotPropagate(OrganizationExtension),
    AlternateTimeOffsetIndicator(AlternateTimeOffsetIndicator),
    L1Sync(L1Sync),
    PortCommunicationAvailability(PortCommunicationAvailability),
    ProtocolAddress(ProtocolAddress),
    CumulativeRateRatio(CumulativeRateRatio),
    SlaveRxSyncTimingData(SlaveRxSyncTimingData),
    SlaveRxSyncComputedData(SlaveRxSyncComputedData),
    SlaveTxEventTimestamps(SlaveTxEventTimestamps),
    EnhancedAccuracyMetrics(EnhancedAccuracyMetrics),
    SlaveDelayTimingDataNp(SlaveDelayTimingDataNp),
    /// A `MANAGEMENT` TLV embedded in a signaling message (§8 Boundary Case
    /// 5): decoded through the same registry a standalone management
    /// message uses.
    Management {
        management_id: Option<ManagementId>,
        management_id_raw: u16,
        payload: Payload,
    },
    /// A `MANAGEMENT_ERROR_STATUS` TLV embedded in a signaling message.
    ManagementError(ManagementErrorStatus),
    /// Any other unrecognized `tlvType` is preserved raw so traversal never
    /// loses data.
    Unknown { tlv_type: u16, data: Vec<u8> },
}

impl SignalingTlv {
    /// Decode every TLV in `buf`, in order, stopping when fewer than 4
    /// octets (a TLV header) remain.
    pub fn decode_all(buf: &[u8]) -> Result<Vec<Self>> {
        let mut r = Reader::new(buf);
        let mut out = Vec::new();
        while r.remaining() >= 4 {
            out.push(Self::decode_one(&mut r)?);
        }
        Ok(out)
    }

    fn decode_one(r: &mut Reader) -> Result<Self> {
        let tlv_type_raw = r.read_u16()?;
        let length = r.read_u16()? as usize;
        let start = r.position();
        let tlv = match TlvType::from_wire(tlv_type_raw) {
            Some(TlvType::PathTrace) => {
                if length % ClockIdentity::WIRE_LEN != 0 {
                    return Err(record_here!(Error::Length("PATH_TRACE length not a multiple of 8".into())));
                }
                let count = length / ClockIdentity::WIRE_LEN;
                let mut path_sequence = Vec::with_capacity(count);
                for _ in 0..count {
                    path_sequence.push(ClockIdentity::decode(r)?);
                }
                Self::PathTrace(PathTrace { path_sequence })
            }
            Some(TlvType::OrganizationExtensionPropagate) | Some(TlvType::OrganizationExtension) => {
                let org = decode_org_ext(r, length)?;
                Self::OrganizationExtensionPropagate(org)
            }
            Some(TlvType::OrganizationExtensionDoNotPropagate) => {
                let org = decode_org_ext(r, length)?;
                Self::OrganizationExtensionDoNotPropagate(org)
            }
            Some(TlvType::AlternateTimeOffsetIndicator) => {
                let key_field = r.read_u8()?;
                let current_offset = r.read_i32()?;
                let jump_seconds = r.read_i32()?;
                let time_of_next_jump = r.read_u48()?;
                let display_name = crate::wire::PtpText::decode(r)?;
                Self::AlternateTimeOffsetIndicator(AlternateTimeOffsetIndicator {
                    key_field,
                    current_offset,
                    jump_seconds,
                    time_of_next_jump,
                    display_name,
                })
            }
            Some(TlvType::L1Sync) => {
                let flags = r.read_u16()?;
                Self::L1Sync(L1Sync {
                    tx_coherent_is_required: flags & 0x0001 != 0,
                    rx_coherent_is_required: flags & 0x0002 != 0,
                    congruent_is_required: flags & 0x0004 != 0,
                    optional_tlv_present: flags & 0x0008 != 0,
                })
            }
            Some(TlvType::PortCommunicationAvailability) => {
                let sync_message_availability = r.read_u8()?;
                let delay_resp_message_availability = r.read_u8()?;
                Self::PortCommunicationAvailability(PortCommunicationAvailability {
                    sync_message_availability,
                    delay_resp_message_availability,
                })
            }
            Some(TlvType::ProtocolAddress) => Self::ProtocolAddress(ProtocolAddress {
                port_address: PortAddress::decode(r)?,
            }),
            Some(TlvType::CumulativeRateRatio) => Self::CumulativeRateRatio(CumulativeRateRatio {
                scaled_cumulative_rate_ratio: r.read_i32()?,
            }),
            Some(TlvType::SlaveRxSyncTimingData) => {
                let sync_source_port_identity = PortIdentity::decode(r)?;
                let mut records = Vec::new();
                while r.position() - start < length {
                    records.push(SyncTimingRecord {
                        sequence_id: r.read_u16()?,
                        sync_origin_timestamp: Timestamp::decode(r)?,
                        total_correction_field: r.read_i64()?,
                        scaled_cumulative_rate_ratio: r.read_i32()?,
                        sync_event_ingress_timestamp: Timestamp::decode(r)?,
                        total_correction_field_2: r.read_i64()?,
                    });
                }
                Self::SlaveRxSyncTimingData(SlaveRxSyncTimingData {
                    sync_source_port_identity,
                    records,
                })
            }
            Some(TlvType::SlaveRxSyncComputedData) => {
                let sync_source_port_identity = PortIdentity::decode(r)?;
                let computed_flags = r.read_u8()?;
                r.skip(1)?;
                let mut records = Vec::new();
                while r.position() - start < length {
                    records.push(SyncComputedRecord {
                        sequence_id: r.read_u16()?,
                        offset_from_master: TimeInterval::decode(r)?,
                        mean_path_delay: TimeInterval::decode(r)?,
                        scaled_neighbor_rate_ratio: r.read_i32()?,
                    });
                }
                Self::SlaveRxSyncComputedData(SlaveRxSyncComputedData {
                    sync_source_port_identity,
                    computed_flags,
                    scaled_neighbor_rate_ratio_valid: computed_flags & 0x01 != 0,
                    records,
                })
            }
            Some(TlvType::SlaveTxEventTimestamps) => {
                let source_port_identity = PortIdentity::decode(r)?;
                let event_message_type = r.read_u8()?;
                r.skip(1)?;
                let mut records = Vec::new();
                while r.position() - start < length {
                    records.push(EventTimestampRecord {
                        sequence_id: r.read_u16()?,
                        event_egress_timestamp: Timestamp::decode(r)?,
                    });
                }
                Self::SlaveTxEventTimestamps(SlaveTxEventTimestamps {
                    source_port_identity,
                    event_message_type,
                    records,
                })
            }
            Some(TlvType::EnhancedAccuracyMetrics) => Self::EnhancedAccuracyMetrics(EnhancedAccuracyMetrics {
                bc_hop_count: r.read_u8()?,
                tc_hop_count: {
                    let v = r.read_u8()?;
                    r.skip(2)?;
                    v
                },
                max_ge_tc: f64::from_bits(r.read_u64()?),
                max_ge_bc: f64::from_bits(r.read_u64()?),
                max_ge_combined: f64::from_bits(r.read_u64()?),
                variance_explained_max: f64::from_bits(r.read_u64()?),
            }),
            Some(TlvType::SlaveDelayTimingDataNp) => {
                let source_port_identity = PortIdentity::decode(r)?;
                let mut records = Vec::new();
                while r.position() - start < length {
                    records.push(DelayTimingRecord {
                        sequence_id: r.read_u16()?,
                        delay_origin_timestamp: Timestamp::decode(r)?,
                        delay_response_timestamp: Timestamp::decode(r)?,
                    });
                }
                Self::SlaveDelayTimingDataNp(SlaveDelayTimingDataNp {
                    source_port_identity,
                    records,
                })
            }
            Some(TlvType::Management) => {
                if length < 2 {
                    return Err(record_here!(Error::Length(
                        "signaling MANAGEMENT TLV length must be at least 2".into()
                    )));
                }
                let management_id_raw = r.read_u16()?;
                let body_len = length - 2;
                let payload = match ManagementId::from_wire(management_id_raw) {
                    Some(id) => Payload::decode(id, r, body_len)?,
                    None => Payload::Raw(r.read_bytes(body_len)?.to_vec()),
                };
                Self::Management {
                    management_id: ManagementId::from_wire(management_id_raw),
                    management_id_raw,
                    payload,
                }
            }
            Some(TlvType::ManagementErrorStatus) => {
                Self::ManagementError(ManagementErrorStatus::decode(r, length)?)
            }
            None => {
                let data = r.read_bytes(length)?.to_vec();
                Self::Unknown {
                    tlv_type: tlv_type_raw,
                    data,
                }
            }
        };
        let consumed = r.position() - start;
        if consumed > length {
            return Err(record_here!(Error::Length(format!(
                "signaling tlvType 0x{tlv_type_raw:04x} decoder consumed {consumed} of {length} octets"
            ))));
        }
        r.skip(length - consumed)?;
        if length % 2 == 1 {
            r.skip(1)?; // tlvType/lengthField do not self-pad; the TLV body itself does (§4.4)
        }
        Ok(tlv)
    }

    pub fn tlv_type(&self) -> u16 {
        match self {
            Self::PathTrace(_) => TlvType::PathTrace.wire_value(),
            Self::OrganizationExtensionPropagate(_) => TlvType::OrganizationExtensionPropagate.wire_value(),
            Self::OrganizationExtensionDoNotPropagate(_) => {
                TlvType::OrganizationExtensionDoNotPropagate.wire_value()
            }
            Self::AlternateTimeOffsetIndicator(_) => TlvType::AlternateTimeOffsetIndicator.wire_value(),
            Self::L1Sync(_) => TlvType::L1Sync.wire_value(),
            Self::PortCommunicationAvailability(_) => TlvType::PortCommunicationAvailability.wire_value(),
            Self::ProtocolAddress(_) => TlvType::ProtocolAddress.wire_value(),
            Self::CumulativeRateRatio(_) => TlvType::CumulativeRateRatio.wire_value(),
            Self::SlaveRxSyncTimingData(_) => TlvType::SlaveRxSyncTimingData.wire_value(),
            Self::SlaveRxSyncComputedData(_) => TlvType::SlaveRxSyncComputedData.wire_value(),
            Self::SlaveTxEventTimestamps(_) => TlvType::SlaveTxEventTimestamps.wire_value(),
            Self::EnhancedAccuracyMetrics(_) => TlvType::EnhancedAccuracyMetrics.wire_value(),
            Self::SlaveDelayTimingDataNp(_) => TlvType::SlaveDelayTimingDataNp.wire_value(),
            Self::Management { .. } => TlvType::Management.wire_value(),
            Self::ManagementError(_) => TlvType::ManagementErrorStatus.wire_value(),
            Self::Unknown { tlv_type, .. } => *tlv_type,
        }
    }

    pub fn to_json(&self) -> Value {
        if let Self::Management {
            management_id,
            management_id_raw,
            payload,
        } = self
        {
            let id_name = management_id
                .map(|id| id.name().to_string())
                .unwrap_or_else(|| format!("0x{:04x}", management_id_raw));
            return obj(vec![
                ("tlvType", Value::String(TlvType::Management.as_str().to_string())),
                ("managementId", Value::String(id_name)),
                ("dataField", payload.to_json()),
            ]);
        }
        if let Self::ManagementError(err) = self {
            let id_name = ManagementId::from_wire(err.management_id)
                .map(|id| id.name().to_string())
                .unwrap_or_else(|| format!("0x{:04x}", err.management_id));
            let error_name = ManagementErrorId::from_wire(err.management_error_id)
                .map(|e| e.as_str().to_string())
                .unwrap_or_else(|| format!("0x{:04x}", err.management_error_id));
            return obj(vec![
                ("tlvType", Value::String(TlvType::ManagementErrorStatus.as_str().to_string())),
                ("managementId", Value::String(id_name)),
                ("managementErrorId", Value::String(error_name)),
                (
                    "displayData",
                    match &err.display_data {
                        Some(text) => Value::String(text.0.clone()),
                        None => Value::Null,
                    },
                ),
            ]);
        }
        let (kind, body) = match self {
            Self::PathTrace(p) => (
                "PATH_TRACE",
                obj(vec![(
                    "pathSequence",
                    Value::Array(p.path_sequence.iter().map(|id| Value::String(id.to_canonical_string())).collect()),
                )]),
            ),
            Self::OrganizationExtensionPropagate(p) => ("ORGANIZATION_EXTENSION_PROPAGATE", org_ext_json(p)),
            Self::OrganizationExtensionDoNotPropagate(p) => {
                ("ORGANIZATION_EXTENSION_DO_NOT_PROPAGATE", org_ext_json(p))
            }
            Self::AlternateTimeOffsetIndicator(p) => (
                "ALTERNATE_TIME_OFFSET_INDICATOR",
                obj(vec![
                    ("keyField", Value::from(p.key_field)),
                    ("currentOffset", Value::from(p.current_offset)),
                    ("jumpSeconds", Value::from(p.jump_seconds)),
                    ("timeOfNextJump", Value::from(p.time_of_next_jump)),
                    ("displayName", Value::String(p.display_name.0.clone())),
                ]),
            ),
            Self::L1Sync(p) => (
                "L1_SYNC",
                obj(vec![
                    ("txCoherentIsRequired", Value::Bool(p.tx_coherent_is_required)),
                    ("rxCoherentIsRequired", Value::Bool(p.rx_coherent_is_required)),
                    ("congruentIsRequired", Value::Bool(p.congruent_is_required)),
                    ("optionalTlvPresent", Value::Bool(p.optional_tlv_present)),
                ]),
            ),
            Self::PortCommunicationAvailability(p) => (
                "PORT_COMMUNICATION_AVAILABILITY",
                obj(vec![
                    ("syncMessageAvailability", Value::from(p.sync_message_availability)),
                    ("delayRespMessageAvailability", Value::from(p.delay_resp_message_availability)),
                ]),
            ),
            Self::ProtocolAddress(p) => (
                "PROTOCOL_ADDRESS",
                obj(vec![("portAddress", Value::String(p.port_address.address_to_string()))]),
            ),
            Self::CumulativeRateRatio(p) => (
                "CUMULATIVE_RATE_RATIO",
                obj(vec![("scaledCumulativeRateRatio", Value::from(p.scaled_cumulative_rate_ratio))]),
            ),
            Self::SlaveRxSyncTimingData(p) => (
                "SLAVE_RX_SYNC_TIMING_DATA",
                obj(vec![
                    ("syncSourcePortIdentity", Value::String(p.sync_source_port_identity.to_canonical_string())),
                    (
                        "syncTimingRecords",
                        Value::Array(
                            p.records
                                .iter()
                                .map(|r| {
                                    obj(vec![
                                        ("sequenceId", Value::from(r.sequence_id)),
                                        ("syncOriginTimestamp", Value::String(r.sync_origin_timestamp.to_json_string())),
                                        ("totalCorrectionField", Value::from(r.total_correction_field)),
                                        ("scaledCumulativeRateRatio", Value::from(r.scaled_cumulative_rate_ratio)),
                                        (
                                            "syncEventIngressTimestamp",
                                            Value::String(r.sync_event_ingress_timestamp.to_json_string()),
                                        ),
                                    ])
                                })
                                .collect(),
                        ),
                    ),
                ]),
            ),
            Self::SlaveRxSyncComputedData(p) => (
                "SLAVE_RX_SYNC_COMPUTED_DATA",
                obj(vec![
                    ("syncSourcePortIdentity", Value::String(p.sync_source_port_identity.to_canonical_string())),
                    ("scaledNeighborRateRatioValid", Value::Bool(p.scaled_neighbor_rate_ratio_valid)),
                    (
                        "syncComputedDataRecords",
                        Value::Array(
                            p.records
                                .iter()
                                .map(|r| {
                                    obj(vec![
                                        ("sequenceId", Value::from(r.sequence_id)),
                                        ("offsetFromMaster", Value::from(r.offset_from_master.to_nanoseconds())),
                                        ("meanPathDelay", Value::from(r.mean_path_delay.to_nanoseconds())),
                                        ("scaledNeighborRateRatio", Value::from(r.scaled_neighbor_rate_ratio)),
                                    ])
                                })
                                .collect(),
                        ),
                    ),
                ]),
            ),
            Self::SlaveTxEventTimestamps(p) => (
                "SLAVE_TX_EVENT_TIMESTAMPS",
                obj(vec![
                    ("sourcePortIdentity", Value::String(p.source_port_identity.to_canonical_string())),
                    ("eventMessageType", Value::from(p.event_message_type)),
                    (
                        "eventEgressTimestamps",
                        Value::Array(
                            p.records
                                .iter()
                                .map(|r| {
                                    obj(vec![
                                        ("sequenceId", Value::from(r.sequence_id)),
                                        ("eventEgressTimestamp", Value::String(r.event_egress_timestamp.to_json_string())),
                                    ])
                                })
                                .collect(),
                        ),
                    ),
                ]),
            ),
            Self::EnhancedAccuracyMetrics(p) => (
                "ENHANCED_ACCURACY_METRICS",
                obj(vec![
                    ("bcHopCount", Value::from(p.bc_hop_count)),
                    ("tcHopCount", Value::from(p.tc_hop_count)),
                    ("maxGmInaccuracy", Value::from(p.max_ge_tc)),
                    ("maxGeBc", Value::from(p.max_ge_bc)),
                    ("maxGeCombined", Value::from(p.max_ge_combined)),
                    ("varianceExplainedMax", Value::from(p.variance_explained_max)),
                ]),
            ),
            Self::SlaveDelayTimingDataNp(p) => (
                "SLAVE_DELAY_TIMING_DATA_NP",
                obj(vec![
                    ("sourcePortIdentity", Value::String(p.source_port_identity.to_canonical_string())),
                    (
                        "delayTimingRecords",
                        Value::Array(
                            p.records
                                .iter()
                                .map(|r| {
                                    obj(vec![
                                        ("sequenceId", Value::from(r.sequence_id)),
                                        ("delayOriginTimestamp", Value::String(r.delay_origin_timestamp.to_json_string())),
                                        (
                                            "delayResponseTimestamp",
                                            Value::String(r.delay_response_timestamp.to_json_string()),
                                        ),
                                    ])
                                })
                                .collect(),
                        ),
                    ),
                ]),
            ),
            Self::Unknown { tlv_type, data } => (
                "UNKNOWN",
                obj(vec![
                    ("tlvType", Value::from(*tlv_type)),
                    ("data", Value::String(data.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":"))),
                ]),
            ),
            Self::Management { .. } | Self::ManagementError(_) => unreachable!("handled above"),
        };
        obj(vec![("tlvType", Value::String(kind.to_string())), ("data", body)])
    }
}

fn decode_org_ext(r: &mut Reader, length: usize) -> Result<OrganizationExtension> {
    if length < 6 {
        return Err(record_here!(Error::Length("ORGANIZATION_EXTENSION needs at least 6 octets".into())));
    }
    let organization_id = r.read_array::<3>()?;
    let organization_sub_type = r.read_array::<3>()?;
    let data_field = r.read_bytes(length - 6)?.to_vec();
    Ok(OrganizationExtension {
        organization_id,
        organization_sub_type,
        data_field,
    })
}

fn org_ext_json(p: &OrganizationExtension) -> Value {
    obj(vec![
        (
            "organizationId",
            Value::String(p.organization_id.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")),
        ),
        (
            "organizationSubType",
            Value::String(p.organization_sub_type.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")),
        ),
        (
            "dataField",
            Value::String(p.data_field.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")),
        ),
    ])
}

impl SignalingTlv {
    pub fn wire_len(&self) -> usize {
        4 + match self {
            Self::PathTrace(p) => p.path_sequence.len() * ClockIdentity::WIRE_LEN,
            Self::OrganizationExtensionPropagate(p) | Self::OrganizationExtensionDoNotPropagate(p) => {
                6 + p.data_field.len()
            }
            Self::AlternateTimeOffsetIndicator(p) => 1 + 4 + 4 + 6 + p.display_name.wire_len(),
            Self::L1Sync(_) => 2,
            Self::PortCommunicationAvailability(_) => 2,
            Self::ProtocolAddress(p) => p.port_address.wire_len(),
            Self::CumulativeRateRatio(_) => 4,
            Self::SlaveRxSyncTimingData(p) => PortIdentity::WIRE_LEN + p.records.len() * 26,
            Self::SlaveRxSyncComputedData(p) => PortIdentity::WIRE_LEN + 2 + p.records.len() * 18,
            Self::SlaveTxEventTimestamps(p) => PortIdentity::WIRE_LEN + 2 + p.records.len() * 12,
            Self::EnhancedAccuracyMetrics(_) => 4 + 8 * 4,
            Self::SlaveDelayTimingDataNp(p) => PortIdentity::WIRE_LEN + p.records.len() * 22,
            Self::Management { payload, .. } => 2 + payload.wire_len(),
            Self::ManagementError(err) => err.wire_len(),
            Self::Unknown { data, .. } => data.len(),
        }
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        let body_len = self.wire_len() - 4;
        w.write_u16(self.tlv_type())?;
        w.write_u16(body_len as u16)?;
        match self {
            Self::PathTrace(p) => {
                for id in &p.path_sequence {
                    id.encode(w)?;
                }
            }
            Self::OrganizationExtensionPropagate(p) | Self::OrganizationExtensionDoNotPropagate(p) => {
                w.write_bytes(&p.organization_id)?;
                w.write_bytes(&p.organization_sub_type)?;
                w.write_bytes(&p.data_field)?;
            }
            Self::AlternateTimeOffsetIndicator(p) => {
                w.write_u8(p.key_field)?;
                w.write_i32(p.current_offset)?;
                w.write_i32(p.jump_seconds)?;
                w.write_u48(p.time_of_next_jump)?;
                p.display_name.encode(w)?;
            }
            Self::L1Sync(p) => {
                let flags = (p.tx_coherent_is_required as u16)
                    | ((p.rx_coherent_is_required as u16) << 1)
                    | ((p.congruent_is_required as u16) << 2)
                    | ((p.optional_tlv_present as u16) << 3);
                w.write_u16(flags)?;
            }
            Self::PortCommunicationAvailability(p) => {
                w.write_u8(p.sync_message_availability)?;
                w.write_u8(p.delay_resp_message_availability)?;
            }
            Self::ProtocolAddress(p) => p.port_address.encode(w)?,
            Self::CumulativeRateRatio(p) => w.write_i32(p.scaled_cumulative_rate_ratio)?,
            Self::SlaveRxSyncTimingData(p) => {
                p.sync_source_port_identity.encode(w)?;
                for r in &p.records {
                    w.write_u16(r.sequence_id)?;
                    r.sync_origin_timestamp.encode(w)?;
                    w.write_i64(r.total_correction_field)?;
                    w.write_i32(r.scaled_cumulative_rate_ratio)?;
                    r.sync_event_ingress_timestamp.encode(w)?;
                }
            }
            Self::SlaveRxSyncComputedData(p) => {
                p.sync_source_port_identity.encode(w)?;
                w.write_u8(p.computed_flags)?;
                w.write_u8(0)?;
                for r in &p.records {
                    w.write_u16(r.sequence_id)?;
                    r.offset_from_master.encode(w)?;
                    r.mean_path_delay.encode(w)?;
                    w.write_i32(r.scaled_neighbor_rate_ratio)?;
                }
            }
            Self::SlaveTxEventTimestamps(p) => {
                p.source_port_identity.encode(w)?;
                w.write_u8(p.event_message_type)?;
                w.write_u8(0)?;
                for r in &p.records {
                    w.write_u16(r.sequence_id)?;
                    r.event_egress_timestamp.encode(w)?;
                }
            }
            Self::EnhancedAccuracyMetrics(p) => {
                w.write_u8(p.bc_hop_count)?;
                w.write_u8(p.tc_hop_count)?;
                w.write_zeros(2)?;
                w.write_u64(p.max_ge_tc.to_bits())?;
                w.write_u64(p.max_ge_bc.to_bits())?;
                w.write_u64(p.max_ge_combined.to_bits())?;
                w.write_u64(p.variance_explained_max.to_bits())?;
            }
            Self::SlaveDelayTimingDataNp(p) => {
                p.source_port_identity.encode(w)?;
                for r in &p.records {
                    w.write_u16(r.sequence_id)?;
                    r.delay_origin_timestamp.encode(w)?;
                    r.delay_response_timestamp.encode(w)?;
                }
            }
            Self::Management {
                management_id_raw,
                payload,
                ..
            } => {
                w.write_u16(*management_id_raw)?;
                payload.encode(w)?;
            }
            Self::ManagementError(err) => err.encode(w)?,
            Self::Unknown { data, .. } => w.write_bytes(data)?,
        }
        if body_len % 2 == 1 {
            crate::wire::pad_to_even(w, body_len)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_trace_round_trips() {
        let tlv = SignalingTlv::PathTrace(PathTrace {
            path_sequence: vec![ClockIdentity([1; 8]), ClockIdentity([2; 8])],
        });
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        tlv.encode(&mut w).unwrap();
        let len = w.position();
        let decoded = SignalingTlv::decode_all(&buf[..len]).unwrap();
        assert_eq!(decoded.len(), 1);
        match &decoded[0] {
            SignalingTlv::PathTrace(p) => assert_eq!(p.path_sequence.len(), 2),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn unknown_tlv_preserves_bytes() {
        let mut buf = [0u8; 16];
        let mut w = Writer::new(&mut buf);
        w.write_u16(0x7fff).unwrap();
        w.write_u16(4).unwrap();
        w.write_bytes(&[1, 2, 3, 4]).unwrap();
        let len = w.position();
        let decoded = SignalingTlv::decode_all(&buf[..len]).unwrap();
        match &decoded[0] {
            SignalingTlv::Unknown { tlv_type, data } => {
                assert_eq!(*tlv_type, 0x7fff);
                assert_eq!(data, &[1, 2, 3, 4]);
            }
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn signaling_message_decodes_embedded_management_tlvs() {
        let priority2 = SignalingTlv::Management {
            management_id: Some(ManagementId::Priority2),
            management_id_raw: ManagementId::Priority2.wire_value(),
            payload: Payload::Priority2(crate::tlv::scalar::U8Field {
                key: "priority2",
                value: 119,
            }),
        };
        let domain = SignalingTlv::Management {
            management_id: Some(ManagementId::Domain),
            management_id_raw: ManagementId::Domain.wire_value(),
            payload: Payload::Domain(crate::tlv::scalar::U8Field {
                key: "domainNumber",
                value: 7,
            }),
        };
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        priority2.encode(&mut w).unwrap();
        domain.encode(&mut w).unwrap();
        let len = w.position();

        let decoded = SignalingTlv::decode_all(&buf[..len]).unwrap();
        assert_eq!(decoded.len(), 2);
        match &decoded[0] {
            SignalingTlv::Management { management_id, payload, .. } => {
                assert_eq!(*management_id, Some(ManagementId::Priority2));
                match payload {
                    Payload::Priority2(f) => assert_eq!(f.value, 119),
                    other => panic!("unexpected payload: {other:?}"),
                }
            }
            other => panic!("wrong variant: {other:?}"),
        }
        let json = decoded[1].to_json();
        assert_eq!(json["tlvType"], Value::String("MANAGEMENT".to_string()));
        assert_eq!(json["managementId"], Value::String("DOMAIN".to_string()));
        assert_eq!(json["dataField"]["domainNumber"], Value::from(7));
    }

    #[test]
    fn signaling_message_decodes_embedded_management_error_status() {
        let err = ManagementErrorStatus {
            management_id: ManagementId::Priority1.wire_value(),
            management_error_id: ManagementErrorId::NotSetable as u16,
            display_data: None,
        };
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        SignalingTlv::ManagementError(err).encode(&mut w).unwrap();
        let len = w.position();

        let decoded = SignalingTlv::decode_all(&buf[..len]).unwrap();
        match &decoded[0] {
            SignalingTlv::ManagementError(e) => {
                assert_eq!(e.management_error_id, ManagementErrorId::NotSetable as u16);
            }
            other => panic!("wrong variant: {other:?}"),
        }
        let json = decoded[0].to_json();
        assert_eq!(json["tlvType"], Value::String("MANAGEMENT_ERROR_STATUS".to_string()));
        assert_eq!(json["managementErrorId"], Value::String("NOT_SETABLE".to_string()));
    }
}
