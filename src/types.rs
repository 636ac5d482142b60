//! Fixed-table enumerations (§3.2): each has a known u8/u16 wire value, a
//! canonical string used by the JSON emitter, and a case-insensitive reverse
//! lookup used by the JSON acceptor.

use crate::error::Error;
use crate::wire::{Reader, Writer};

/// `actionField`: the verb carried by a management TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ActionField {
    Get = 0,
    Set = 1,
    Response = 2,
    Command = 3,
    Acknowledge = 4,
}

impl Default for ActionField {
    fn default() -> Self {
        ActionField::Get
    }
}

impl ActionField {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionField::Get => "GET",
            ActionField::Set => "SET",
            ActionField::Response => "RESPONSE",
            ActionField::Command => "COMMAND",
            ActionField::Acknowledge => "ACKNOWLEDGE",
        }
    }

    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(ActionField::Get),
            "SET" => Some(ActionField::Set),
            "RESPONSE" => Some(ActionField::Response),
            "COMMAND" => Some(ActionField::Command),
            "ACKNOWLEDGE" => Some(ActionField::Acknowledge),
            _ => None,
        }
    }

    pub fn from_wire(v: u8) -> Result<Self, Error> {
        match v & 0x0F {
            0 => Ok(ActionField::Get),
            1 => Ok(ActionField::Set),
            2 => Ok(ActionField::Response),
            3 => Ok(ActionField::Command),
            4 => Ok(ActionField::Acknowledge),
            other => Err(Error::Val {
                field: "actionField",
                value: other as i64,
            }),
        }
    }
}

/// High nibble of header byte 0: the PTP message kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageType {
    Sync = 0x0,
    DelayReq = 0x1,
    PDelayReq = 0x2,
    PDelayResp = 0x3,
    FollowUp = 0x8,
    DelayResp = 0x9,
    PDelayRespFollowUp = 0xA,
    Announce = 0xB,
    Signaling = 0xC,
    Management = 0xD,
}

impl MessageType {
    pub fn from_wire(v: u8) -> Result<Self, Error> {
        match v & 0x0F {
            0x0 => Ok(MessageType::Sync),
            0x1 => Ok(MessageType::DelayReq),
            0x2 => Ok(MessageType::PDelayReq),
            0x3 => Ok(MessageType::PDelayResp),
            0x8 => Ok(MessageType::FollowUp),
            0x9 => Ok(MessageType::DelayResp),
            0xA => Ok(MessageType::PDelayRespFollowUp),
            0xB => Ok(MessageType::Announce),
            0xC => Ok(MessageType::Signaling),
            0xD => Ok(MessageType::Management),
            other => Err(Error::Val {
                field: "messageType",
                value: other as i64,
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::Sync => "Sync",
            MessageType::DelayReq => "Delay_Req",
            MessageType::PDelayReq => "Pdelay_Req",
            MessageType::PDelayResp => "Pdelay_Resp",
            MessageType::FollowUp => "Follow_Up",
            MessageType::DelayResp => "Delay_Resp",
            MessageType::PDelayRespFollowUp => "Pdelay_Resp_Follow_Up",
            MessageType::Announce => "Announce",
            MessageType::Signaling => "Signaling",
            MessageType::Management => "Management",
        }
    }
}

/// `tlvType`, the envelope and signaling TLV discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum TlvType {
    Management = 1,
    ManagementErrorStatus = 2,
    OrganizationExtension = 3,
    PathTrace = 8,
    AlternateTimeOffsetIndicator = 9,
    L1Sync = 0x0C,
    PortCommunicationAvailability = 0x0D,
    ProtocolAddress = 0x0E,
    SlaveRxSyncTimingData = 0x4001,
    SlaveRxSyncComputedData = 0x4002,
    SlaveTxEventTimestamps = 0x4003,
    CumulativeRateRatio = 0x4004,
    EnhancedAccuracyMetrics = 0x4006,
    OrganizationExtensionPropagate = 0x4000,
    OrganizationExtensionDoNotPropagate = 0x8000,
    SlaveDelayTimingDataNp = 0x8001,
}

impl TlvType {
    pub fn from_wire(v: u16) -> Option<Self> {
        Some(match v {
            1 => Self::Management,
            2 => Self::ManagementErrorStatus,
            3 => Self::OrganizationExtension,
            8 => Self::PathTrace,
            9 => Self::AlternateTimeOffsetIndicator,
            0x0C => Self::L1Sync,
            0x0D => Self::PortCommunicationAvailability,
            0x0E => Self::ProtocolAddress,
            0x4000 => Self::OrganizationExtensionPropagate,
            0x4001 => Self::SlaveRxSyncTimingData,
            0x4002 => Self::SlaveRxSyncComputedData,
            0x4003 => Self::SlaveTxEventTimestamps,
            0x4004 => Self::CumulativeRateRatio,
            0x4006 => Self::EnhancedAccuracyMetrics,
            0x8000 => Self::OrganizationExtensionDoNotPropagate,
            0x8001 => Self::SlaveDelayTimingDataNp,
            _ => return None,
        })
    }

    pub fn wire_value(self) -> u16 {
        self as u16
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Management => "MANAGEMENT",
            Self::ManagementErrorStatus => "MANAGEMENT_ERROR_STATUS",
            Self::OrganizationExtension => "ORGANIZATION_EXTENSION",
            Self::PathTrace => "PATH_TRACE",
            Self::AlternateTimeOffsetIndicator => "ALTERNATE_TIME_OFFSET_INDICATOR",
            Self::L1Sync => "L1_SYNC",
            Self::PortCommunicationAvailability => "PORT_COMMUNICATION_AVAILABILITY",
            Self::ProtocolAddress => "PROTOCOL_ADDRESS",
            Self::SlaveRxSyncTimingData => "SLAVE_RX_SYNC_TIMING_DATA",
            Self::SlaveRxSyncComputedData => "SLAVE_RX_SYNC_COMPUTED_DATA",
            Self::SlaveTxEventTimestamps => "SLAVE_TX_EVENT_TIMESTAMPS",
            Self::CumulativeRateRatio => "CUMULATIVE_RATE_RATIO",
            Self::EnhancedAccuracyMetrics => "ENHANCED_ACCURACY_METRICS",
            Self::OrganizationExtensionPropagate => "ORGANIZATION_EXTENSION_PROPAGATE",
            Self::OrganizationExtensionDoNotPropagate => "ORGANIZATION_EXTENSION_DO_NOT_PROPAGATE",
            Self::SlaveDelayTimingDataNp => "SLAVE_DELAY_TIMING_DATA_NP",
        }
    }
}

/// `networkProtocol`, the transport a [`PortAddress`] is expressed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum NetworkProtocol {
    Udpv4 = 1,
    Udpv6 = 2,
    Ieee8023 = 3,
    DeviceNet = 4,
    ControlNet = 5,
    Uds = 6,
}

impl NetworkProtocol {
    pub fn from_wire(v: u16) -> Option<Self> {
        Some(match v {
            1 => Self::Udpv4,
            2 => Self::Udpv6,
            3 => Self::Ieee8023,
            4 => Self::DeviceNet,
            5 => Self::ControlNet,
            6 => Self::Uds,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Udpv4 => "UDP_IPV4",
            Self::Udpv6 => "UDP_IPV6",
            Self::Ieee8023 => "IEEE_802_3",
            Self::DeviceNet => "DeviceNet",
            Self::ControlNet => "ControlNet",
            Self::Uds => "UDS",
        }
    }

    pub fn from_str_ci(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "UDP_IPV4" => Some(Self::Udpv4),
            "UDP_IPV6" => Some(Self::Udpv6),
            "IEEE_802_3" => Some(Self::Ieee8023),
            "DEVICENET" => Some(Self::DeviceNet),
            "CONTROLNET" => Some(Self::ControlNet),
            "UDS" => Some(Self::Uds),
            _ => None,
        }
    }
}

/// A transport address: protocol tag plus a self-describing length and octets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortAddress {
    pub network_protocol: u16,
    pub address: Vec<u8>,
}

impl PortAddress {
    pub fn decode(r: &mut Reader) -> crate::error::Result<Self> {
        let network_protocol = r.read_u16()?;
        let len = r.read_u16()? as usize;
        let address = r.read_bytes(len)?.to_vec();
        Ok(Self {
            network_protocol,
            address,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> crate::error::Result<()> {
        w.write_u16(self.network_protocol)?;
        w.write_u16(self.address.len() as u16)?;
        w.write_bytes(&self.address)
    }

    pub fn wire_len(&self) -> usize {
        4 + self.address.len()
    }

    /// Render the address field per its protocol: MAC for 802.3, dotted-quad
    /// for IPv4, colon-hex fallback otherwise.
    pub fn address_to_string(&self) -> String {
        match NetworkProtocol::from_wire(self.network_protocol) {
            Some(NetworkProtocol::Ieee8023) if self.address.len() == 6 => self
                .address
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(":"),
            Some(NetworkProtocol::Udpv4) if self.address.len() == 4 => self
                .address
                .iter()
                .map(|b| b.to_string())
                .collect::<Vec<_>>()
                .join("."),
            _ => self
                .address
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect::<Vec<_>>()
                .join(":"),
        }
    }

    pub fn address_from_string(network_protocol: u16, s: &str) -> crate::error::Result<Self> {
        let address = match NetworkProtocol::from_wire(network_protocol) {
            Some(NetworkProtocol::Udpv4) => {
                let parts: Vec<u8> = s
                    .split('.')
                    .map(|p| p.parse::<u8>())
                    .collect::<Result<_, _>>()
                    .map_err(|_| Error::Json(format!("invalid IPv4 address: {s}")))?;
                if parts.len() != 4 {
                    return Err(Error::Json(format!("invalid IPv4 address: {s}")));
                }
                parts
            }
            _ => s
                .split(':')
                .map(|p| u8::from_str_radix(p, 16))
                .collect::<Result<_, _>>()
                .map_err(|_| Error::Json(format!("invalid address: {s}")))?,
        };
        Ok(Self {
            network_protocol,
            address,
        })
    }
}

/// Single-bit booleans packed into one octet, per §3.1. Bit positions are
/// fixed by the wire format regardless of which TLV carries them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags(pub u8);

impl Flags {
    pub const LI_61: u8 = 0x01;
    pub const LI_59: u8 = 0x02;
    pub const UTCV: u8 = 0x04;
    pub const PTP_TIMESCALE: u8 = 0x08;
    pub const TIME_TRACEABLE: u8 = 0x10;
    pub const FREQUENCY_TRACEABLE: u8 = 0x20;

    pub fn test(&self, bit: u8) -> bool {
        self.0 & bit != 0
    }

    pub fn set(&mut self, bit: u8, value: bool) {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

/// `clockAccuracy`: discrete accuracy classes in increasing order of error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ClockAccuracy {
    Within1Ps = 0x17,
    Within2_5Ps = 0x18,
    Within10Ps = 0x19,
    Within25Ps = 0x1A,
    Within100Ps = 0x1B,
    Within250Ps = 0x1C,
    Within1Ns = 0x1D,
    Within2_5Ns = 0x1E,
    Within10Ns = 0x1F,
    Within25Ns = 0x20,
    Within100Ns = 0x21,
    Within250Ns = 0x22,
    Within1Us = 0x23,
    Within2_5Us = 0x24,
    Within10Us = 0x25,
    Within25Us = 0x26,
    Within100Us = 0x27,
    Within250Us = 0x28,
    Within1Ms = 0x29,
    Within2_5Ms = 0x2A,
    Within10Ms = 0x2B,
    Within25Ms = 0x2C,
    Within100Ms = 0x2D,
    Within250Ms = 0x2E,
    Within1S = 0x2F,
    Within10S = 0x30,
    AccurateMore10s = 0x31,
    AccurateUnknown = 0xFE,
}

impl ClockAccuracy {
    pub fn as_str(self) -> &'static str {
        use ClockAccuracy::*;
        match self {
            Within1Ps => "Accurate_within_1ps",
            Within2_5Ps => "Accurate_within_2_5ps",
            Within10Ps => "Accurate_within_10ps",
            Within25Ps => "Accurate_within_25ps",
            Within100Ps => "Accurate_within_100ps",
            Within250Ps => "Accurate_within_250ps",
            Within1Ns => "Accurate_within_1ns",
            Within2_5Ns => "Accurate_within_2_5ns",
            Within10Ns => "Accurate_within_10ns",
            Within25Ns => "Accurate_within_25ns",
            Within100Ns => "Accurate_within_100ns",
            Within250Ns => "Accurate_within_250ns",
            Within1Us => "Accurate_within_1us",
            Within2_5Us => "Accurate_within_2_5us",
            Within10Us => "Accurate_within_10us",
            Within25Us => "Accurate_within_25us",
            Within100Us => "Accurate_within_100us",
            Within250Us => "Accurate_within_250us",
            Within1Ms => "Accurate_within_1ms",
            Within2_5Ms => "Accurate_within_2_5ms",
            Within10Ms => "Accurate_within_10ms",
            Within25Ms => "Accurate_within_25ms",
            Within100Ms => "Accurate_within_100ms",
            Within250Ms => "Accurate_within_250ms",
            Within1S => "Accurate_within_1s",
            Within10S => "Accurate_within_10s",
            AccurateMore10s => "Accurate_more_10s",
            AccurateUnknown => "Accurate_Unknown",
        }
    }

    pub fn from_wire(v: u8) -> Option<Self> {
        use ClockAccuracy::*;
        Some(match v {
            0x17 => Within1Ps,
            0x18 => Within2_5Ps,
            0x19 => Within10Ps,
            0x1A => Within25Ps,
            0x1B => Within100Ps,
            0x1C => Within250Ps,
            0x1D => Within1Ns,
            0x1E => Within2_5Ns,
            0x1F => Within10Ns,
            0x20 => Within25Ns,
            0x21 => Within100Ns,
            0x22 => Within250Ns,
            0x23 => Within1Us,
            0x24 => Within2_5Us,
            0x25 => Within10Us,
            0x26 => Within25Us,
            0x27 => Within100Us,
            0x28 => Within250Us,
            0x29 => Within1Ms,
            0x2A => Within2_5Ms,
            0x2B => Within10Ms,
            0x2C => Within25Ms,
            0x2D => Within100Ms,
            0x2E => Within250Ms,
            0x2F => Within1S,
            0x30 => Within10S,
            0x31 => AccurateMore10s,
            0xFE => AccurateUnknown,
            _ => return None,
        })
    }

    pub fn from_str_ci(s: &str) -> Option<Self> {
        use ClockAccuracy::*;
        let all = [
            Within1Ps, Within2_5Ps, Within10Ps, Within25Ps, Within100Ps, Within250Ps, Within1Ns,
            Within2_5Ns, Within10Ns, Within25Ns, Within100Ns, Within250Ns, Within1Us, Within2_5Us,
            Within10Us, Within25Us, Within100Us, Within250Us, Within1Ms, Within2_5Ms, Within10Ms,
            Within25Ms, Within100Ms, Within250Ms, Within1S, Within10S, AccurateMore10s,
            AccurateUnknown,
        ];
        all.into_iter().find(|a| a.as_str().eq_ignore_ascii_case(s))
    }

    /// Emit the canonical string, or `0x<hex>` when `v` is outside the known
    /// range (§4.6).
    pub fn emit(v: u8) -> String {
        match Self::from_wire(v) {
            Some(a) => a.as_str().to_string(),
            None => format!("0x{:02x}", v),
        }
    }
}

/// `timeSource`: origin of the time distributed by the grandmaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum TimeSource {
    AtomicClock = 0x10,
    Gps = 0x20,
    TerrestrialRadio = 0x30,
    Ptp = 0x40,
    Ntp = 0x50,
    HandSet = 0x60,
    Other = 0x90,
    InternalOscillator = 0xA0,
}

impl TimeSource {
    pub fn from_wire(v: u8) -> Option<Self> {
        use TimeSource::*;
        Some(match v {
            0x10 => AtomicClock,
            0x20 => Gps,
            0x30 => TerrestrialRadio,
            0x40 => Ptp,
            0x50 => Ntp,
            0x60 => HandSet,
            0x90 => Other,
            0xA0 => InternalOscillator,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use TimeSource::*;
        match self {
            AtomicClock => "ATOMIC_CLOCK",
            Gps => "GPS",
            TerrestrialRadio => "TERRESTRIAL_RADIO",
            Ptp => "PTP",
            Ntp => "NTP",
            HandSet => "HAND_SET",
            Other => "OTHER",
            InternalOscillator => "INTERNAL_OSCILLATOR",
        }
    }

    pub fn from_str_ci(s: &str) -> Option<Self> {
        use TimeSource::*;
        [
            AtomicClock,
            Gps,
            TerrestrialRadio,
            Ptp,
            Ntp,
            HandSet,
            Other,
            InternalOscillator,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    pub fn emit(v: u8) -> String {
        match Self::from_wire(v) {
            Some(t) => t.as_str().to_string(),
            None => format!("0x{:02x}", v),
        }
    }
}

/// `portState`: the 1588 port state machine's externally visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PortState {
    Initializing = 1,
    Faulty = 2,
    Disabled = 3,
    Listening = 4,
    PreMaster = 5,
    Master = 6,
    Passive = 7,
    Uncalibrated = 8,
    Slave = 9,
}

impl PortState {
    pub fn from_wire(v: u8) -> Option<Self> {
        use PortState::*;
        Some(match v {
            1 => Initializing,
            2 => Faulty,
            3 => Disabled,
            4 => Listening,
            5 => PreMaster,
            6 => Master,
            7 => Passive,
            8 => Uncalibrated,
            9 => Slave,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use PortState::*;
        match self {
            Initializing => "INITIALIZING",
            Faulty => "FAULTY",
            Disabled => "DISABLED",
            Listening => "LISTENING",
            PreMaster => "PRE_MASTER",
            Master => "MASTER",
            Passive => "PASSIVE",
            Uncalibrated => "UNCALIBRATED",
            Slave => "SLAVE",
        }
    }

    pub fn from_str_ci(s: &str) -> Option<Self> {
        use PortState::*;
        [
            Initializing,
            Faulty,
            Disabled,
            Listening,
            PreMaster,
            Master,
            Passive,
            Uncalibrated,
            Slave,
        ]
        .into_iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(s))
    }
}

/// `faultRecord` severity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FaultRecordSeverity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Informational = 6,
    Debug = 7,
}

impl FaultRecordSeverity {
    pub fn from_wire(v: u8) -> Option<Self> {
        use FaultRecordSeverity::*;
        Some(match v {
            0 => Emergency,
            1 => Alert,
            2 => Critical,
            3 => Error,
            4 => Warning,
            5 => Notice,
            6 => Informational,
            7 => Debug,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use FaultRecordSeverity::*;
        match self {
            Emergency => "Emergency",
            Alert => "Alert",
            Critical => "Critical",
            Error => "Error",
            Warning => "Warning",
            Notice => "Notice",
            Informational => "Informational",
            Debug => "Debug",
        }
    }
}

/// `linuxptp timeStamp` (TIME_STAMPING mode exposed by `PORT_DATA_SET_NP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LinuxptpTimeStamp {
    Software = 0,
    Hardware = 1,
    Legacy = 2,
}

impl LinuxptpTimeStamp {
    pub fn from_wire(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Software),
            1 => Some(Self::Hardware),
            2 => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Hardware => "hardware",
            Self::Legacy => "legacy",
        }
    }

    pub fn from_str_ci(s: &str) -> Option<Self> {
        [Self::Software, Self::Hardware, Self::Legacy]
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }
}

/// `linuxptp unicastState` (per-peer state in `UNICAST_MASTER_TABLE_NP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LinuxptpUnicastState {
    None = 0,
    HaveAnnounce = 1,
    NeedSydy = 2,
    HaveSydy = 3,
}

impl LinuxptpUnicastState {
    pub fn from_wire(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::HaveAnnounce),
            2 => Some(Self::NeedSydy),
            3 => Some(Self::HaveSydy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::HaveAnnounce => "HAVE_ANNOUNCE",
            Self::NeedSydy => "NEED_SYDY",
            Self::HaveSydy => "HAVE_SYDY",
        }
    }
}

/// `linuxptp powerProfileVersion` carried by `POWER_PROFILE_SETTINGS_NP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum LinuxptpPowerProfileVersion {
    None = 0,
    Ieee2011 = 1,
    Ieee2017 = 2,
}

impl LinuxptpPowerProfileVersion {
    pub fn from_wire(v: u16) -> Option<Self> {
        match v {
            0 => Some(Self::None),
            1 => Some(Self::Ieee2011),
            2 => Some(Self::Ieee2017),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Ieee2011 => "IEEE_C37_238_2011",
            Self::Ieee2017 => "IEEE_C37_238_2017",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accuracy_emits_hex_escape_outside_table() {
        assert_eq!(ClockAccuracy::emit(0x17), "Accurate_within_1ps");
        assert_eq!(ClockAccuracy::emit(0x99), "0x99");
    }

    #[test]
    fn action_field_round_trips_case_insensitively() {
        assert_eq!(ActionField::from_str_ci("set"), Some(ActionField::Set));
        assert_eq!(ActionField::Set.as_str(), "SET");
    }

    #[test]
    fn port_address_mac_round_trip() {
        let addr = PortAddress {
            network_protocol: NetworkProtocol::Ieee8023 as u16,
            address: vec![0x00, 0x1b, 0x21, 0xab, 0xcd, 0xef],
        };
        assert_eq!(addr.address_to_string(), "00:1b:21:ab:cd:ef");
    }
}
