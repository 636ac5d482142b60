//! TLV payload codecs (C4) and the per-payload JSON mirror used by C6/C7.
//!
//! Every management payload implements [`ManagementPayload`]: wire
//! encode/decode plus a JSON object mirror whose keys are the field names of
//! §3.3 in declaration order (`serde_json`'s `preserve_order` feature keeps
//! that order on emit).

pub mod data_sets;
pub mod np;
pub mod org_ext;
pub mod scalar;
pub mod tables;
pub mod transparent;

use crate::error::{record_here, Error, Result};
use crate::management_id::ManagementId;
use crate::wire::{Reader, Writer};
use serde_json::{Map, Value};

/// A decoded or to-be-encoded management TLV payload.
pub trait ManagementPayload: Sized {
    /// Natural wire length in octets, before any even-length padding.
    fn wire_len(&self) -> usize;
    /// Decode from `len` available octets (the TLV's `lengthField - 2`,
    /// possibly including a trailing pad byte the caller skips).
    fn decode(r: &mut Reader, len: usize) -> Result<Self>;
    fn encode(&self, w: &mut Writer) -> Result<()>;
    fn to_json(&self) -> Value;
    fn from_json(v: &Value) -> Result<Self>;
}

/// Read `obj[key]` as an object, erroring with the field name on mismatch.
pub(crate) fn json_object<'a>(v: &'a Value, ctx: &str) -> Result<&'a Map<String, Value>> {
    v.as_object()
        .ok_or_else(|| Error::Json(format!("{ctx}: expected a JSON object")))
}

pub(crate) fn json_get<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    obj.get(key)
        .ok_or_else(|| Error::Json(format!("missing field {key}")))
}

pub(crate) fn json_u64(obj: &Map<String, Value>, key: &str) -> Result<u64> {
    json_get(obj, key)?
        .as_u64()
        .ok_or_else(|| Error::Json(format!("field {key} must be an unsigned integer")))
}

pub(crate) fn json_i64(obj: &Map<String, Value>, key: &str) -> Result<i64> {
    json_get(obj, key)?
        .as_i64()
        .ok_or_else(|| Error::Json(format!("field {key} must be an integer")))
}

pub(crate) fn json_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    json_get(obj, key)?
        .as_str()
        .ok_or_else(|| Error::Json(format!("field {key} must be a string")))
}

pub(crate) fn json_bool_coerce(v: &Value, ctx: &str) -> Result<bool> {
    match v {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "enable" | "on" => Ok(true),
            "false" | "disable" | "off" => Ok(false),
            _ => Err(Error::Json(format!("{ctx}: not a recognized boolean string: {s}"))),
        },
        Value::Number(n) => Ok(n.as_i64().unwrap_or(0) != 0),
        _ => Err(Error::Json(format!("{ctx}: expected a boolean"))),
    }
}

pub(crate) fn json_bool(obj: &Map<String, Value>, key: &str) -> Result<bool> {
    json_bool_coerce(json_get(obj, key)?, key)
}

/// All decoded management payloads, tagged by [`ManagementId`].
#[derive(Debug, Clone)]
pub enum Payload {
    Empty,
    ClockDescription(data_sets::ClockDescription),
    UserDescription(data_sets::UserDescription),
    FaultLog(data_sets::FaultLog),
    DefaultDataSet(data_sets::DefaultDataSet),
    CurrentDataSet(data_sets::CurrentDataSet),
    ParentDataSet(data_sets::ParentDataSet),
    TimePropertiesDataSet(data_sets::TimePropertiesDataSet),
    PortDataSet(data_sets::PortDataSet),
    UtcProperties(data_sets::UtcProperties),
    TraceabilityProperties(data_sets::TraceabilityProperties),
    TimescaleProperties(data_sets::TimescaleProperties),

    Priority1(scalar::U8Field),
    Priority2(scalar::U8Field),
    Domain(scalar::U8Field),
    SlaveOnly(scalar::BoolField),
    LogAnnounceInterval(scalar::I8Field),
    AnnounceReceiptTimeout(scalar::U8Field),
    LogSyncInterval(scalar::I8Field),
    VersionNumber(scalar::U8Field),
    Time(scalar::TimestampField),
    ClockAccuracy(scalar::U8Field),
    UnicastNegotiationEnable(scalar::BoolField),
    PathTraceEnable(scalar::BoolField),
    UnicastMasterMaxTableSize(scalar::U16Field),
    AcceptableMasterTableEnabled(scalar::BoolField),
    AcceptableMasterMaxTableSize(scalar::U16Field),
    AlternateTimeOffsetMaxKey(scalar::U8Field),
    PrimaryDomain(scalar::U8Field),
    DelayMechanism(scalar::U8Field),
    LogMinPdelayReqInterval(scalar::I8Field),
    ExternalPortConfigurationEnabled(scalar::BoolField),
    MasterOnly(scalar::BoolField),
    HoldoverUpgradeEnable(scalar::BoolField),
    SynchronizationUncertainNp(scalar::U8Field),

    PathTraceList(tables::PathTraceList),
    GrandmasterClusterTable(tables::PortAddressTable),
    UnicastMasterTable(tables::PortAddressTable),
    AcceptableMasterTable(tables::AcceptableMasterTable),
    AlternateMaster(tables::AlternateMaster),
    AlternateTimeOffsetEnable(tables::AlternateTimeOffsetEnable),
    AlternateTimeOffsetName(tables::AlternateTimeOffsetName),
    AlternateTimeOffsetProperties(tables::AlternateTimeOffsetProperties),

    TransparentClockDefaultDataSet(transparent::TransparentClockDefaultDataSet),
    TransparentClockPortDataSet(transparent::TransparentClockPortDataSet),
    ExtPortConfigPortDataSet(transparent::ExtPortConfigPortDataSet),

    TimeStatusNp(np::TimeStatusNp),
    GrandmasterSettingsNp(np::GrandmasterSettingsNp),
    PortDataSetNp(np::PortDataSetNp),
    SubscribeEventsNp(np::SubscribeEventsNp),
    PortPropertiesNp(np::PortPropertiesNp),
    PortStatsNp(np::PortStatsNp),
    PortServiceStatsNp(np::PortServiceStatsNp),
    UnicastMasterTableNp(np::UnicastMasterTableNp),
    PortHwclockNp(np::PortHwclockNp),
    PowerProfileSettingsNp(np::PowerProfileSettingsNp),
    CmldsInfoNp(np::CmldsInfoNp),

    SmpteMngId(org_ext::SmpteMngId),

    /// Unknown managementId, surfaced with the raw bytes per §4.3/§7: not
    /// an error, the caller may inspect them.
    Raw(Vec<u8>),
}

macro_rules! dispatch {
    ($self:expr, $method:ident $(, $arg:expr)*) => {
        match $self {
            Payload::Empty => unreachable!("Payload::Empty is handled before dispatch!"),
            Payload::ClockDescription(p) => p.$method($($arg),*),
            Payload::UserDescription(p) => p.$method($($arg),*),
            Payload::FaultLog(p) => p.$method($($arg),*),
            Payload::DefaultDataSet(p) => p.$method($($arg),*),
            Payload::CurrentDataSet(p) => p.$method($($arg),*),
            Payload::ParentDataSet(p) => p.$method($($arg),*),
            Payload::TimePropertiesDataSet(p) => p.$method($($arg),*),
            Payload::PortDataSet(p) => p.$method($($arg),*),
            Payload::UtcProperties(p) => p.$method($($arg),*),
            Payload::TraceabilityProperties(p) => p.$method($($arg),*),
            Payload::TimescaleProperties(p) => p.$method($($arg),*),
            Payload::Priority1(p) => p.$method($($arg),*),
            Payload::Priority2(p) => p.$method($($arg),*),
            Payload::Domain(p) => p.$method($($arg),*),
            Payload::SlaveOnly(p) => p.$method($($arg),*),
            Payload::LogAnnounceInterval(p) => p.$method($($arg),*),
            Payload::AnnounceReceiptTimeout(p) => p.$method($($arg),*),
            Payload::LogSyncInterval(p) => p.$method($($arg),*),
            Payload::VersionNumber(p) => p.$method($($arg),*),
            Payload::Time(p) => p.$method($($arg),*),
            Payload::ClockAccuracy(p) => p.$method($($arg),*),
            Payload::UnicastNegotiationEnable(p) => p.$method($($arg),*),
            Payload::PathTraceEnable(p) => p.$method($($arg),*),
            Payload::UnicastMasterMaxTableSize(p) => p.$method($($arg),*),
            Payload::AcceptableMasterTableEnabled(p) => p.$method($($arg),*),
            Payload::AcceptableMasterMaxTableSize(p) => p.$method($($arg),*),
            Payload::AlternateTimeOffsetMaxKey(p) => p.$method($($arg),*),
            Payload::PrimaryDomain(p) => p.$method($($arg),*),
            Payload::DelayMechanism(p) => p.$method($($arg),*),
            Payload::LogMinPdelayReqInterval(p) => p.$method($($arg),*),
            Payload::ExternalPortConfigurationEnabled(p) => p.$method($($arg),*),
            Payload::MasterOnly(p) => p.$method($($arg),*),
            Payload::HoldoverUpgradeEnable(p) => p.$method($($arg),*),
            Payload::SynchronizationUncertainNp(p) => p.$method($($arg),*),
            Payload::PathTraceList(p) => p.$method($($arg),*),
            Payload::GrandmasterClusterTable(p) => p.$method($($arg),*),
            Payload::UnicastMasterTable(p) => p.$method($($arg),*),
            Payload::AcceptableMasterTable(p) => p.$method($($arg),*),
            Payload::AlternateMaster(p) => p.$method($($arg),*),
            Payload::AlternateTimeOffsetEnable(p) => p.$method($($arg),*),
            Payload::AlternateTimeOffsetName(p) => p.$method($($arg),*),
            Payload::AlternateTimeOffsetProperties(p) => p.$method($($arg),*),
            Payload::TransparentClockDefaultDataSet(p) => p.$method($($arg),*),
            Payload::TransparentClockPortDataSet(p) => p.$method($($arg),*),
            Payload::ExtPortConfigPortDataSet(p) => p.$method($($arg),*),
            Payload::TimeStatusNp(p) => p.$method($($arg),*),
            Payload::GrandmasterSettingsNp(p) => p.$method($($arg),*),
            Payload::PortDataSetNp(p) => p.$method($($arg),*),
            Payload::SubscribeEventsNp(p) => p.$method($($arg),*),
            Payload::PortPropertiesNp(p) => p.$method($($arg),*),
            Payload::PortStatsNp(p) => p.$method($($arg),*),
            Payload::PortServiceStatsNp(p) => p.$method($($arg),*),
            Payload::UnicastMasterTableNp(p) => p.$method($($arg),*),
            Payload::PortHwclockNp(p) => p.$method($($arg),*),
            Payload::PowerProfileSettingsNp(p) => p.$method($($arg),*),
            Payload::CmldsInfoNp(p) => p.$method($($arg),*),
            Payload::SmpteMngId(p) => p.$method($($arg),*),
            Payload::Raw(_) => unreachable!("Payload::Raw is handled before dispatch!"),
        }
    };
}

impl Payload {
    pub fn wire_len(&self) -> usize {
        match self {
            Payload::Empty => 0,
            Payload::Raw(b) => b.len(),
            other => dispatch!(other, wire_len),
        }
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        match self {
            Payload::Empty => Ok(()),
            Payload::Raw(b) => w.write_bytes(b),
            other => dispatch!(other, encode, w),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Payload::Empty => Value::Null,
            Payload::Raw(b) => Value::String(
                b.iter().map(|x| format!("{:02x}", x)).collect::<Vec<_>>().join(":"),
            ),
            other => match other {
                Payload::Empty | Payload::Raw(_) => unreachable!(),
                Payload::ClockDescription(p) => p.to_json(),
                Payload::UserDescription(p) => p.to_json(),
                Payload::FaultLog(p) => p.to_json(),
                Payload::DefaultDataSet(p) => p.to_json(),
                Payload::CurrentDataSet(p) => p.to_json(),
                Payload::ParentDataSet(p) => p.to_json(),
                Payload::TimePropertiesDataSet(p) => p.to_json(),
                Payload::PortDataSet(p) => p.to_json(),
                Payload::UtcProperties(p) => p.to_json(),
                Payload::TraceabilityProperties(p) => p.to_json(),
                Payload::TimescaleProperties(p) => p.to_json(),
                Payload::Priority1(p) => p.to_json(),
                Payload::Priority2(p) => p.to_json(),
                Payload::Domain(p) => p.to_json(),
                Payload::SlaveOnly(p) => p.to_json(),
                Payload::LogAnnounceInterval(p) => p.to_json(),
                Payload::AnnounceReceiptTimeout(p) => p.to_json(),
                Payload::LogSyncInterval(p) => p.to_json(),
                Payload::VersionNumber(p) => p.to_json(),
                Payload::Time(p) => p.to_json(),
                Payload::ClockAccuracy(p) => p.to_json(),
                Payload::UnicastNegotiationEnable(p) => p.to_json(),
                Payload::PathTraceEnable(p) => p.to_json(),
                Payload::UnicastMasterMaxTableSize(p) => p.to_json(),
                Payload::AcceptableMasterTableEnabled(p) => p.to_json(),
                Payload::AcceptableMasterMaxTableSize(p) => p.to_json(),
                Payload::AlternateTimeOffsetMaxKey(p) => p.to_json(),
                Payload::PrimaryDomain(p) => p.to_json(),
                Payload::DelayMechanism(p) => p.to_json(),
                Payload::LogMinPdelayReqInterval(p) => p.to_json(),
                Payload::ExternalPortConfigurationEnabled(p) => p.to_json(),
                Payload::MasterOnly(p) => p.to_json(),
                Payload::HoldoverUpgradeEnable(p) => p.to_json(),
                Payload::SynchronizationUncertainNp(p) => p.to_json(),
                Payload::PathTraceList(p) => p.to_json(),
                Payload::GrandmasterClusterTable(p) => p.to_json(),
                Payload::UnicastMasterTable(p) => p.to_json(),
                Payload::AcceptableMasterTable(p) => p.to_json(),
                Payload::AlternateMaster(p) => p.to_json(),
                Payload::AlternateTimeOffsetEnable(p) => p.to_json(),
                Payload::AlternateTimeOffsetName(p) => p.to_json(),
                Payload::AlternateTimeOffsetProperties(p) => p.to_json(),
                Payload::TransparentClockDefaultDataSet(p) => p.to_json(),
                Payload::TransparentClockPortDataSet(p) => p.to_json(),
                Payload::ExtPortConfigPortDataSet(p) => p.to_json(),
                Payload::TimeStatusNp(p) => p.to_json(),
                Payload::GrandmasterSettingsNp(p) => p.to_json(),
                Payload::PortDataSetNp(p) => p.to_json(),
                Payload::SubscribeEventsNp(p) => p.to_json(),
                Payload::PortPropertiesNp(p) => p.to_json(),
                Payload::PortStatsNp(p) => p.to_json(),
                Payload::PortServiceStatsNp(p) => p.to_json(),
                Payload::UnicastMasterTableNp(p) => p.to_json(),
                Payload::PortHwclockNp(p) => p.to_json(),
                Payload::PowerProfileSettingsNp(p) => p.to_json(),
                Payload::CmldsInfoNp(p) => p.to_json(),
                Payload::SmpteMngId(p) => p.to_json(),
            },
        }
    }

    /// Decode the payload belonging to `id` from `len` available octets.
    pub fn decode(id: ManagementId, r: &mut Reader, len: usize) -> Result<Self> {
        use ManagementId::*;
        let start = r.position();
        let payload = match id {
            NullPtpManagement | SaveInNonVolatileStorage | ResetNonVolatileStorage
            | FaultLogReset | EnablePort | DisablePort | Initialize => Payload::Empty,
            ClockDescription => Payload::ClockDescription(data_sets::ClockDescription::decode(r, len)?),
            UserDescription => Payload::UserDescription(data_sets::UserDescription::decode(r, len)?),
            FaultLog => Payload::FaultLog(data_sets::FaultLog::decode(r, len)?),
            DefaultDataSet => Payload::DefaultDataSet(data_sets::DefaultDataSet::decode(r, len)?),
            CurrentDataSet => Payload::CurrentDataSet(data_sets::CurrentDataSet::decode(r, len)?),
            ParentDataSet => Payload::ParentDataSet(data_sets::ParentDataSet::decode(r, len)?),
            TimePropertiesDataSet => {
                Payload::TimePropertiesDataSet(data_sets::TimePropertiesDataSet::decode(r, len)?)
            }
            PortDataSet => Payload::PortDataSet(data_sets::PortDataSet::decode(r, len)?),
            UtcProperties => Payload::UtcProperties(data_sets::UtcProperties::decode(r, len)?),
            TraceabilityProperties => {
                Payload::TraceabilityProperties(data_sets::TraceabilityProperties::decode(r, len)?)
            }
            TimescaleProperties => {
                Payload::TimescaleProperties(data_sets::TimescaleProperties::decode(r, len)?)
            }
            Priority1 => Payload::Priority1(scalar::U8Field::decode_named(r, len, "priority1")?),
            Priority2 => Payload::Priority2(scalar::U8Field::decode_named(r, len, "priority2")?),
            Domain => Payload::Domain(scalar::U8Field::decode_named(r, len, "domainNumber")?),
            SlaveOnly => Payload::SlaveOnly(scalar::BoolField::decode_named(r, len, "slaveOnly")?),
            LogAnnounceInterval => Payload::LogAnnounceInterval(scalar::I8Field::decode_named(
                r,
                len,
                "logAnnounceInterval",
            )?),
            AnnounceReceiptTimeout => Payload::AnnounceReceiptTimeout(scalar::U8Field::decode_named(
                r,
                len,
                "announceReceiptTimeout",
            )?),
            LogSyncInterval => {
                Payload::LogSyncInterval(scalar::I8Field::decode_named(r, len, "logSyncInterval")?)
            }
            VersionNumber => {
                Payload::VersionNumber(scalar::U8Field::decode_named(r, len, "versionNumber")?)
            }
            Time => Payload::Time(scalar::TimestampField::decode_named(r, len, "currentTime")?),
            ClockAccuracy => {
                Payload::ClockAccuracy(scalar::U8Field::decode_named(r, len, "clockAccuracy")?)
            }
            UnicastNegotiationEnable => Payload::UnicastNegotiationEnable(
                scalar::BoolField::decode_named(r, len, "unicastNegotiationPortDS")?,
            ),
            PathTraceEnable => {
                Payload::PathTraceEnable(scalar::BoolField::decode_named(r, len, "pathTraceDS")?)
            }
            UnicastMasterMaxTableSize => Payload::UnicastMasterMaxTableSize(
                scalar::U16Field::decode_named(r, len, "maxTableSize")?,
            ),
            AcceptableMasterTableEnabled => Payload::AcceptableMasterTableEnabled(
                scalar::BoolField::decode_named(r, len, "acceptableMasterPortDS")?,
            ),
            AcceptableMasterMaxTableSize => Payload::AcceptableMasterMaxTableSize(
                scalar::U16Field::decode_named(r, len, "maxTableSize")?,
            ),
            AlternateTimeOffsetMaxKey => Payload::AlternateTimeOffsetMaxKey(
                scalar::U8Field::decode_named(r, len, "maxKey")?,
            ),
            PrimaryDomain => {
                Payload::PrimaryDomain(scalar::U8Field::decode_named(r, len, "primaryDomain")?)
            }
            DelayMechanism => {
                Payload::DelayMechanism(scalar::U8Field::decode_named(r, len, "delayMechanism")?)
            }
            LogMinPdelayReqInterval => Payload::LogMinPdelayReqInterval(
                scalar::I8Field::decode_named(r, len, "logMinPdelayReqInterval")?,
            ),
            ExternalPortConfigurationEnabled => Payload::ExternalPortConfigurationEnabled(
                scalar::BoolField::decode_named(r, len, "enable")?,
            ),
            MasterOnly => Payload::MasterOnly(scalar::BoolField::decode_named(r, len, "masterOnly")?),
            HoldoverUpgradeEnable => Payload::HoldoverUpgradeEnable(
                scalar::BoolField::decode_named(r, len, "enable")?,
            ),
            SynchronizationUncertainNp => Payload::SynchronizationUncertainNp(
                scalar::U8Field::decode_named(r, len, "val")?,
            ),
            PathTraceList => Payload::PathTraceList(tables::PathTraceList::decode(r, len)?),
            GrandmasterClusterTable => {
                Payload::GrandmasterClusterTable(tables::PortAddressTable::decode(r, len)?)
            }
            UnicastMasterTable => Payload::UnicastMasterTable(tables::PortAddressTable::decode(r, len)?),
            AcceptableMasterTable => {
                Payload::AcceptableMasterTable(tables::AcceptableMasterTable::decode(r, len)?)
            }
            AlternateMaster => Payload::AlternateMaster(tables::AlternateMaster::decode(r, len)?),
            AlternateTimeOffsetEnable => {
                Payload::AlternateTimeOffsetEnable(tables::AlternateTimeOffsetEnable::decode(r, len)?)
            }
            AlternateTimeOffsetName => {
                Payload::AlternateTimeOffsetName(tables::AlternateTimeOffsetName::decode(r, len)?)
            }
            AlternateTimeOffsetProperties => Payload::AlternateTimeOffsetProperties(
                tables::AlternateTimeOffsetProperties::decode(r, len)?,
            ),
            TransparentClockDefaultDataSet => Payload::TransparentClockDefaultDataSet(
                transparent::TransparentClockDefaultDataSet::decode(r, len)?,
            ),
            TransparentClockPortDataSet => Payload::TransparentClockPortDataSet(
                transparent::TransparentClockPortDataSet::decode(r, len)?,
            ),
            ExtPortConfigPortDataSet => {
                Payload::ExtPortConfigPortDataSet(transparent::ExtPortConfigPortDataSet::decode(r, len)?)
            }
            TimeStatusNp => Payload::TimeStatusNp(np::TimeStatusNp::decode(r, len)?),
            GrandmasterSettingsNp => {
                Payload::GrandmasterSettingsNp(np::GrandmasterSettingsNp::decode(r, len)?)
            }
            PortDataSetNp => Payload::PortDataSetNp(np::PortDataSetNp::decode(r, len)?),
            SubscribeEventsNp => Payload::SubscribeEventsNp(np::SubscribeEventsNp::decode(r, len)?),
            PortPropertiesNp => Payload::PortPropertiesNp(np::PortPropertiesNp::decode(r, len)?),
            PortStatsNp => Payload::PortStatsNp(np::PortStatsNp::decode(r, len)?),
            PortServiceStatsNp => Payload::PortServiceStatsNp(np::PortServiceStatsNp::decode(r, len)?),
            UnicastMasterTableNp => {
                Payload::UnicastMasterTableNp(np::UnicastMasterTableNp::decode(r, len)?)
            }
            PortHwclockNp => Payload::PortHwclockNp(np::PortHwclockNp::decode(r, len)?),
            PowerProfileSettingsNp => {
                Payload::PowerProfileSettingsNp(np::PowerProfileSettingsNp::decode(r, len)?)
            }
            CmldsInfoNp => Payload::CmldsInfoNp(np::CmldsInfoNp::decode(r, len)?),
            SmpteMngId => Payload::SmpteMngId(org_ext::SmpteMngId::decode(r, len)?),
        };
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length(format!(
                "{} decoder consumed {consumed} of {len} available octets",
                id.name()
            ))));
        }
        r.skip(len - consumed)?; // trailing reserved padding, skipped per §4.4
        Ok(payload)
    }

    /// Build the payload belonging to `id` from its accepted JSON form (C7).
    pub fn from_json(id: ManagementId, v: &Value) -> Result<Self> {
        use ManagementId::*;
        Ok(match id {
            NullPtpManagement | SaveInNonVolatileStorage | ResetNonVolatileStorage
            | FaultLogReset | EnablePort | DisablePort | Initialize => Payload::Empty,
            ClockDescription => Payload::ClockDescription(data_sets::ClockDescription::from_json(v)?),
            UserDescription => Payload::UserDescription(data_sets::UserDescription::from_json(v)?),
            FaultLog => Payload::FaultLog(data_sets::FaultLog::from_json(v)?),
            DefaultDataSet => Payload::DefaultDataSet(data_sets::DefaultDataSet::from_json(v)?),
            CurrentDataSet => Payload::CurrentDataSet(data_sets::CurrentDataSet::from_json(v)?),
            ParentDataSet => Payload::ParentDataSet(data_sets::ParentDataSet::from_json(v)?),
            TimePropertiesDataSet => {
                Payload::TimePropertiesDataSet(data_sets::TimePropertiesDataSet::from_json(v)?)
            }
            PortDataSet => Payload::PortDataSet(data_sets::PortDataSet::from_json(v)?),
            UtcProperties => Payload::UtcProperties(data_sets::UtcProperties::from_json(v)?),
            TraceabilityProperties => {
                Payload::TraceabilityProperties(data_sets::TraceabilityProperties::from_json(v)?)
            }
            TimescaleProperties => {
                Payload::TimescaleProperties(data_sets::TimescaleProperties::from_json(v)?)
            }
            Priority1 => Payload::Priority1(scalar::U8Field::from_json(v, "priority1")?),
            Priority2 => Payload::Priority2(scalar::U8Field::from_json(v, "priority2")?),
            Domain => Payload::Domain(scalar::U8Field::from_json(v, "domainNumber")?),
            SlaveOnly => Payload::SlaveOnly(scalar::BoolField::from_json(v, "slaveOnly")?),
            LogAnnounceInterval => {
                Payload::LogAnnounceInterval(scalar::I8Field::from_json(v, "logAnnounceInterval")?)
            }
            AnnounceReceiptTimeout => Payload::AnnounceReceiptTimeout(scalar::U8Field::from_json(
                v,
                "announceReceiptTimeout",
            )?),
            LogSyncInterval => Payload::LogSyncInterval(scalar::I8Field::from_json(v, "logSyncInterval")?),
            VersionNumber => Payload::VersionNumber(scalar::U8Field::from_json(v, "versionNumber")?),
            Time => Payload::Time(scalar::TimestampField::from_json(v, "currentTime")?),
            ClockAccuracy => Payload::ClockAccuracy(scalar::U8Field::from_json(v, "clockAccuracy")?),
            UnicastNegotiationEnable => Payload::UnicastNegotiationEnable(scalar::BoolField::from_json(
                v,
                "unicastNegotiationPortDS",
            )?),
            PathTraceEnable => Payload::PathTraceEnable(scalar::BoolField::from_json(v, "pathTraceDS")?),
            UnicastMasterMaxTableSize => {
                Payload::UnicastMasterMaxTableSize(scalar::U16Field::from_json(v, "maxTableSize")?)
            }
            AcceptableMasterTableEnabled => Payload::AcceptableMasterTableEnabled(
                scalar::BoolField::from_json(v, "acceptableMasterPortDS")?,
            ),
            AcceptableMasterMaxTableSize => {
                Payload::AcceptableMasterMaxTableSize(scalar::U16Field::from_json(v, "maxTableSize")?)
            }
            AlternateTimeOffsetMaxKey => {
                Payload::AlternateTimeOffsetMaxKey(scalar::U8Field::from_json(v, "maxKey")?)
            }
            PrimaryDomain => Payload::PrimaryDomain(scalar::U8Field::from_json(v, "primaryDomain")?),
            DelayMechanism => Payload::DelayMechanism(scalar::U8Field::from_json(v, "delayMechanism")?),
            LogMinPdelayReqInterval => {
                Payload::LogMinPdelayReqInterval(scalar::I8Field::from_json(v, "logMinPdelayReqInterval")?)
            }
            ExternalPortConfigurationEnabled => Payload::ExternalPortConfigurationEnabled(
                scalar::BoolField::from_json(v, "enable")?,
            ),
            MasterOnly => Payload::MasterOnly(scalar::BoolField::from_json(v, "masterOnly")?),
            HoldoverUpgradeEnable => {
                Payload::HoldoverUpgradeEnable(scalar::BoolField::from_json(v, "enable")?)
            }
            SynchronizationUncertainNp => {
                Payload::SynchronizationUncertainNp(scalar::U8Field::from_json(v, "val")?)
            }
            PathTraceList => Payload::PathTraceList(tables::PathTraceList::from_json(v)?),
            GrandmasterClusterTable => {
                Payload::GrandmasterClusterTable(tables::PortAddressTable::from_json(v)?)
            }
            UnicastMasterTable => Payload::UnicastMasterTable(tables::PortAddressTable::from_json(v)?),
            AcceptableMasterTable => {
                Payload::AcceptableMasterTable(tables::AcceptableMasterTable::from_json(v)?)
            }
            AlternateMaster => Payload::AlternateMaster(tables::AlternateMaster::from_json(v)?),
            AlternateTimeOffsetEnable => {
                Payload::AlternateTimeOffsetEnable(tables::AlternateTimeOffsetEnable::from_json(v)?)
            }
            AlternateTimeOffsetName => {
                Payload::AlternateTimeOffsetName(tables::AlternateTimeOffsetName::from_json(v)?)
            }
            AlternateTimeOffsetProperties => Payload::AlternateTimeOffsetProperties(
                tables::AlternateTimeOffsetProperties::from_json(v)?,
            ),
            TransparentClockDefaultDataSet => Payload::TransparentClockDefaultDataSet(
                transparent::TransparentClockDefaultDataSet::from_json(v)?,
            ),
            TransparentClockPortDataSet => Payload::TransparentClockPortDataSet(
                transparent::TransparentClockPortDataSet::from_json(v)?,
            ),
            ExtPortConfigPortDataSet => {
                Payload::ExtPortConfigPortDataSet(transparent::ExtPortConfigPortDataSet::from_json(v)?)
            }
            TimeStatusNp => Payload::TimeStatusNp(np::TimeStatusNp::from_json(v)?),
            GrandmasterSettingsNp => {
                Payload::GrandmasterSettingsNp(np::GrandmasterSettingsNp::from_json(v)?)
            }
            PortDataSetNp => Payload::PortDataSetNp(np::PortDataSetNp::from_json(v)?),
            SubscribeEventsNp => Payload::SubscribeEventsNp(np::SubscribeEventsNp::from_json(v)?),
            PortPropertiesNp => Payload::PortPropertiesNp(np::PortPropertiesNp::from_json(v)?),
            PortStatsNp => Payload::PortStatsNp(np::PortStatsNp::from_json(v)?),
            PortServiceStatsNp => Payload::PortServiceStatsNp(np::PortServiceStatsNp::from_json(v)?),
            UnicastMasterTableNp => {
                Payload::UnicastMasterTableNp(np::UnicastMasterTableNp::from_json(v)?)
            }
            PortHwclockNp => Payload::PortHwclockNp(np::PortHwclockNp::from_json(v)?),
            PowerProfileSettingsNp => {
                Payload::PowerProfileSettingsNp(np::PowerProfileSettingsNp::from_json(v)?)
            }
            CmldsInfoNp => Payload::CmldsInfoNp(np::CmldsInfoNp::from_json(v)?),
            SmpteMngId => Payload::SmpteMngId(org_ext::SmpteMngId::from_json(v)?),
        })
    }
}

/// `MANAGEMENT_ERROR_STATUS`: replaces the expected MANAGEMENT TLV on error (§3.4 invariant 6).
#[derive(Debug, Clone)]
pub struct ManagementErrorStatus {
    pub management_id: u16,
    pub management_error_id: u16,
    pub display_data: Option<crate::wire::PtpText>,
}

impl ManagementErrorStatus {
    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let start = r.position();
        let management_error_id = r.read_u16()?;
        let management_id = r.read_u16()?;
        r.skip(4)?; // reserved
        let consumed = r.position() - start;
        let display_data = if consumed < len {
            Some(crate::wire::PtpText::decode(r)?)
        } else {
            None
        };
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length(
                "MANAGEMENT_ERROR_STATUS overran its TLV length".into()
            )));
        }
        r.skip(len - consumed)?;
        Ok(Self {
            management_id,
            management_error_id,
            display_data,
        })
    }

    pub fn wire_len(&self) -> usize {
        8 + self.display_data.as_ref().map(|t| t.wire_len()).unwrap_or(0)
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.management_error_id)?;
        w.write_u16(self.management_id)?;
        w.write_zeros(4)?;
        if let Some(text) = &self.display_data {
            text.encode(w)?;
        }
        Ok(())
    }
}

/// `managementErrorId` values (IEEE 1588-2019 Table 73).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ManagementErrorId {
    ResponseTooBig = 0x0001,
    NoSuchId = 0x0002,
    WrongLength = 0x0003,
    WrongValue = 0x0004,
    NotSetable = 0x0005,
    NotSupported = 0x0006,
    GeneralError = 0xFFFE,
}

impl ManagementErrorId {
    pub fn from_wire(v: u16) -> Option<Self> {
        use ManagementErrorId::*;
        Some(match v {
            0x0001 => ResponseTooBig,
            0x0002 => NoSuchId,
            0x0003 => WrongLength,
            0x0004 => WrongValue,
            0x0005 => NotSetable,
            0x0006 => NotSupported,
            0xFFFE => GeneralError,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use ManagementErrorId::*;
        match self {
            ResponseTooBig => "RESPONSE_TOO_BIG",
            NoSuchId => "NO_SUCH_ID",
            WrongLength => "WRONG_LENGTH",
            WrongValue => "WRONG_VALUE",
            NotSetable => "NOT_SETABLE",
            NotSupported => "NOT_SUPPORTED",
            GeneralError => "GENERAL_ERROR",
        }
    }
}
