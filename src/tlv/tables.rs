//! Table- and list-shaped payloads: explicit-count arrays per §4.4 (an
//! up-front count field followed by that many fixed-width records, no
//! self-describing terminator).

use super::{json_bool, json_get, json_object, json_str, json_u64};
use crate::error::{record_here, Error, Result};
use crate::types::PortAddress;
use crate::wire::{ClockIdentity, PortIdentity, PtpText, Reader, Writer};
use serde_json::{Map, Value};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Object(m)
}

/// `PATH_TRACE_LIST`: the remaining TLV length divided evenly into 8-octet
/// clockIdentity entries, with no separate count field (§4.4 edge case).
#[derive(Debug, Clone)]
pub struct PathTraceList {
    pub path_sequence: Vec<ClockIdentity>,
}

impl PathTraceList {
    pub fn wire_len(&self) -> usize {
        self.path_sequence.len() * ClockIdentity::WIRE_LEN
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len % ClockIdentity::WIRE_LEN != 0 {
            return Err(record_here!(Error::Length(format!(
                "PATH_TRACE_LIST length {len} is not a multiple of {}",
                ClockIdentity::WIRE_LEN
            ))));
        }
        let count = len / ClockIdentity::WIRE_LEN;
        let mut path_sequence = Vec::with_capacity(count);
        for _ in 0..count {
            path_sequence.push(ClockIdentity::decode(r)?);
        }
        Ok(Self { path_sequence })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        for id in &self.path_sequence {
            id.encode(w)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![(
            "pathSequence",
            Value::Array(
                self.path_sequence
                    .iter()
                    .map(|id| Value::String(id.to_canonical_string()))
                    .collect(),
            ),
        )])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json("PATH_TRACE_LIST is GET-only, not buildable from JSON".into()))
    }
}

/// A table of [`PortAddress`] entries preceded by an explicit count, used by
/// `GRANDMASTER_CLUSTER_TABLE` and `UNICAST_MASTER_TABLE`.
#[derive(Debug, Clone)]
pub struct PortAddressTable {
    pub log_query_interval: i8,
    pub actual_table_size: u16,
    pub port_addresses: Vec<PortAddress>,
}

impl PortAddressTable {
    pub fn wire_len(&self) -> usize {
        1 + 2 + self.port_addresses.iter().map(PortAddress::wire_len).sum::<usize>()
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let start = r.position();
        let log_query_interval = r.read_i8()?;
        let actual_table_size = r.read_u16()?;
        let mut port_addresses = Vec::with_capacity(actual_table_size as usize);
        for _ in 0..actual_table_size {
            port_addresses.push(PortAddress::decode(r)?);
        }
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length("port address table overran its TLV length".into())));
        }
        Ok(Self {
            log_query_interval,
            actual_table_size,
            port_addresses,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_i8(self.log_query_interval)?;
        w.write_u16(self.port_addresses.len() as u16)?;
        for pa in &self.port_addresses {
            pa.encode(w)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("logQueryInterval", Value::from(self.log_query_interval)),
            ("actualTableSize", Value::from(self.actual_table_size)),
            (
                "PortAddress",
                Value::Array(
                    self.port_addresses
                        .iter()
                        .map(|pa| {
                            obj(vec![
                                (
                                    "networkProtocol",
                                    Value::String(
                                        crate::types::NetworkProtocol::from_wire(pa.network_protocol)
                                            .map(|p| p.as_str().to_string())
                                            .unwrap_or_else(|| format!("0x{:04x}", pa.network_protocol)),
                                    ),
                                ),
                                ("addressField", Value::String(pa.address_to_string())),
                            ])
                        })
                        .collect(),
                ),
            ),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "port address table")?;
        let arr = json_get(o, "PortAddress")?
            .as_array()
            .ok_or_else(|| Error::Json("PortAddress must be an array".into()))?;
        let mut port_addresses = Vec::with_capacity(arr.len());
        for item in arr {
            let io = json_object(item, "PortAddress entry")?;
            let proto_str = json_str(io, "networkProtocol")?;
            let network_protocol = crate::types::NetworkProtocol::from_str_ci(proto_str)
                .map(|p| p as u16)
                .ok_or_else(|| Error::Json(format!("unknown networkProtocol: {proto_str}")))?;
            port_addresses.push(PortAddress::address_from_string(network_protocol, json_str(io, "addressField")?)?);
        }
        Ok(Self {
            log_query_interval: json_get(o, "logQueryInterval")?
                .as_i64()
                .ok_or_else(|| Error::Json("logQueryInterval must be an integer".into()))? as i8,
            actual_table_size: port_addresses.len() as u16,
            port_addresses,
        })
    }
}

/// One row of `ACCEPTABLE_MASTER_TABLE`.
#[derive(Debug, Clone)]
pub struct AcceptableMasterEntry {
    pub acceptable_master_port_identity: PortIdentity,
    pub alternate_priority1: u8,
}

/// `ACCEPTABLE_MASTER_TABLE`.
#[derive(Debug, Clone)]
pub struct AcceptableMasterTable {
    pub actual_table_size: u16,
    pub list: Vec<AcceptableMasterEntry>,
}

impl AcceptableMasterTable {
    const ENTRY_LEN: usize = PortIdentity::WIRE_LEN + 1;

    pub fn wire_len(&self) -> usize {
        2 + self.list.len() * Self::ENTRY_LEN
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let start = r.position();
        let actual_table_size = r.read_u16()?;
        let mut list = Vec::with_capacity(actual_table_size as usize);
        for _ in 0..actual_table_size {
            list.push(AcceptableMasterEntry {
                acceptable_master_port_identity: PortIdentity::decode(r)?,
                alternate_priority1: r.read_u8()?,
            });
        }
        let consumed = r.position() - start;
        if consumed > len {
            return Err(record_here!(Error::Length("ACCEPTABLE_MASTER_TABLE overran its TLV length".into())));
        }
        Ok(Self { actual_table_size, list })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u16(self.list.len() as u16)?;
        for e in &self.list {
            e.acceptable_master_port_identity.encode(w)?;
            w.write_u8(e.alternate_priority1)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("actualTableSize", Value::from(self.actual_table_size)),
            (
                "list",
                Value::Array(
                    self.list
                        .iter()
                        .map(|e| {
                            obj(vec![
                                (
                                    "acceptableMasterPortIdentity",
                                    Value::String(e.acceptable_master_port_identity.to_canonical_string()),
                                ),
                                ("alternatePriority1", Value::from(e.alternate_priority1)),
                            ])
                        })
                        .collect(),
                ),
            ),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "ACCEPTABLE_MASTER_TABLE")?;
        let arr = json_get(o, "list")?
            .as_array()
            .ok_or_else(|| Error::Json("list must be an array".into()))?;
        let mut list = Vec::with_capacity(arr.len());
        for item in arr {
            let io = json_object(item, "acceptable master entry")?;
            list.push(AcceptableMasterEntry {
                acceptable_master_port_identity: PortIdentity::from_canonical_string(json_str(
                    io,
                    "acceptableMasterPortIdentity",
                )?)?,
                alternate_priority1: json_u64(io, "alternatePriority1")? as u8,
            });
        }
        Ok(Self {
            actual_table_size: list.len() as u16,
            list,
        })
    }
}

/// `ALTERNATE_MASTER`.
#[derive(Debug, Clone)]
pub struct AlternateMaster {
    pub transmit_alternate_multicast_sync: bool,
    pub log_alternate_multicast_sync_interval: i8,
    pub number_of_alternate_masters: u8,
}

impl AlternateMaster {
    pub fn wire_len(&self) -> usize {
        3
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 3 {
            return Err(record_here!(Error::Length("ALTERNATE_MASTER needs 3 octets".into())));
        }
        Ok(Self {
            transmit_alternate_multicast_sync: r.read_u8()? & 1 != 0,
            log_alternate_multicast_sync_interval: r.read_i8()?,
            number_of_alternate_masters: r.read_u8()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.transmit_alternate_multicast_sync as u8)?;
        w.write_i8(self.log_alternate_multicast_sync_interval)?;
        w.write_u8(self.number_of_alternate_masters)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("transmitAlternateMulticastSync", Value::Bool(self.transmit_alternate_multicast_sync)),
            (
                "logAlternateMulticastSyncInterval",
                Value::from(self.log_alternate_multicast_sync_interval),
            ),
            ("numberOfAlternateMasters", Value::from(self.number_of_alternate_masters)),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "ALTERNATE_MASTER")?;
        Ok(Self {
            transmit_alternate_multicast_sync: json_bool(o, "transmitAlternateMulticastSync")?,
            log_alternate_multicast_sync_interval: json_get(o, "logAlternateMulticastSyncInterval")?
                .as_i64()
                .ok_or_else(|| Error::Json("logAlternateMulticastSyncInterval must be an integer".into()))?
                as i8,
            number_of_alternate_masters: json_u64(o, "numberOfAlternateMasters")? as u8,
        })
    }
}

/// `ALTERNATE_TIME_OFFSET_ENABLE`.
#[derive(Debug, Clone)]
pub struct AlternateTimeOffsetEnable {
    pub key_field: u8,
    pub enable: bool,
}

impl AlternateTimeOffsetEnable {
    pub fn wire_len(&self) -> usize {
        2
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 2 {
            return Err(record_here!(Error::Length("ALTERNATE_TIME_OFFSET_ENABLE needs 2 octets".into())));
        }
        Ok(Self {
            key_field: r.read_u8()?,
            enable: r.read_u8()? & 1 != 0,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.key_field)?;
        w.write_u8(self.enable as u8)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("keyField", Value::from(self.key_field)),
            ("enable", Value::Bool(self.enable)),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "ALTERNATE_TIME_OFFSET_ENABLE")?;
        Ok(Self {
            key_field: json_u64(o, "keyField")? as u8,
            enable: json_bool(o, "enable")?,
        })
    }
}

/// `ALTERNATE_TIME_OFFSET_NAME`.
#[derive(Debug, Clone)]
pub struct AlternateTimeOffsetName {
    pub key_field: u8,
    pub display_name: PtpText,
}

impl AlternateTimeOffsetName {
    pub fn wire_len(&self) -> usize {
        1 + self.display_name.wire_len()
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        let _ = len;
        Ok(Self {
            key_field: r.read_u8()?,
            display_name: PtpText::decode(r)?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.key_field)?;
        self.display_name.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("keyField", Value::from(self.key_field)),
            ("displayName", Value::String(self.display_name.0.clone())),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "ALTERNATE_TIME_OFFSET_NAME")?;
        Ok(Self {
            key_field: json_u64(o, "keyField")? as u8,
            display_name: PtpText::new(json_str(o, "displayName")?),
        })
    }
}

/// `ALTERNATE_TIME_OFFSET_PROPERTIES`.
#[derive(Debug, Clone)]
pub struct AlternateTimeOffsetProperties {
    pub key_field: u8,
    pub current_offset: i32,
    pub jump_seconds: i32,
    pub time_of_next_jump: u64,
}

impl AlternateTimeOffsetProperties {
    pub fn wire_len(&self) -> usize {
        1 + 4 + 4 + 6
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 15 {
            return Err(record_here!(Error::Length(
                "ALTERNATE_TIME_OFFSET_PROPERTIES needs 15 octets".into()
            )));
        }
        Ok(Self {
            key_field: r.read_u8()?,
            current_offset: r.read_i32()?,
            jump_seconds: r.read_i32()?,
            time_of_next_jump: r.read_u48()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_u8(self.key_field)?;
        w.write_i32(self.current_offset)?;
        w.write_i32(self.jump_seconds)?;
        w.write_u48(self.time_of_next_jump)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("keyField", Value::from(self.key_field)),
            ("currentOffset", Value::from(self.current_offset)),
            ("jumpSeconds", Value::from(self.jump_seconds)),
            ("timeOfNextJump", Value::from(self.time_of_next_jump)),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "ALTERNATE_TIME_OFFSET_PROPERTIES")?;
        Ok(Self {
            key_field: json_u64(o, "keyField")? as u8,
            current_offset: json_get(o, "currentOffset")?
                .as_i64()
                .ok_or_else(|| Error::Json("currentOffset must be an integer".into()))? as i32,
            jump_seconds: json_get(o, "jumpSeconds")?
                .as_i64()
                .ok_or_else(|| Error::Json("jumpSeconds must be an integer".into()))? as i32,
            time_of_next_jump: json_u64(o, "timeOfNextJump")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_trace_list_round_trips_two_entries() {
        let payload = PathTraceList {
            path_sequence: vec![
                ClockIdentity::from_canonical_string("c47d46.fffe.20acae").unwrap(),
                ClockIdentity::from_canonical_string("0c0413.610b.4a0c4a").unwrap(),
            ],
        };
        let mut buf = [0u8; 32];
        let mut w = Writer::new(&mut buf);
        payload.encode(&mut w).unwrap();
        let len = w.position();
        assert_eq!(len, 16);
        let mut r = Reader::new(&buf[..len]);
        let decoded = PathTraceList::decode(&mut r, len).unwrap();
        assert_eq!(decoded.path_sequence.len(), 2);
        assert_eq!(decoded.path_sequence[0].to_canonical_string(), "c47d46.fffe.20acae");
        assert_eq!(decoded.path_sequence[1].to_canonical_string(), "0c0413.610b.4a0c4a");
    }

    #[test]
    fn path_trace_list_rejects_misaligned_length() {
        let mut r = Reader::new(&[0u8; 9]);
        assert!(PathTraceList::decode(&mut r, 9).is_err());
    }

    #[test]
    fn path_trace_list_is_get_only_in_json() {
        let json = serde_json::json!({"pathSequence": []});
        assert!(PathTraceList::from_json(&json).is_err());
    }
}
