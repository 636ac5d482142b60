//! Transparent-clock and external-port-configuration data sets (§3.3, Table 55/56).

use crate::error::{record_here, Error, Result};
use crate::wire::{ClockIdentity, PortIdentity, Reader, TimeInterval, Writer};
use serde_json::{Map, Value};

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Object(m)
}

/// `TRANSPARENT_CLOCK_DEFAULT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct TransparentClockDefaultDataSet {
    pub clock_identity: ClockIdentity,
    pub number_ports: u16,
    pub delay_mechanism: u8,
    pub primary_domain: u8,
}

impl TransparentClockDefaultDataSet {
    pub fn wire_len(&self) -> usize {
        ClockIdentity::WIRE_LEN + 2 + 1 + 1
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 12 {
            return Err(record_here!(Error::Length(
                "TRANSPARENT_CLOCK_DEFAULT_DATA_SET needs 12 octets".into()
            )));
        }
        Ok(Self {
            clock_identity: ClockIdentity::decode(r)?,
            number_ports: r.read_u16()?,
            delay_mechanism: r.read_u8()?,
            primary_domain: r.read_u8()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.clock_identity.encode(w)?;
        w.write_u16(self.number_ports)?;
        w.write_u8(self.delay_mechanism)?;
        w.write_u8(self.primary_domain)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("clockIdentity", Value::String(self.clock_identity.to_canonical_string())),
            ("numberPorts", Value::from(self.number_ports)),
            ("delayMechanism", Value::from(self.delay_mechanism)),
            ("primaryDomain", Value::from(self.primary_domain)),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json(
            "TRANSPARENT_CLOCK_DEFAULT_DATA_SET is GET-only, not buildable from JSON".into(),
        ))
    }
}

/// `TRANSPARENT_CLOCK_PORT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct TransparentClockPortDataSet {
    pub port_identity: PortIdentity,
    pub log_min_pdelay_req_interval: i8,
    pub faulty_flag: bool,
    pub peer_mean_path_delay: TimeInterval,
}

impl TransparentClockPortDataSet {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 1 + 1 + TimeInterval::WIRE_LEN
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 20 {
            return Err(record_here!(Error::Length(
                "TRANSPARENT_CLOCK_PORT_DATA_SET needs 20 octets".into()
            )));
        }
        Ok(Self {
            port_identity: PortIdentity::decode(r)?,
            log_min_pdelay_req_interval: r.read_i8()?,
            faulty_flag: r.read_u8()? & 1 != 0,
            peer_mean_path_delay: TimeInterval::decode(r)?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        w.write_i8(self.log_min_pdelay_req_interval)?;
        w.write_u8(self.faulty_flag as u8)?;
        self.peer_mean_path_delay.encode(w)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            ("logMinPdelayReqInterval", Value::from(self.log_min_pdelay_req_interval)),
            ("faultyFlag", Value::Bool(self.faulty_flag)),
            ("peerMeanPathDelay", Value::from(self.peer_mean_path_delay.to_nanoseconds())),
        ])
    }

    pub fn from_json(_v: &Value) -> Result<Self> {
        Err(Error::Json(
            "TRANSPARENT_CLOCK_PORT_DATA_SET is GET-only, not buildable from JSON".into(),
        ))
    }
}

/// `EXT_PORT_CONFIG_PORT_DATA_SET`.
#[derive(Debug, Clone)]
pub struct ExtPortConfigPortDataSet {
    pub port_identity: PortIdentity,
    pub desired_state: u8,
}

impl ExtPortConfigPortDataSet {
    pub fn wire_len(&self) -> usize {
        PortIdentity::WIRE_LEN + 1 + 1
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 12 {
            return Err(record_here!(Error::Length("EXT_PORT_CONFIG_PORT_DATA_SET needs 12 octets".into())));
        }
        let port_identity = PortIdentity::decode(r)?;
        let desired_state = r.read_u8()?;
        r.skip(1)?;
        Ok(Self {
            port_identity,
            desired_state,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        self.port_identity.encode(w)?;
        w.write_u8(self.desired_state)?;
        w.write_u8(0)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("portIdentity", Value::String(self.port_identity.to_canonical_string())),
            (
                "desiredState",
                Value::String(
                    crate::types::PortState::from_wire(self.desired_state)
                        .map(|s| s.as_str().to_string())
                        .unwrap_or_else(|| format!("0x{:02x}", self.desired_state)),
                ),
            ),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = super::json_object(v, "EXT_PORT_CONFIG_PORT_DATA_SET")?;
        let state_str = super::json_str(o, "desiredState")?;
        let desired_state = crate::types::PortState::from_str_ci(state_str)
            .map(|s| s as u8)
            .ok_or_else(|| Error::Json(format!("unknown desiredState: {state_str}")))?;
        Ok(Self {
            port_identity: PortIdentity::from_canonical_string(super::json_str(o, "portIdentity")?)?,
            desired_state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_clock_default_data_set_round_trips_wire() {
        let payload = TransparentClockDefaultDataSet {
            clock_identity: ClockIdentity([1, 2, 3, 4, 5, 6, 7, 8]),
            number_ports: 3,
            delay_mechanism: 1,
            primary_domain: 0,
        };
        let mut buf = [0u8; 16];
        let mut w = Writer::new(&mut buf);
        payload.encode(&mut w).unwrap();
        let len = w.position();
        assert_eq!(len, payload.wire_len());
        let mut r = Reader::new(&buf[..len]);
        let decoded = TransparentClockDefaultDataSet::decode(&mut r, len).unwrap();
        assert_eq!(decoded.number_ports, 3);
        assert_eq!(decoded.delay_mechanism, 1);
    }

    #[test]
    fn ext_port_config_port_data_set_round_trips_json() {
        let payload = ExtPortConfigPortDataSet {
            port_identity: PortIdentity {
                clock_identity: ClockIdentity([0xc4, 0x7d, 0x46, 0xff, 0xfe, 0x20, 0xac, 0xae]),
                port_number: 1,
            },
            desired_state: crate::types::PortState::Slave as u8,
        };
        let json = payload.to_json();
        assert_eq!(json["desiredState"], Value::String("SLAVE".to_string()));
        let back = ExtPortConfigPortDataSet::from_json(&json).unwrap();
        assert_eq!(back.desired_state, crate::types::PortState::Slave as u8);
        assert_eq!(back.port_identity.port_number, 1);
    }

    #[test]
    fn ext_port_config_port_data_set_rejects_unknown_state() {
        let json = obj(vec![
            ("portIdentity", Value::String("c47d46.fffe.20acae-1".to_string())),
            ("desiredState", Value::String("NOT_A_STATE".to_string())),
        ]);
        assert!(ExtPortConfigPortDataSet::from_json(&json).is_err());
    }
}
