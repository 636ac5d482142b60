//! Organization-extension payloads surfaced as management-like TLVs
//! (§4.4): vendor OUI plus a vendor-defined body, here the SMPTE ST 2059-2
//! time-address extension carried by `ptp4l`'s SMPTE profile.

use super::{json_get, json_object, json_u64};
use crate::error::{record_here, Error, Result};
use crate::wire::{Reader, Writer};
use serde_json::{Map, Value};

const SMPTE_OUI: [u8; 3] = [0x68, 0x97, 0xe8];
const SMPTE_SUB_TYPE: [u8; 3] = [0x00, 0x00, 0x01];

/// Whether an `ORGANIZATION_EXTENSION` TLV's OUI/subtype match the SMPTE
/// ST 2059-2 time-address extension (§4.4).
pub(crate) fn is_smpte(organization_id: &[u8; 3], organization_sub_type: &[u8; 3]) -> bool {
    *organization_id == SMPTE_OUI && *organization_sub_type == SMPTE_SUB_TYPE
}

fn obj(pairs: Vec<(&str, Value)>) -> Value {
    let mut m = Map::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    Value::Object(m)
}

/// `SMPTE_MNG_ID`: the ST 2059-2 organization-extension time-address payload.
#[derive(Debug, Clone)]
pub struct SmpteMngId {
    pub organization_id: [u8; 3],
    pub organization_sub_type: [u8; 3],
    pub default_system_frame_rate_numerator: u16,
    pub default_system_frame_rate_denominator: u16,
    pub master_locking_status: u8,
    pub time_address_flags: u8,
    pub current_local_offset: i32,
    pub jump_seconds: i8,
    pub time_of_next_jump: u64,
    pub time_of_next_jam: u64,
    pub time_of_previous_jam: u64,
    pub previous_jam_local_offset: i32,
    pub daylight_saving: u8,
    pub leap_second_jump: u8,
}

impl SmpteMngId {
    pub fn wire_len(&self) -> usize {
        3 + 3 + 2 + 2 + 1 + 1 + 4 + 1 + 6 + 6 + 6 + 4 + 1 + 1
    }

    pub fn decode(r: &mut Reader, len: usize) -> Result<Self> {
        if len < 41 {
            return Err(record_here!(Error::Length("SMPTE_MNG_ID needs 41 octets".into())));
        }
        Ok(Self {
            organization_id: r.read_array::<3>()?,
            organization_sub_type: r.read_array::<3>()?,
            default_system_frame_rate_numerator: r.read_u16()?,
            default_system_frame_rate_denominator: r.read_u16()?,
            master_locking_status: r.read_u8()?,
            time_address_flags: r.read_u8()?,
            current_local_offset: r.read_i32()?,
            jump_seconds: r.read_i8()?,
            time_of_next_jump: r.read_u48()?,
            time_of_next_jam: r.read_u48()?,
            time_of_previous_jam: r.read_u48()?,
            previous_jam_local_offset: r.read_i32()?,
            daylight_saving: r.read_u8()?,
            leap_second_jump: r.read_u8()?,
        })
    }

    pub fn encode(&self, w: &mut Writer) -> Result<()> {
        w.write_bytes(&self.organization_id)?;
        w.write_bytes(&self.organization_sub_type)?;
        w.write_u16(self.default_system_frame_rate_numerator)?;
        w.write_u16(self.default_system_frame_rate_denominator)?;
        w.write_u8(self.master_locking_status)?;
        w.write_u8(self.time_address_flags)?;
        w.write_i32(self.current_local_offset)?;
        w.write_i8(self.jump_seconds)?;
        w.write_u48(self.time_of_next_jump)?;
        w.write_u48(self.time_of_next_jam)?;
        w.write_u48(self.time_of_previous_jam)?;
        w.write_i32(self.previous_jam_local_offset)?;
        w.write_u8(self.daylight_saving)?;
        w.write_u8(self.leap_second_jump)
    }

    pub fn to_json(&self) -> Value {
        obj(vec![
            ("organizationId", Value::String(hex_colon(&self.organization_id))),
            ("organizationSubType", Value::String(hex_colon(&self.organization_sub_type))),
            (
                "defaultSystemFrameRate",
                Value::String(format!(
                    "{}/{}",
                    self.default_system_frame_rate_numerator, self.default_system_frame_rate_denominator
                )),
            ),
            ("masterLockingStatus", Value::from(self.master_locking_status)),
            ("timeAddressFlags", Value::from(self.time_address_flags)),
            ("currentLocalOffset", Value::from(self.current_local_offset)),
            ("jumpSeconds", Value::from(self.jump_seconds)),
            ("timeOfNextJump", Value::from(self.time_of_next_jump)),
            ("timeOfNextJam", Value::from(self.time_of_next_jam)),
            ("timeOfPreviousJam", Value::from(self.time_of_previous_jam)),
            ("previousJamLocalOffset", Value::from(self.previous_jam_local_offset)),
            ("daylightSaving", Value::from(self.daylight_saving)),
            ("leapSecondJump", Value::from(self.leap_second_jump)),
        ])
    }

    pub fn from_json(v: &Value) -> Result<Self> {
        let o = json_object(v, "SMPTE_MNG_ID")?;
        let rate = json_get(o, "defaultSystemFrameRate")?
            .as_str()
            .ok_or_else(|| Error::Json("defaultSystemFrameRate must be a string num/den".into()))?;
        let (num, den) = rate
            .split_once('/')
            .ok_or_else(|| Error::Json(format!("invalid defaultSystemFrameRate: {rate}")))?;
        Ok(Self {
            organization_id: SMPTE_OUI,
            organization_sub_type: [0, 0, 1],
            default_system_frame_rate_numerator: num
                .parse()
                .map_err(|_| Error::Json(format!("invalid frame rate numerator: {num}")))?,
            default_system_frame_rate_denominator: den
                .parse()
                .map_err(|_| Error::Json(format!("invalid frame rate denominator: {den}")))?,
            master_locking_status: json_u64(o, "masterLockingStatus")? as u8,
            time_address_flags: json_u64(o, "timeAddressFlags")? as u8,
            current_local_offset: json_get(o, "currentLocalOffset")?
                .as_i64()
                .ok_or_else(|| Error::Json("currentLocalOffset must be an integer".into()))? as i32,
            jump_seconds: json_get(o, "jumpSeconds")?
                .as_i64()
                .ok_or_else(|| Error::Json("jumpSeconds must be an integer".into()))? as i8,
            time_of_next_jump: json_u64(o, "timeOfNextJump")?,
            time_of_next_jam: json_u64(o, "timeOfNextJam")?,
            time_of_previous_jam: json_u64(o, "timeOfPreviousJam")?,
            previous_jam_local_offset: json_get(o, "previousJamLocalOffset")?
                .as_i64()
                .ok_or_else(|| Error::Json("previousJamLocalOffset must be an integer".into()))? as i32,
            daylight_saving: json_u64(o, "daylightSaving")? as u8,
            leap_second_jump: json_u64(o, "leapSecondJump")? as u8,
        })
    }
}

fn hex_colon(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect::<Vec<_>>().join(":")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smpte_round_trips() {
        let payload = SmpteMngId {
            organization_id: SMPTE_OUI,
            organization_sub_type: [0, 0, 1],
            default_system_frame_rate_numerator: 30000,
            default_system_frame_rate_denominator: 1001,
            master_locking_status: 2,
            time_address_flags: 0,
            current_local_offset: -18000,
            jump_seconds: 0,
            time_of_next_jump: 0,
            time_of_next_jam: 0,
            time_of_previous_jam: 0,
            previous_jam_local_offset: 0,
            daylight_saving: 0,
            leap_second_jump: 0,
        };
        let mut buf = [0u8; 64];
        let mut w = Writer::new(&mut buf);
        payload.encode(&mut w).unwrap();
        let len = w.position();
        let mut r = Reader::new(&buf[..len]);
        let decoded = SmpteMngId::decode(&mut r, len).unwrap();
        assert_eq!(decoded.default_system_frame_rate_numerator, 30000);
        assert_eq!(decoded.current_local_offset, -18000);
    }
}
