//! TLV registry (C3): the static table mapping `managementId` to a canonical
//! name and the `actionField` values it carries a payload for.
//!
//! The source library generates this table with a C++ template/macro
//! scheme; here it is a plain `match`-backed lookup over a dense-ish `u16`
//! enum, which is the idiomatic Rust rendition of the same "static array of
//! structs keyed by managementId" design (see DESIGN.md).

use crate::error::Error;

/// Which `actionField` values carry a payload for a given managementId, and
/// whether that payload is always empty (pure acknowledgment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionScope {
    pub use_get: bool,
    pub use_set: bool,
    pub use_command: bool,
    /// SET-or-COMMAND-only managementId whose payload carries no fields.
    pub empty: bool,
}

impl ActionScope {
    const fn get_only() -> Self {
        Self {
            use_get: true,
            use_set: false,
            use_command: false,
            empty: false,
        }
    }

    const fn get_set() -> Self {
        Self {
            use_get: true,
            use_set: true,
            use_command: false,
            empty: false,
        }
    }

    const fn command_empty() -> Self {
        Self {
            use_get: false,
            use_set: false,
            use_command: true,
            empty: true,
        }
    }

    const fn set_command_empty() -> Self {
        Self {
            use_get: false,
            use_set: true,
            use_command: true,
            empty: true,
        }
    }

    /// Whether `action` is permitted to carry this managementId as a
    /// *request* verb (GET/SET/COMMAND); RESPONSE/ACKNOWLEDGE mirror
    /// whichever request verb produced them and are always permitted.
    pub fn permits(self, action: crate::types::ActionField) -> bool {
        use crate::types::ActionField::*;
        match action {
            Get => self.use_get,
            Set => self.use_set,
            Command => self.use_command,
            Response | Acknowledge => true,
        }
    }
}

macro_rules! management_ids {
    ($( $variant:ident = $value:expr, $wire_name:expr => $scope:expr ),+ $(,)?) => {
        /// The ~70-entry `managementId` name-tag space (§3.2).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum ManagementId {
            $( $variant = $value ),+
        }

        impl ManagementId {
            pub fn from_wire(v: u16) -> Option<Self> {
                match v {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            pub fn wire_value(self) -> u16 {
                self as u16
            }

            /// The canonical `SCREAMING_SNAKE_CASE` name used on the wire's
            /// JSON bridge and in `pmc`-style CLI arguments (e.g.
            /// `"SLAVE_ONLY"`), distinct from the Rust enum identifier.
            pub fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire_name, )+
                }
            }

            pub fn from_name(s: &str) -> Option<Self> {
                match s {
                    $( $wire_name => Some(Self::$variant), )+
                    _ => None,
                }
            }

            pub fn scope(self) -> ActionScope {
                match self {
                    $( Self::$variant => $scope, )+
                }
            }
        }
    };
}

management_ids! {
    // Generic (IEEE 1588-2019 Table 53)
    NullPtpManagement       = 0x0000, "NULL_PTP_MANAGEMENT" => ActionScope::get_set(),
    ClockDescription        = 0x0001, "CLOCK_DESCRIPTION" => ActionScope::get_only(),
    UserDescription         = 0x0002, "USER_DESCRIPTION" => ActionScope::get_set(),
    SaveInNonVolatileStorage = 0x0003, "SAVE_IN_NON_VOLATILE_STORAGE" => ActionScope::command_empty(),
    ResetNonVolatileStorage = 0x0004, "RESET_NON_VOLATILE_STORAGE" => ActionScope::command_empty(),
    Initialize              = 0x0005, "INITIALIZE" => ActionScope::set_command_empty(),
    FaultLog                = 0x0006, "FAULT_LOG" => ActionScope::get_only(),
    FaultLogReset           = 0x0007, "FAULT_LOG_RESET" => ActionScope::command_empty(),

    // Default/current/parent/time-properties/port data sets (Table 54)
    DefaultDataSet          = 0x2000, "DEFAULT_DATA_SET" => ActionScope::get_only(),
    CurrentDataSet          = 0x2001, "CURRENT_DATA_SET" => ActionScope::get_only(),
    ParentDataSet           = 0x2002, "PARENT_DATA_SET" => ActionScope::get_only(),
    TimePropertiesDataSet   = 0x2003, "TIME_PROPERTIES_DATA_SET" => ActionScope::get_only(),
    PortDataSet             = 0x2004, "PORT_DATA_SET" => ActionScope::get_only(),
    Priority1               = 0x2005, "PRIORITY1" => ActionScope::get_set(),
    Priority2               = 0x2006, "PRIORITY2" => ActionScope::get_set(),
    Domain                  = 0x2007, "DOMAIN" => ActionScope::get_set(),
    SlaveOnly               = 0x2008, "SLAVE_ONLY" => ActionScope::get_set(),
    LogAnnounceInterval     = 0x2009, "LOG_ANNOUNCE_INTERVAL" => ActionScope::get_set(),
    AnnounceReceiptTimeout  = 0x200A, "ANNOUNCE_RECEIPT_TIMEOUT" => ActionScope::get_set(),
    LogSyncInterval         = 0x200B, "LOG_SYNC_INTERVAL" => ActionScope::get_set(),
    VersionNumber           = 0x200C, "VERSION_NUMBER" => ActionScope::get_set(),
    EnablePort              = 0x200D, "ENABLE_PORT" => ActionScope::command_empty(),
    DisablePort             = 0x200E, "DISABLE_PORT" => ActionScope::command_empty(),
    Time                    = 0x200F, "TIME" => ActionScope::get_set(),
    ClockAccuracy           = 0x2010, "CLOCK_ACCURACY" => ActionScope::get_set(),
    UtcProperties           = 0x2011, "UTC_PROPERTIES" => ActionScope::get_set(),
    TraceabilityProperties  = 0x2012, "TRACEABILITY_PROPERTIES" => ActionScope::get_set(),
    TimescaleProperties     = 0x2013, "TIMESCALE_PROPERTIES" => ActionScope::get_set(),
    UnicastNegotiationEnable = 0x2014, "UNICAST_NEGOTIATION_ENABLE" => ActionScope::get_set(),
    PathTraceList           = 0x2015, "PATH_TRACE_LIST" => ActionScope::get_only(),
    PathTraceEnable         = 0x2016, "PATH_TRACE_ENABLE" => ActionScope::get_set(),
    GrandmasterClusterTable = 0x2017, "GRANDMASTER_CLUSTER_TABLE" => ActionScope::get_set(),
    UnicastMasterTable      = 0x2018, "UNICAST_MASTER_TABLE" => ActionScope::get_set(),
    UnicastMasterMaxTableSize = 0x2019, "UNICAST_MASTER_MAX_TABLE_SIZE" => ActionScope::get_only(),
    AcceptableMasterTable   = 0x201A, "ACCEPTABLE_MASTER_TABLE" => ActionScope::get_set(),
    AcceptableMasterTableEnabled = 0x201B, "ACCEPTABLE_MASTER_TABLE_ENABLED" => ActionScope::get_set(),
    AcceptableMasterMaxTableSize = 0x201C, "ACCEPTABLE_MASTER_MAX_TABLE_SIZE" => ActionScope::get_only(),
    AlternateMaster         = 0x201D, "ALTERNATE_MASTER" => ActionScope::get_set(),
    AlternateTimeOffsetEnable = 0x201E, "ALTERNATE_TIME_OFFSET_ENABLE" => ActionScope::get_set(),
    AlternateTimeOffsetName = 0x201F, "ALTERNATE_TIME_OFFSET_NAME" => ActionScope::get_set(),
    AlternateTimeOffsetMaxKey = 0x2020, "ALTERNATE_TIME_OFFSET_MAX_KEY" => ActionScope::get_only(),
    AlternateTimeOffsetProperties = 0x2021, "ALTERNATE_TIME_OFFSET_PROPERTIES" => ActionScope::get_set(),

    // Transparent clock (Table 55)
    TransparentClockDefaultDataSet = 0x4000, "TRANSPARENT_CLOCK_DEFAULT_DATA_SET" => ActionScope::get_only(),
    TransparentClockPortDataSet    = 0x4001, "TRANSPARENT_CLOCK_PORT_DATA_SET" => ActionScope::get_only(),
    PrimaryDomain                  = 0x4002, "PRIMARY_DOMAIN" => ActionScope::get_set(),

    // Delay mechanism / external port config / master-only (Table 56)
    DelayMechanism                      = 0x6000, "DELAY_MECHANISM" => ActionScope::get_set(),
    LogMinPdelayReqInterval             = 0x6001, "LOG_MIN_PDELAY_REQ_INTERVAL" => ActionScope::get_set(),
    ExternalPortConfigurationEnabled    = 0x3000, "EXTERNAL_PORT_CONFIGURATION_ENABLED" => ActionScope::get_only(),
    MasterOnly                          = 0x3001, "MASTER_ONLY" => ActionScope::get_set(),
    HoldoverUpgradeEnable               = 0x3002, "HOLDOVER_UPGRADE_ENABLE" => ActionScope::get_set(),
    ExtPortConfigPortDataSet            = 0x3003, "EXT_PORT_CONFIG_PORT_DATA_SET" => ActionScope::get_set(),

    // linuxptp-specific (implementation-specific range)
    TimeStatusNp              = 0xC000, "TIME_STATUS_NP" => ActionScope::get_only(),
    GrandmasterSettingsNp     = 0xC001, "GRANDMASTER_SETTINGS_NP" => ActionScope::get_set(),
    PortDataSetNp             = 0xC002, "PORT_DATA_SET_NP" => ActionScope::get_set(),
    SubscribeEventsNp         = 0xC003, "SUBSCRIBE_EVENTS_NP" => ActionScope::get_set(),
    PortPropertiesNp          = 0xC004, "PORT_PROPERTIES_NP" => ActionScope::get_only(),
    PortStatsNp               = 0xC005, "PORT_STATS_NP" => ActionScope::get_only(),
    SynchronizationUncertainNp = 0xC006, "SYNCHRONIZATION_UNCERTAIN_NP" => ActionScope::get_set(),
    PortServiceStatsNp        = 0xC007, "PORT_SERVICE_STATS_NP" => ActionScope::get_only(),
    UnicastMasterTableNp      = 0xC008, "UNICAST_MASTER_TABLE_NP" => ActionScope::get_only(),
    PortHwclockNp             = 0xC009, "PORT_HWCLOCK_NP" => ActionScope::get_only(),
    PowerProfileSettingsNp    = 0xC00A, "POWER_PROFILE_SETTINGS_NP" => ActionScope::get_set(),
    CmldsInfoNp               = 0xC00B, "CMLDS_INFO_NP" => ActionScope::get_only(),

    // SMPTE ST 2059 organization extension, surfaced as a management-like payload (§4.4)
    SmpteMngId                = 0xC010, "SMPTE_MNG_ID" => ActionScope::get_only(),
}

impl ManagementId {
    /// Look up `self` in the request's managementId and check that `action`
    /// is a permitted request verb, per the registry's scope declaration.
    pub fn validate_request_action(self, action: crate::types::ActionField) -> Result<(), Error> {
        if self.scope().permits(action) {
            Ok(())
        } else {
            Err(Error::Action {
                actual: action as u8,
                reason: format!("{:?} does not carry a payload for {}", action, self.name()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionField;

    #[test]
    fn round_trips_by_wire_value_and_name() {
        assert_eq!(ManagementId::from_wire(0x2005), Some(ManagementId::Priority1));
        assert_eq!(ManagementId::Priority1.name(), "PRIORITY1");
        assert_eq!(ManagementId::from_name("PRIORITY1"), Some(ManagementId::Priority1));
        assert_eq!(ManagementId::SlaveOnly.name(), "SLAVE_ONLY");
        assert_eq!(ManagementId::from_name("SLAVE_ONLY"), Some(ManagementId::SlaveOnly));
    }

    #[test]
    fn response_only_id_rejects_set() {
        let scope = ManagementId::DefaultDataSet.scope();
        assert!(scope.use_get);
        assert!(!scope.permits(ActionField::Set));
    }

    #[test]
    fn command_only_id_accepts_command_not_get() {
        let scope = ManagementId::EnablePort.scope();
        assert!(scope.permits(ActionField::Command));
        assert!(!scope.permits(ActionField::Get));
    }
}
