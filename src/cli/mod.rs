//! Options model (C8): a fixed short/long option table mirroring the `pmc`
//! tool, with new options insertable at runtime before [`Options::parse`] is
//! called (§4.8).
//!
//! Unlike the rest of this crate, `clap`'s *builder* API is used here rather
//! than its derive macros: the option table is not fixed at compile time
//! (`Options::insert` adds entries a caller only knows about at runtime), so
//! there is no struct for `#[derive(Parser)]` to decorate.

use clap::{Arg, ArgAction, Command};
use std::collections::HashMap;

/// Outcome of [`Options::parse`], mirroring `pmc`'s four-way branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Parsing failed; call [`Options::error_message`].
    Err,
    /// A message (version string) should be printed; call [`Options::message`].
    Msg,
    /// Help text should be printed; call [`Options::help_text`].
    Help,
    /// Parsing succeeded with no message to print.
    Done,
}

/// One option's metadata: short name, optional long name, whether it takes
/// a value, and its help text.
#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub short: char,
    pub long: Option<&'static str>,
    pub takes_value: bool,
    pub help: &'static str,
}

impl OptionSpec {
    const fn flag(short: char, long: Option<&'static str>, help: &'static str) -> Self {
        Self {
            short,
            long,
            takes_value: false,
            help,
        }
    }

    const fn value(short: char, long: Option<&'static str>, help: &'static str) -> Self {
        Self {
            short,
            long,
            takes_value: true,
            help,
        }
    }
}

/// The fixed `pmc`-compatible option table (§4.8). `-2/-4/-6/-u` select the
/// network transport and are mutually exclusive; the rest take a value
/// except `-h`, `-v`, `-z`.
fn builtin_specs() -> Vec<OptionSpec> {
    vec![
        OptionSpec::flag('2', None, "IEEE 802.3"),
        OptionSpec::flag('4', None, "UDP IPV4 (default)"),
        OptionSpec::flag('6', None, "UDP IPV6"),
        OptionSpec::flag('u', None, "UDS local"),
        OptionSpec::value('b', None, "boundary hops"),
        OptionSpec::value('d', None, "domain number"),
        OptionSpec::value('f', None, "read configuration from 'file'"),
        OptionSpec::flag('h', None, "print this message and exit"),
        OptionSpec::value('i', None, "interface device to use"),
        OptionSpec::value('s', None, "server address for UDS"),
        OptionSpec::value('t', None, "transport specific field"),
        OptionSpec::flag('v', None, "show version and exit"),
        OptionSpec::flag('z', None, "send messages as signaling TLVs"),
        OptionSpec::value('\0', Some("network_transport"), "IEEE 802.3|UDPv4|UDPv6"),
        OptionSpec::value('\0', Some("ptp_dst_mac"), "PTP multicast MAC address"),
        OptionSpec::value('\0', Some("udp6_scope"), "IPv6 multicast scope"),
        OptionSpec::value('\0', Some("udp_ttl"), "IPv4 multicast time to live"),
        OptionSpec::value('\0', Some("socket_priority"), "SO_PRIORITY for transmitted packets"),
    ]
}

/// Parsed option state. Built fresh per invocation; not reused across
/// [`Options::parse`] calls.
pub struct Options {
    program: String,
    version: String,
    specs: Vec<OptionSpec>,
    values: HashMap<char, String>,
    flags: HashMap<char, bool>,
    positionals: Vec<String>,
    error: String,
    help_text: String,
}

/// `long_names`-free key for options with no short name; clap requires a
/// unique id per `Arg`, so long-only options key off their long name.
fn spec_id(spec: &OptionSpec) -> String {
    if spec.short != '\0' {
        spec.short.to_string()
    } else {
        spec.long.unwrap_or_default().to_string()
    }
}

impl Options {
    pub fn new(program: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            version: version.into(),
            specs: builtin_specs(),
            values: HashMap::new(),
            flags: HashMap::new(),
            positionals: Vec::new(),
            error: String::new(),
            help_text: String::new(),
        }
    }

    /// Insert a new option at runtime, before the next [`Options::parse`]
    /// call. Duplicate short names replace the earlier entry.
    pub fn insert(&mut self, spec: OptionSpec) {
        self.specs.retain(|s| s.short != spec.short || spec.short == '\0');
        self.specs.push(spec);
    }

    fn build_command(&self) -> Command {
        let mut cmd = Command::new(self.program.clone())
            .disable_help_flag(true)
            .disable_version_flag(true)
            .no_binary_name(true);
        for spec in &self.specs {
            let id = spec_id(spec);
            let mut arg = Arg::new(id.clone()).help(spec.help);
            if spec.short != '\0' {
                arg = arg.short(spec.short);
            }
            if let Some(long) = spec.long {
                arg = arg.long(long);
            }
            arg = if spec.takes_value {
                arg.action(ArgAction::Set)
            } else {
                arg.action(ArgAction::SetTrue)
            };
            cmd = cmd.arg(arg);
        }
        cmd = cmd.arg(
            Arg::new("__positional__")
                .action(ArgAction::Append)
                .num_args(0..),
        );
        cmd
    }

    /// Parse `argv` (not including argv[0]); returns the branch the caller
    /// should take (§4.8).
    pub fn parse<I, S>(&mut self, argv: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        self.values.clear();
        self.flags.clear();
        self.positionals.clear();
        self.error.clear();

        let cmd = self.build_command();
        self.help_text = cmd.clone().render_help().to_string();

        let args: Vec<std::ffi::OsString> = argv.into_iter().map(Into::into).collect();
        if args.iter().any(|a| a == "-h" || a == "--help") {
            return ParseOutcome::Help;
        }
        if args.iter().any(|a| a == "-v" || a == "--version") {
            return ParseOutcome::Msg;
        }

        let matches = match cmd.try_get_matches_from(args) {
            Ok(m) => m,
            Err(e) => {
                self.error = e.to_string();
                return ParseOutcome::Err;
            }
        };

        for spec in &self.specs {
            let id = spec_id(spec);
            if spec.takes_value {
                if let Some(v) = matches.get_one::<String>(&id) {
                    self.values.insert(spec.short, v.clone());
                }
            } else if matches.get_flag(&id) {
                self.flags.insert(spec.short, true);
            }
        }
        if let Some(rest) = matches.get_many::<String>("__positional__") {
            self.positionals = rest.cloned().collect();
        }

        let transport_flags = ['2', '4', '6', 'u']
            .iter()
            .filter(|c| self.flags.get(*c).copied().unwrap_or(false))
            .count();
        if transport_flags > 1 {
            self.error = "-2, -4, -6 and -u are mutually exclusive".to_string();
            return ParseOutcome::Err;
        }

        ParseOutcome::Done
    }

    pub fn error_message(&self) -> &str {
        &self.error
    }

    pub fn help_text(&self) -> &str {
        &self.help_text
    }

    pub fn message(&self) -> String {
        format!("{} version {}", self.program, self.version)
    }

    pub fn flag(&self, short: char) -> bool {
        self.flags.get(&short).copied().unwrap_or(false)
    }

    pub fn str_value(&self, short: char) -> Option<&str> {
        self.values.get(&short).map(String::as_str)
    }

    pub fn long_value(&self, long: &str) -> Option<&str> {
        self.specs
            .iter()
            .find(|s| s.long == Some(long))
            .and_then(|s| self.values.get(&s.short))
            .map(String::as_str)
    }

    /// Integer value via base-0 `strtol` semantics: `0x`/`0X` is hex, a
    /// leading `0` is octal, otherwise decimal (§4.8).
    pub fn int_value(&self, short: char) -> Option<i64> {
        let raw = self.values.get(&short)?;
        parse_base0(raw)
    }

    /// Leftover positional arguments, in order (§4.8's "index-into-argv").
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }
}

fn parse_base0(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (neg, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let value = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if s.len() > 1 && s.starts_with('0') {
        i64::from_str_radix(&s[1..], 8).ok()?
    } else {
        s.parse::<i64>().ok()?
    };
    Some(if neg { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_domain_and_positional() {
        let mut opts = Options::new("pmc-rs", "0.1.0");
        let outcome = opts.parse(["-d", "5", "-b", "3", "PRIORITY1"].map(String::from));
        assert_eq!(outcome, ParseOutcome::Done);
        assert_eq!(opts.int_value('d'), Some(5));
        assert_eq!(opts.int_value('b'), Some(3));
        assert_eq!(opts.positionals(), ["PRIORITY1"]);
    }

    #[test]
    fn rejects_conflicting_transport_flags() {
        let mut opts = Options::new("pmc-rs", "0.1.0");
        let outcome = opts.parse(["-4", "-6"].map(String::from));
        assert_eq!(outcome, ParseOutcome::Err);
        assert!(!opts.error_message().is_empty());
    }

    #[test]
    fn help_flag_short_circuits() {
        let mut opts = Options::new("pmc-rs", "0.1.0");
        assert_eq!(opts.parse(["-h"].map(String::from)), ParseOutcome::Help);
    }

    #[test]
    fn base0_integer_accepts_hex_and_octal() {
        assert_eq!(parse_base0("0x1F"), Some(31));
        assert_eq!(parse_base0("017"), Some(15));
        assert_eq!(parse_base0("42"), Some(42));
        assert_eq!(parse_base0("-8"), Some(-8));
    }

    #[test]
    fn runtime_inserted_option_is_queryable() {
        let mut opts = Options::new("pmc-rs", "0.1.0");
        opts.insert(OptionSpec::value('x', Some("extra"), "a runtime-added option"));
        let outcome = opts.parse(["-x", "val"].map(String::from));
        assert_eq!(outcome, ParseOutcome::Done);
        assert_eq!(opts.str_value('x'), Some("val"));
    }
}
