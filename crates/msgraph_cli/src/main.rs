//! CLI probe for reference resolution.
//!
//! # Responsibility
//! - Classify one `<kind> <input>` pair from the command line and print the
//!   resulting reference.
//! - Print the core version when called without arguments.
//!
//! Set `MSGRAPH_LOG_DIR` to an absolute directory to get core logs.

use msgraph_core::{init_logging, LoggingConfig, ReferenceResolver, ResourceKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var("MSGRAPH_LOG_DIR") {
        if let Err(err) = init_logging(&LoggingConfig::with_default_level(log_dir)) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => {
            println!("msgraph_core version={}", msgraph_core::core_version());
            ExitCode::SUCCESS
        }
        [kind, input] => classify(kind, input),
        _ => {
            eprintln!("usage: msgraph_cli <kind> <input>");
            ExitCode::from(2)
        }
    }
}

fn classify(kind: &str, input: &str) -> ExitCode {
    let Some(kind) = ResourceKind::from_name(kind) else {
        let known = ResourceKind::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join("|");
        eprintln!("unknown kind `{kind}`; expected {known}");
        return ExitCode::from(2);
    };

    match ReferenceResolver::scoped(kind).resolve(input) {
        Ok(reference) => {
            println!("source_kind={}", reference.source_kind());
            println!("id={}", reference.id().unwrap_or("-"));
            println!("name={}", reference.name().unwrap_or("-"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
