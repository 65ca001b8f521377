//! ssh launcher entry point
//!
//! Drop-in replacement for a system ssh invocation: execs the bundled
//! patched binary with every caller argument forwarded untouched. No
//! argument is interpreted here, so there is no CLI parser; even
//! `--help` and `-V` belong to the bundled ssh.

use std::convert::Infallible;
use std::ffi::OsString;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openssh_loee::launcher;

fn main() -> Result<Infallible> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    Ok(launcher::run(&args)?)
}
