//! Command dispatch and handlers.

pub mod copy;
pub mod form;
pub mod qr;
pub mod uri;

use std::future::Future;
use std::io::Write;

use crate::cassette::session::RecordingSession;
use crate::cli::{Command, RequestArgs};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::request::{self, RequestIdentifier};

/// Message printed by one-shot commands when no identifier can be built.
pub const NO_REQUEST: &str = "No payment request: enter a recipient address and a valid amount";

/// Dispatch a parsed command to its handler.
///
/// When `PAYQR_RECORD` names a directory, port interactions are recorded to
/// per-port cassette files there.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, settings: &Settings) -> Result<(), String> {
    let Some(dir) = &settings.record_dir else {
        return dispatch_with_context(command, &ServiceContext::live(settings), settings);
    };

    let (ctx, session) = ServiceContext::recording_at(dir, settings)?;
    let result = dispatch_with_context(command, &ctx, settings);
    // Recording adapters hold the recorders until the context is gone.
    drop(ctx);
    finish_recording(session)?;
    result
}

/// Dispatch a command against the given service context, writing to stdout.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), String> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Uri(args) => uri::run(args, &mut out),
        Command::Qr { request, format, output, size, copy } => {
            let options = qr::QrRequest {
                format: *format,
                output: output.as_deref(),
                size: *size,
                copy: *copy,
            };
            qr::run(ctx, settings, request, &options, &mut out)
        }
        Command::Copy(args) => copy::run(ctx, args),
        Command::Form => form::run(ctx, settings, &mut std::io::stdin().lock(), &mut out),
    }
}

fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}

/// Builds the identifier for one-shot commands, failing when there is none.
pub(crate) fn require_identifier(args: &RequestArgs) -> Result<RequestIdentifier, String> {
    request::build(&args.address, &args.amount).ok_or_else(|| NO_REQUEST.to_string())
}

/// Runs `future` to completion on a fresh single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, String> {
    let runtime = current_thread_runtime()?;
    Ok(runtime.block_on(future))
}

pub(crate) fn current_thread_runtime() -> Result<tokio::runtime::Runtime, String> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))
}

pub(crate) fn write_line(out: &mut dyn Write, text: &str) -> Result<(), String> {
    writeln!(out, "{text}").map_err(|e| format!("Failed to write output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(address: &str, amount: &str) -> RequestArgs {
        RequestArgs { address: address.into(), amount: amount.into() }
    }

    #[test]
    fn require_identifier_builds_or_explains() {
        let id = require_identifier(&args("0xabc", "1")).unwrap();
        assert_eq!(id.as_str(), "ethereum:0xabc@1?value=1000000000000000000");
        assert_eq!(require_identifier(&args("0xabc", "")).unwrap_err(), NO_REQUEST);
        assert_eq!(require_identifier(&args("0xabc", "1.2.3")).unwrap_err(), NO_REQUEST);
    }

    #[test]
    fn block_on_drives_future() {
        assert_eq!(block_on(async { 7 }).unwrap(), 7);
    }
}
