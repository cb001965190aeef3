//! `payqr copy` command.

use super::{block_on, require_identifier};
use crate::cli::RequestArgs;
use crate::context::ServiceContext;
use crate::copy::{copy_to_clipboard, CopyOutcome};

/// Copies the payment-request URI to the clipboard.
///
/// The notifier reports the outcome; a failed copy also fails the command.
///
/// # Errors
///
/// Returns an error string when no identifier can be built or the copy fails.
pub fn run(ctx: &ServiceContext, args: &RequestArgs) -> Result<(), String> {
    let identifier = require_identifier(args)?;
    match block_on(copy_to_clipboard(&*ctx.clipboard, &*ctx.notifier, identifier.as_str()))? {
        CopyOutcome::Copied => Ok(()),
        CopyOutcome::Failed(reason) => Err(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use crate::cassette::replayer::CassetteReplayer;
    use crate::adapters::replaying::{ReplayingClipboard, ReplayingFileSystem, ReplayingNotifier};
    use chrono::Utc;
    use serde_json::json;

    fn context(clipboard_output: serde_json::Value) -> ServiceContext {
        let cassette = Cassette {
            name: "copy".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "clipboard".into(),
                    method: "write_text".into(),
                    input: json!({}),
                    output: clipboard_output,
                },
                Interaction {
                    seq: 1,
                    port: "notifier".into(),
                    method: "notify".into(),
                    input: json!({}),
                    output: json!(null),
                },
            ],
        };
        ServiceContext {
            clipboard: Box::new(ReplayingClipboard::new(CassetteReplayer::new(&cassette))),
            notifier: Box::new(ReplayingNotifier::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        }
    }

    fn args() -> RequestArgs {
        RequestArgs { address: "0xabc".into(), amount: "0.5".into() }
    }

    #[test]
    fn successful_copy_succeeds() {
        assert!(run(&context(json!({"Ok": null})), &args()).is_ok());
    }

    #[test]
    fn failed_copy_fails_with_reason() {
        let err = run(&context(json!({"Err": "no display"})), &args()).unwrap_err();
        assert_eq!(err, "no display");
    }

    #[test]
    fn nothing_to_copy_without_identifier() {
        let ctx = context(json!({"Ok": null}));
        let missing = RequestArgs { address: String::new(), amount: "1".into() };
        assert!(run(&ctx, &missing).is_err());
    }
}
