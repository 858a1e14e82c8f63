//! Run command — JSON framing around the `run` action.
//!
//! Reads the request document from `input`, hands it to the action and writes
//! the response as one JSON line. Anything that does not decode into a
//! request is passed on as "no request".

use std::io::{Read, Write};

use anyhow::{Context, Result};
use pxp_common::RunRequest;

use crate::application::ports::{LocalFs, RunExecutor, StateGuard};
use crate::application::services::{ActionResponse, RunAction};

/// Entry point for `pxp-module-puppet run`.
///
/// # Errors
///
/// Returns an error if stdin/stdout fail or the action hits a fault outside
/// the request contract.
pub fn run<F, G, E>(
    action: &RunAction<F, G, E>,
    mut input: impl Read,
    mut out: impl Write,
) -> Result<ActionResponse>
where
    F: LocalFs,
    G: StateGuard,
    E: RunExecutor,
{
    let mut text = String::new();
    let request = match input.read_to_string(&mut text) {
        Ok(_) => decode_request(&text),
        Err(e) => {
            tracing::warn!(error = %e, "stdin is not readable text");
            None
        }
    };

    let response = action.run(request.as_ref())?;

    serde_json::to_writer(&mut out, &response).context("writing run result")?;
    writeln!(out).context("writing run result")?;
    Ok(response)
}

/// Decode a request document; `null` and malformed input both yield `None`.
#[must_use]
pub fn decode_request(text: &str) -> Option<RunRequest> {
    match serde_json::from_str::<Option<RunRequest>>(text) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "cannot decode run request");
            None
        }
    }
}
