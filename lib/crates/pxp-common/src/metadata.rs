//! Static action metadata advertised to the agent.

use serde_json::{Value, json};

/// Name of the single action this module exposes.
pub const RUN_ACTION: &str = "run";

/// Module descriptor: action list with input/output schemas plus the
/// configuration schema.
#[must_use]
pub fn module_metadata() -> Value {
    json!({
        "description": "PXP Puppet module",
        "actions": [
            {
                "name": RUN_ACTION,
                "description": "Start a Puppet run",
                "input": {
                    "type": "object",
                    "properties": {
                        "env": { "type": "array" },
                        "flags": { "type": "array" }
                    },
                    "required": ["env", "flags"]
                },
                "output": {
                    "type": "object",
                    "properties": {
                        "kind": { "type": "string" },
                        "time": { "type": "string" },
                        "transaction_uuid": { "type": "string" },
                        "environment": { "type": "string" },
                        "status": { "type": "string" },
                        "error": { "type": "string" },
                        "exitcode": { "type": "number" }
                    },
                    "required": [
                        "kind", "time", "transaction_uuid", "environment", "status",
                        "error", "exitcode"
                    ]
                }
            }
        ],
        "configuration": {
            "type": "object",
            "properties": {
                "puppet_bin": { "type": "string" }
            },
            "required": ["puppet_bin"]
        }
    })
}
