//! Unit tests for pxp-module-puppet
//!
//! These tests use fake ports and run fast without spawning the agent.
