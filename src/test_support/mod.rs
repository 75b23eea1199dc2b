//! Test doubles shared by Slipway unit tests.

pub mod fixtures;

pub use fixtures::ScriptedRunner;
