//! ChurnGuard Demo
//!
//! Command-line front end standing in for the dashboard form: collects
//! customer attributes via flags, runs one prediction against a loaded
//! model, and renders the verdict.

pub mod cli;
pub mod config;
pub mod render;
