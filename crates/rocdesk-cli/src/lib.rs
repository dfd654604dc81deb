//! # rocdesk-cli
//!
//! Subcommand handlers for the `rocdesk` binary. Each entity gets the
//! same verbs — `list`, `show`, `register`, `edit`, `delete` — where
//! `register` and `edit` drive the entity's wizard flow from a JSON file
//! of step payloads. Registry administration (`seed`, `clear`) and the
//! read-side views (`dashboard`, `hierarchy`) live in [`admin`].

pub mod admin;
pub mod audit;
pub mod company;
pub mod director;
pub mod member;
pub mod ops;
