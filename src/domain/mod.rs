//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep report structs for `--json` output in one place.
//! - Keep the tool catalog (navigation index) as plain data.
//! - Avoid cyclic imports between commands and services.
//!
//! ## Files
//! - `models.rs` — output envelope, config, report structs.
//! - `catalog.rs` — tool registry and categories.
//! - `errors.rs` — typed tool failures.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod catalog;
pub mod errors;
pub mod models;
