//! # eco-core
//!
//! Shared data contracts for Ecotrack.
//!
//! This crate provides the record shapes exchanged between the front-end,
//! HTTP clients and the API:
//! - Entity structs (`User`, `WasteReport`, `Notification`, `AuthState`)
//! - Closed enumerations (`Role`, `ReportStatus`, `WasteType`) with the
//!   report status lifecycle
//! - `EntityKind`, the registry name of each contract shape
//! - Cross-cutting error types
//!
//! All JSON field names are camelCase. Timestamps serialize as RFC 3339
//! strings.

pub mod entities;
pub mod enums;
pub mod errors;
