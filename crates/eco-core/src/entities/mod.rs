//! Entity structs for all Ecotrack contract shapes.
//!
//! Field names serialize as camelCase to match the front-end and API payloads.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod auth;
mod notification;
mod report;
mod user;

pub use auth::AuthState;
pub use notification::Notification;
pub use report::{Location, WasteReport};
pub use user::User;
