//! Document persistence.
//!
//! Each document is stored as one JSON file under the application
//! directory:
//!
//! ```text
//! <app-support-root>/<app-id>/Player.json
//! <app-support-root>/<app-id>/Leaderboard.json
//! ```
//!
//! Files are rewritten in full on every save. There is no schema version,
//! no backup copy and no locking.

mod document;
mod location;
mod store;

pub use document::*;
pub use location::*;
pub use store::*;
