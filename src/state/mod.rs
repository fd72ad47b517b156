//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `conversations`, `ui`) so
//! individual components can depend on small focused models. Each struct is
//! plain data; reactivity comes from wrapping instances in `RwSignal` context
//! providers at the app root.

pub mod auth;
pub mod chat;
pub mod conversations;
pub mod ui;
