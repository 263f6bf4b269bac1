//! route-gate - Token-expiry access gate for client-side route navigation
//!
//! Before a client enters a protected destination (a top-level route, a
//! child route, or a lazily loaded module), the gate reads the locally
//! held token, applies a configurable expiry tolerance, and either allows
//! entry or redirects to a login flow carrying the destination the client
//! was trying to reach, so the navigation can resume after
//! re-authentication.

pub mod clock;
pub mod config;
pub mod gate;
pub mod redirect;
pub mod store;
pub mod tokens;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{GateConfig, GateConfigOverlay};
pub use gate::AccessGate;
pub use redirect::NavigationSink;
pub use store::{MemoryTokenSource, StoreError, TokenFile};
pub use tokens::{check_expiry, TokenRecord, TokenSource};
