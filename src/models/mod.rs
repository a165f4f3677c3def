//! Domain models for the Mergington activities API.
//!
//! - [`Activity`]: a catalogue entry: descriptive metadata plus the mutable
//!   list of registered participant emails. Activities are keyed by their
//!   human-readable name in the registry; the name is not repeated inside
//!   the struct.
//! - [`MessageResponse`] / [`ErrorDetail`]: the two JSON body shapes the
//!   HTTP layer produces for write confirmations and domain errors.

mod activity;
mod response;

pub use activity::*;
pub use response::*;
