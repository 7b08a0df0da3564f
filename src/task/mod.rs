//! Task tracking for taskdesk.
//!
//! A task is created with a title and description, may be revised, marked
//! complete (which stamps a completion time and fires a notification) or
//! incomplete again, and is eventually deleted. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
