//! Adapter implementations for task ports.

pub mod memory;
pub mod noop;
pub mod postgres;
pub mod slack;
