//! Taskdesk: a task-tracking HTTP API.
//!
//! Clients create, read, revise, complete, reopen and delete task records.
//! Completing a task stamps it in a fixed reference timezone and fires a
//! best-effort notification to a messaging webhook.
//!
//! # Architecture
//!
//! Taskdesk follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, webhook)
//!
//! # Modules
//!
//! - [`task`]: Task domain, ports, adapters and service
//! - [`api`]: axum routes and JSON mapping
//! - [`config`]: Environment-driven configuration
//! - [`server`]: Start-up wiring

pub mod api;
pub mod config;
pub mod server;
pub mod task;
