//! # Payroll Architecture
//!
//! Payroll is a **library of employee records** whose fields enforce their own
//! rules: the salary is validated on every write, the annual salary is derived
//! and cached, and salary access can be restricted per record type. The
//! binary is a thin client that runs illustrative scenarios through the API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints results, sets up logging        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the wage policy          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Scenarios over records, returning `CmdResult`            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Layer (model, attributes, policy, roles, repr)      │
//! │  - Validation, caching, access policy                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Rules
//!
//! - Every salary write, including construction, raises and parsed input,
//!   goes through one validation path.
//! - A cached annual salary is cleared on every successful salary write.
//! - Access policy is a type parameter, so it is the same for every instance
//!   of a type.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Scenario logic
//! - [`model`]: [`model::Employee`] and the access modes
//! - [`attributes`]: Field registry, values and write side effects
//! - [`policy`]: The shared minimum wage
//! - [`roles`]: `Tester` and `Developer` built by composition
//! - [`project`]: Client projects
//! - [`repr`]: Display form and the validated repr parser
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod policy;
pub mod project;
pub mod repr;
pub mod roles;
