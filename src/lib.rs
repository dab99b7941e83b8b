//! AWS Provider Library
//!
//! Pieces of an AWS infrastructure provisioning plugin:
//!
//! - EventBridge naming validators ([`provider::events`])
//! - the `aws_vpclattice_service_network` data source ([`provider::vpclattice`])
//!
//! The plugin framework that schedules reads, diffs and persists state is
//! external. This crate exposes the surface it calls into: [`schema`]
//! definitions, [`schema::ResourceData`] accessors and setters, and
//! [`diag::Diagnostics`].
//!
//! ## Quick Start
//!
//! ```rust
//! use provider_aws::prelude::*;
//!
//! let outcome = validate_rule_name("my-rule", "name");
//! assert!(outcome.is_ok());
//! ```

pub mod arn;
pub mod config;
pub mod constants;
pub mod diag;
pub mod error;
pub mod observability;
pub mod prelude;
pub mod provider;
pub mod schema;
pub mod tags;
pub mod validation;
