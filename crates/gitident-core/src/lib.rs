// Rust guideline compliant 2026-08-18

//! Gitident Core Library
//!
//! This crate provides the foundational components for the gitident
//! pre-commit hooks:
//! - Git configuration access (`user.email`, `user.name`)
//! - Identity normalization and the coarse email shape test
//! - Template compilation and prefix-anchored matching
//! - Check state machines and their outcomes
//! - Error types and result handling

pub mod check;
pub mod config;
pub mod error;
pub mod identity;
pub mod templates;

pub use check::{check_email, check_name, CheckOutcome};
pub use config::{ConfigKey, GitConfigReader, RepoConfigReader};
pub use error::{Error, Result};
pub use identity::{looks_like_email, normalize, EMAIL_SHAPE};
pub use templates::TemplateSet;
