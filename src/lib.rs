//! localfs - Cross-platform local filesystem abstraction
//!
//! This crate provides a uniform interface over the host filesystem for
//! directory management, path metadata and seekable byte streams, with
//! POSIX and Windows backends selected at build time.

pub mod cli;
pub mod config;
pub mod filesys;

pub use config::LocalFsConfig;
pub use filesys::*;
