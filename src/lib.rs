//! ramfs - an in-memory hierarchical namespace
//!
//! This library provides a directory/file tree held entirely in memory, a
//! path resolver for absolute, relative and `.`/`..` paths, and a small
//! command set (cd, ls, mkdir, rmdir, touch, rm, write, read) driven by an
//! interactive session.

pub mod commands;
pub mod fs;
pub mod session;

pub use fs::{FsError, NodeId, NodeKind, RamFs};
pub use session::{Session, SessionOptions};
