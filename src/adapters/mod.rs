//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! terminal I/O. The original front-end rendered into DOM nodes on browser
//! events; here the same two widgets are driven from stdin and rendered to
//! stdout, and all display formatting (currency rounding, brand copy)
//! lives on this ring only.
//!
//! Adapter categories:
//! - `console`: stdin command parsing and stdout rendering

pub mod console;
