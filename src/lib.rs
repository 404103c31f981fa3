//! Resolution of Minecraft server version strings into NMS generations
//!
//! A server exposes its version as a loosely structured banner such as
//! `"git-Paper-550 (MC: 1.16.5)"`. Plugins that poke at server internals need
//! to know which NMS generation (CraftBukkit revision) that version belongs
//! to, and the wire protocol / data format numbers that come with it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   extract   │────▶│   version   │────▶│  resolver   │
//! │  (banner)   │     │ (value cmp) │     │ (gen match) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │ generation  │
//!                                         │   (table)   │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`extract`]: pulls the embedded version substring out of a server banner
//! - [`version`]: dotted-integer version values and their comparison rules
//! - [`generation`]: the static table of NMS generations with protocol metadata
//! - [`resolver`]: maps a version onto the table, once, at startup
//!
//! Resolution is meant to run exactly once during plugin initialization; the
//! returned [`resolver::Resolution`] is immutable and safe to share freely.

pub mod extract;
pub mod generation;
pub mod resolver;
pub mod version;

pub use generation::{GENERATIONS, Generation};
pub use resolver::Resolution;
pub use version::{ParseError, Version};
