//! # lsdj-offsets
//!
//! Locates LSDj's runtime variables in working RAM for any build.
//!
//! This crate provides:
//! - ROM identification (cartridge title, first-bank content hash, version)
//! - A static catalog of known layouts keyed by hash and version
//! - Scripted boot-time analysis for unknown builds, driven through an
//!   [`EmulationSession`] supplied by the caller
//! - Typed RAM access through resolved offsets
//!
//! ```ignore
//! use lsdj_offsets::{OffsetResolver, ResolverConfig};
//!
//! let resolver = OffsetResolver::with_config(my_emulator_factory, ResolverConfig::default());
//! let offsets = resolver.resolve(&rom, Some("lsdj9_2_6-stable.gb"), false)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `debug-tools`: Enables [`OffsetDump`] for writing resolved layouts to JSON.
//!   Intended for CLI tools and development.

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod memory;
pub mod offset;
pub mod resolver;
pub mod rom;
pub mod session;

pub use analysis::{Checkpoint, ScriptProfile, StateSlot, Variable, profile_for};
pub use catalog::{CatalogEntry, STABLE_TAG};
pub use config::{ResolverConfig, ResolverConfigBuilder};
pub use error::{AmbiguousOffsets, Error, Result, UnresolvedVariable};
pub use memory::{DEFAULT_TEMPO, MemoryAccess, Ram, ScreenType};
pub use offset::{CHANNEL_COUNT, ChannelOffsets, MemoryOffsets, OffsetDesc};
pub use resolver::{OffsetResolver, Resolution, ResolveSource, lookup_baked, lookup_catalog};
pub use rom::{RomIdentity, SemVer, content_hash, rom_name};
pub use session::{Button, EmulationSession, SessionFactory};

#[cfg(feature = "debug-tools")]
pub use offset::{MemorySamples, OffsetDump, OffsetValues};
