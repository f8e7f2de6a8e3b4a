//! Offset resolution.
//!
//! Resolution order:
//! 1. Content hash lookup in the catalog
//! 2. Version lookup over mainline catalog rows
//! 3. Baked layout for the version
//! 4. Scripted analysis against a freshly booted session
//!
//! Steps 1 and 2 are skipped when a recompute is forced. Steps 3 and 4 need a
//! full-size image. The session booted in step 4 is owned by the call and
//! dropped on every exit path.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, info, warn};

use crate::analysis::{self, AnalysisContext, profile_for};
use crate::catalog;
use crate::config::ResolverConfig;
use crate::error::Result;
use crate::offset::MemoryOffsets;
use crate::rom::{RomIdentity, check_rom_size};
use crate::session::SessionFactory;

/// Which resolution path produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ResolveSource {
    Hash,
    Version,
    Baked,
    Analysis,
}

/// Offsets together with how they were found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub offsets: MemoryOffsets,
    pub source: ResolveSource,
    pub identity: RomIdentity,
}

/// Catalog lookup by content hash, then by version over mainline rows
pub fn lookup_catalog(identity: &RomIdentity) -> Option<(MemoryOffsets, ResolveSource)> {
    if let Some(desc) = catalog::find_by_hash(identity.hash).and_then(|e| e.offsets()) {
        return Some((desc.expand(), ResolveSource::Hash));
    }

    let version = identity.version?;
    let entry = catalog::find_by_version(version)?;
    debug!(
        "Hash {} unknown, using catalog row {} for version {}",
        identity.hash, entry.hash, version
    );
    entry
        .offsets()
        .map(|desc| (desc.expand(), ResolveSource::Version))
}

/// Hand-verified layout for the identity's version
pub fn lookup_baked(identity: &RomIdentity) -> Option<MemoryOffsets> {
    identity
        .version
        .and_then(catalog::baked_layout)
        .map(|desc| desc.expand())
}

/// Resolves memory offsets for LSDj builds
pub struct OffsetResolver<F> {
    factory: F,
    config: ResolverConfig,
}

impl<F: SessionFactory> OffsetResolver<F> {
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, ResolverConfig::default())
    }

    pub fn with_config(factory: F, config: ResolverConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve offsets for a ROM image.
    ///
    /// `filename` is only used to recover a version when the title has none.
    pub fn resolve(
        &self,
        rom: &[u8],
        filename: Option<&str>,
        force_recompute: bool,
    ) -> Result<MemoryOffsets> {
        self.resolve_detailed(rom, filename, force_recompute)
            .map(|resolution| resolution.offsets)
    }

    /// Like [`resolve`](Self::resolve), also reporting identity and source
    pub fn resolve_detailed(
        &self,
        rom: &[u8],
        filename: Option<&str>,
        force_recompute: bool,
    ) -> Result<Resolution> {
        let identity = RomIdentity::from_rom(rom, filename);
        self.resolve_identity(identity, rom, force_recompute)
    }

    pub(crate) fn resolve_identity(
        &self,
        identity: RomIdentity,
        rom: &[u8],
        force_recompute: bool,
    ) -> Result<Resolution> {
        if force_recompute {
            debug!("Recompute forced, skipping catalog");
        } else if let Some((offsets, source)) = lookup_catalog(&identity) {
            info!(
                "Resolved {} ({}) from catalog by {}",
                identity.name,
                identity.version_label(),
                source
            );
            return Ok(Resolution {
                offsets,
                source,
                identity,
            });
        }

        check_rom_size(rom)?;
        if let Some(offsets) = lookup_baked(&identity) {
            info!("Using baked layout for {}", identity.version_label());
            return Ok(Resolution {
                offsets,
                source: ResolveSource::Baked,
                identity,
            });
        }

        self.analyze(identity, rom)
    }

    fn analyze(&self, identity: RomIdentity, rom: &[u8]) -> Result<Resolution> {
        let profile = profile_for(identity.version);
        info!(
            "Analyzing {} ({}), window 0x{:X}, {} save",
            identity.name,
            identity.version_label(),
            profile.search_window,
            profile.state_slot
        );

        let mut session = self
            .factory
            .boot(rom, self.config.persisted_state(profile.state_slot))?;
        let mut context = AnalysisContext::new(
            identity,
            profile,
            self.config.playback_timeout,
            self.config.audio_poll_interval,
        );

        let result = analysis::analyze(&mut session, &mut context);
        drop(session);

        match result {
            Ok(offsets) => Ok(Resolution {
                offsets,
                source: ResolveSource::Analysis,
                identity: context.identity,
            }),
            Err(e) => {
                warn!(
                    "Analysis failed for {}: {}",
                    context.identity.version_label(),
                    e
                );
                Err(e)
            }
        }
    }
}
