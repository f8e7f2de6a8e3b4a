//! Cartridge layout constants for LSDj ROM images
//!
//! This module centralizes the fixed positions used to identify a build.
//! Constants are organized by the region they describe.

/// Whole-image constants
pub mod image {
    /// Every LSDj release ships as a 1 MiB (64 bank) cartridge image
    pub const ROM_SIZE: usize = 0x10_0000;

    /// Size of one switchable ROM bank
    pub const BANK_SIZE: usize = 0x4000;
}

/// Cartridge header fields (bank 0)
pub mod header {
    /// Start of the title field
    pub const TITLE_START: usize = 0x134;

    /// End of the title field (exclusive). The CGB flag at 0x143 is part of
    /// the legacy 16 byte title and reads as a non-printable byte.
    pub const TITLE_END: usize = 0x144;
}

/// Content hash parameters
pub mod hash {
    use super::image::BANK_SIZE;

    /// Bytes covered by the content hash (the fixed first bank)
    pub const HASHED_LEN: usize = BANK_SIZE;

    /// XXH32 seed
    pub const SEED: u32 = 0;
}
