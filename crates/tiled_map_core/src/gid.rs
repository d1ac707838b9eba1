//! Global tile id (GID) bit layout helpers

// Tile flip flags (Tiled-compatible bit positions)
/// Bit flag for horizontal flip
pub const FLIP_H: u32 = 0x8000_0000;
/// Bit flag for vertical flip
pub const FLIP_V: u32 = 0x4000_0000;
/// Bit flag for diagonal flip (used for 90-degree tile rotations)
pub const FLIP_D: u32 = 0x2000_0000;
/// Mask for all flip flags
pub const FLIP_MASK: u32 = FLIP_H | FLIP_V | FLIP_D;
/// Mask to extract just the base tile id (without flip flags)
pub const BASE_ID_MASK: u32 = !FLIP_MASK;

/// Extract the base tile id from a GID (strips flip flags)
#[inline]
pub fn base_id(gid: u32) -> u32 {
    gid & BASE_ID_MASK
}

/// Extract just the flip flags from a GID
#[inline]
pub fn flip_bits(gid: u32) -> u32 {
    gid & FLIP_MASK
}
