pub(crate) const MAGIC: &[u8; 6] = b"SPLICE";

pub(crate) const PAYLOAD_SIZE_OFFSET: usize = 13;
pub(crate) const PAYLOAD_OFFSET: usize = PAYLOAD_SIZE_OFFSET + 1;

pub(crate) const VERSION_OFFSET: usize = PAYLOAD_OFFSET;
pub(crate) const VERSION_LENGTH: usize = 32;
pub(crate) const TEMPO_OFFSET: usize = VERSION_OFFSET + VERSION_LENGTH;
pub(crate) const TEMPO_LENGTH: usize = 4;
pub(crate) const HEADER_LENGTH: usize = TEMPO_OFFSET + TEMPO_LENGTH;

pub(crate) const TRACK_RESERVED_LENGTH: usize = 3;

/// Number of steps in every track.
pub const NUM_STEPS: usize = 16;
pub(crate) const STEPS_PER_BAR: usize = 4;
