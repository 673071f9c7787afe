//! Protocol constants

/// CCITT generator polynomial used by the frame checksum
pub const CRC_POLYNOMIAL: u16 = 0x1021;

/// Initial checksum register value
pub const CRC_INITIAL: u16 = 0xFFFF;

/// Wire size of a Unix timestamp (big-endian u32 seconds)
pub const TIMESTAMP_SIZE: usize = 4;

/// Wire size of every field inside a composite payload
pub const WORD_SIZE: usize = 4;

/// Time series sample: timestamp followed by a float
pub const SAMPLE_SIZE: usize = 2 * WORD_SIZE;

/// Event table slot: five 4-byte words
///
/// ```text
///            word 0      word 1      word 2      word 3         word 4
/// 's', 'w':  entry type  timestamp   message id  value old      value new
/// others:    entry type  timestamp   (reserved)  timestamp end  message id
/// ```
pub const EVENT_SLOT_SIZE: usize = 5 * WORD_SIZE;
