//! Error types for rctcodec-types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raw type discriminant outside the known tag set
    #[error("Undefined or unknown type: {0}")]
    UnknownDataType(u8),

    #[error("Parse error: {0}")]
    Parse(String),

    /// Event table discriminator word is not an ASCII character code
    #[error("Invalid event entry type: 0x{0:08X}")]
    InvalidEntryType(u32),
}
