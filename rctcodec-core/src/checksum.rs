//! Frame checksum
//!
//! CRC-16 with the CCITT polynomial 0x1021 and initial value 0xFFFF, computed
//! over the frame bytes. Odd-length input is padded with one trailing zero
//! byte before processing, so the processed length is always even.

use tracing::trace;

use crate::constants::{CRC_INITIAL, CRC_POLYNOMIAL};

/// Calculate the checksum of `data`
///
/// # Algorithm
///
/// ```text
/// 1. If len(data) is odd, append 0x00
/// 2. crc = 0xFFFF
/// 3. For each byte: crc ^= byte << 8, then 8 times:
///      crc <<= 1; if crc overflowed bit 16: crc = (crc & 0xFFFF) ^ 0x1021
/// 4. Return crc as u16
/// ```
///
/// # Examples
///
/// ```
/// use rctcodec_core::checksum;
///
/// assert_eq!(checksum::calculate(&[]), 0xFFFF);
/// assert_eq!(checksum::calculate(&[0x01]), checksum::calculate(&[0x01, 0x00]));
/// ```
pub fn calculate(data: &[u8]) -> u16 {
    let padding: &[u8] = if data.len() % 2 == 1 { &[0] } else { &[] };

    // Wider than 16 bits so the shifted-out bit stays visible
    let mut crc = u32::from(CRC_INITIAL);

    for &byte in data.iter().chain(padding) {
        crc ^= u32::from(byte) << 8;
        for _ in 0..8 {
            crc <<= 1;
            if crc & 0xFFFF_0000 != 0 {
                crc = (crc & 0xFFFF) ^ u32::from(CRC_POLYNOMIAL);
            }
        }
    }

    let checksum = crc as u16;

    trace!(
        data_len = data.len(),
        padded = !padding.is_empty(),
        checksum = format!("0x{:04X}", checksum),
        "Calculated checksum"
    );

    checksum
}

/// Verify checksum
pub fn verify(data: &[u8], expected: u16) -> bool {
    calculate(data) == expected
}
