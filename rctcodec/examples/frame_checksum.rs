//! Compute and check the CRC trailer of a hex frame

use rctcodec::checksum;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // Start token, read command, length 4, object id
    let body = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2b0104959b301e".to_string());
    let body = hex::decode(body)?;

    let crc = checksum::calculate(&body);
    println!("Checksum: 0x{:04X}", crc);

    let mut frame = body.clone();
    frame.extend_from_slice(&crc.to_be_bytes());
    println!("Frame:    {}", hex::encode(&frame));
    println!("Verified: {}", checksum::verify(&body, crc));

    Ok(())
}
