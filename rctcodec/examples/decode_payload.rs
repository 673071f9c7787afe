//! Decode a hex payload captured from a device
//!
//! ```text
//! cargo run --example decode_payload -- FLOAT 40600000
//! RUST_LOG=trace cargo run --example decode_payload -- TIMESERIES 5f5e1000...
//! ```

use anyhow::{Context, bail};
use rctcodec::{DataType, Value, decode};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(type_name), Some(payload)) = (args.next(), args.next()) else {
        bail!("usage: decode_payload <TYPE> <HEX>");
    };

    let data_type: DataType = type_name.parse()?;
    let data = hex::decode(payload.trim()).context("payload is not valid hex")?;

    let value = decode(data_type, &data)?;

    match &value {
        Value::TimeSeries(series) => {
            println!("{}", value);
            for (timestamp, sample) in series.samples.iter() {
                println!("  {timestamp}  {sample}");
            }
        }
        Value::EventTable(table) => {
            println!("{}", value);
            for entry in table.entries.values() {
                println!("  {entry}");
            }
        }
        scalar => println!("{data_type}: {scalar}"),
    }

    Ok(())
}
