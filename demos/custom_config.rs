use chrono::{TimeZone, Utc};
use flakegen::{Snowflake, SnowflakeOption};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    // 10 node bits (1023 nodes) leave 2 sequence bits (3 IDs per ms)
    let generator = Snowflake::build(
        42,
        [
            SnowflakeOption::Epoch(epoch),
            SnowflakeOption::NodeBits(10),
            SnowflakeOption::SequenceBits(2),
        ],
    )?;

    println!("Generator configuration:");
    println!("  Epoch: {}", generator.config().epoch());
    println!("  Node bits: {}", generator.config().node_bits());
    println!("  Sequence bits: {}", generator.config().sequence_bits());
    println!("  Max node ID: {}", generator.config().max_node_id());
    println!("  Max sequence per ms: {}", generator.config().max_sequence_id());

    let id = generator.generate()?;
    let parsed = generator.parse(id);

    println!("\nGenerated ID: {}", id);
    println!("Components:");
    println!("  Timestamp: {} ms since epoch", parsed.timestamp);
    println!("  Node ID: {} (of {})", parsed.node, generator.config().max_node_id());
    println!("  Sequence: {}", parsed.sequence);

    // A layout wider than 12 bits is refused
    let err = Snowflake::build(
        1,
        [SnowflakeOption::NodeBits(6), SnowflakeOption::SequenceBits(7)],
    )
    .unwrap_err();
    println!("\nRejected layout: {err}");

    Ok(())
}
