use flakegen::{ParsedId, Snowflake, SnowflakeError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SnowflakeError> {
    // RUST_LOG=flakegen=trace shows construction and exhaustion events
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Node 1 with the default layout: 3 node bits, 7 sequence bits
    let generator = Snowflake::new(1)?;

    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let id3 = generator.generate()?;

    println!("Generated IDs:");
    for id in [id1, id2, id3] {
        print_id(id, generator.parse(id));
    }

    // Or extract components individually
    let ts = generator.extractor().timestamp(id2);
    let node = generator.extractor().node(id2);
    let seq = generator.extractor().sequence(id2);
    println!("\nComponents of ID2 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Node ID: {node}");
    println!("  Sequence: {seq}");

    Ok(())
}

fn print_id(id: u64, parsed: ParsedId) {
    match parsed.wall_clock_time() {
        Some(datetime) => println!("  ID: {id}, {parsed}, Human date: {datetime}"),
        None => println!("  ID: {id}, {parsed}"),
    }
}
