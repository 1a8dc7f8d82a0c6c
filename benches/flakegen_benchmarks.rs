use criterion::{criterion_group, criterion_main, Criterion};
use flakegen::{SequenceState, Snowflake, SnowflakeConfig, SnowflakeOption};
use std::hint::black_box;
use std::sync::Arc;

pub fn layout_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Layout Comparison");

    // Wider sequence fields mean fewer waits for the next millisecond
    for &(node_bits, sequence_bits) in &[(10u8, 2u8), (6, 6), (3, 7), (2, 10)] {
        let generator = Snowflake::with_state(
            1,
            SnowflakeConfig::builder()
                .node_bits(node_bits)
                .unwrap()
                .sequence_bits(sequence_bits)
                .unwrap()
                .build()
                .unwrap(),
            Arc::new(SequenceState::new()),
        )
        .unwrap();

        group.bench_function(
            format!(
                "nodes_{}_seq_{}",
                1u32 << node_bits,
                1u32 << sequence_bits
            ),
            |b| {
                b.iter(|| {
                    black_box(generator.generate().unwrap());
                });
            },
        );
    }

    group.finish();
}

pub fn parse_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Parse");
    let generator = Snowflake::build(1, [SnowflakeOption::NodeBits(4)]).unwrap();
    let id = generator.generate().unwrap();

    group.bench_function("parse", |b| {
        b.iter(|| {
            black_box(generator.parse(black_box(id)));
        });
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let generator = Snowflake::new(1).unwrap();
            b.iter(|| {
                let handles: Vec<_> = (0..thread_count)
                    .map(|_| {
                        let g = generator.clone();
                        std::thread::spawn(move || {
                            for _ in 0..100 {
                                black_box(g.generate().unwrap());
                            }
                        })
                    })
                    .collect();

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    layout_comparison,
    concurrent_benchmarks,
    parse_benchmarks
);
criterion_main!(benches);
