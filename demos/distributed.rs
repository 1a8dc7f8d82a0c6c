use flakegen::Snowflake;
use rand::{rng, Rng};
use std::collections::HashSet;
use std::thread;
use std::time::Duration;

fn main() {
    let mut handles = vec![];

    // One generator per simulated node; all share the process-wide sequence state
    for node_id in 1..=4 {
        handles.push(thread::spawn(move || {
            let generator = Snowflake::new(node_id).unwrap();
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.generate().unwrap();
                let parsed = generator.parse(id);

                println!("Node {} generated ID {} ({})", node_id, i, parsed);
                assert!(ids.insert(id), "Duplicate ID generated!");

                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20);
}
