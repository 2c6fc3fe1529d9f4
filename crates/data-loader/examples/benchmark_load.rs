use data_loader::InteractionIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data/sample");

    println!("Loading interaction data from {}...\n", data_dir.display());

    let start = Instant::now();
    let index = InteractionIndex::load_from_files(data_dir)
        .expect("Failed to load interaction data");
    let elapsed = start.elapsed();

    let (items, interactions) = index.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Items: {}", items);
    println!("Interactions: {}", interactions);
    println!("Items with interactions: {}", index.interacted_item_ids().len());
    println!("\nPerformance: {:.0} interactions/second",
             interactions as f64 / elapsed.as_secs_f64());
}
