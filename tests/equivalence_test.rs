//! Stress and determinism tests across both matching strategies.
//!
//! These tests verify:
//! 1. Direct Scan and Indexed Join emit byte-identical output (equal receipts)
//! 2. Output is stable across runs with the same seed
//! 3. Indexed Join wins when many records share skillsets
//!
//! ## Running
//!
//! ```bash
//! # Release mode recommended for the timing output
//! cargo test --release --test equivalence_test -- --nocapture
//! ```

use std::time::Instant;

use skillmatch::engine::ranking::is_ranked;
use skillmatch::io::RecordGenerator;
use skillmatch::{CapabilitySet, DemandRecord, MatchReceipt, MatchingEngine, Strategy, SupplyRecord};

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a deterministic dataset. Same seed = same records.
fn generate_dataset(demands: usize, supplies: usize, seed: u64) -> (Vec<DemandRecord>, Vec<SupplyRecord>) {
    let mut generator = RecordGenerator::new(seed);
    (generator.demands(demands), generator.supplies(supplies))
}

/// Run one strategy and return its receipt.
fn run(strategy: Strategy, demands: &[DemandRecord], supplies: &[SupplyRecord]) -> MatchReceipt {
    MatchingEngine::new(strategy).run(demands, supplies).receipt
}

// ============================================================================
// TESTS
// ============================================================================

/// Both strategies over a 1000 x 1000 generated dataset.
#[test]
fn strategies_agree_on_generated_dataset() {
    println!("\n=== STRATEGY EQUIVALENCE: 1000 x 1000 ===\n");

    let (demands, supplies) = generate_dataset(1_000, 1_000, 42);

    let start = Instant::now();
    let direct = MatchingEngine::new(Strategy::DirectScan).run(&demands, &supplies);
    let direct_time = start.elapsed();

    let start = Instant::now();
    let indexed = MatchingEngine::new(Strategy::IndexedJoin).run(&demands, &supplies);
    let indexed_time = start.elapsed();

    println!("  Matches:           {:>12}", direct.matches.len());
    println!("  Direct scan:       {:>12.2?}", direct_time);
    println!("  Indexed join:      {:>12.2?}", indexed_time);
    println!("  Digest:            {}", direct.receipt.digest_hex());

    assert!(!direct.matches.is_empty(), "Expected some matches");
    assert!(is_ranked(&direct.matches));
    assert!(
        direct.receipt.same_output(&indexed.receipt),
        "Receipts differ: {} vs {}",
        direct.receipt,
        indexed.receipt
    );
    assert_eq!(direct.matches, indexed.matches);

    println!("\n=== EQUIVALENCE VERIFIED ===\n");
}

/// Same seed produces the same digest; a different seed does not.
#[test]
fn verify_determinism() {
    const SEED: u64 = 12345;

    let (d1, s1) = generate_dataset(300, 300, SEED);
    let (d2, s2) = generate_dataset(300, 300, SEED);
    let (d3, s3) = generate_dataset(300, 300, SEED + 1);

    for strategy in Strategy::ALL {
        let root1 = run(strategy, &d1, &s1);
        let root2 = run(strategy, &d2, &s2);
        let root3 = run(strategy, &d3, &s3);

        assert_eq!(root1.digest, root2.digest, "Digests must match for determinism");
        assert_ne!(root1.digest, root3.digest, "Different seeds should produce different digests");
    }
}

/// Equivalence across several seeds and lopsided shapes.
#[test]
fn strategies_agree_across_seeds_and_shapes() {
    let shapes = [(1, 500), (500, 1), (50, 50), (200, 20), (20, 200)];

    for seed in 0..5u64 {
        for &(demand_count, supply_count) in &shapes {
            let (demands, supplies) = generate_dataset(demand_count, supply_count, seed);
            let direct = run(Strategy::DirectScan, &demands, &supplies);
            let indexed = run(Strategy::IndexedJoin, &demands, &supplies);

            assert!(
                direct.same_output(&indexed),
                "seed {} shape {}x{}: {} vs {}",
                seed,
                demand_count,
                supply_count,
                direct,
                indexed
            );
        }
    }
}

/// Heavy skillset sharing: few distinct sets, many records.
#[test]
fn stress_shared_skillsets() {
    println!("\n=== SHARED SKILLSET STRESS ===\n");

    let sets = [
        CapabilitySet::parse("Rust, SQL"),
        CapabilitySet::parse("Rust, Go, SQL"),
        CapabilitySet::parse("Python"),
        CapabilitySet::parse("Python, SQL, Spark, Airflow"),
        CapabilitySet::parse("Go"),
    ];

    let demands: Vec<DemandRecord> = (0..1_500u64)
        .map(|i| DemandRecord::new(1_500 - i, format!("Job {}", i), sets[(i % 5) as usize].clone()))
        .collect();
    let supplies: Vec<SupplyRecord> = (0..1_500u64)
        .map(|i| SupplyRecord::new(i + 1, format!("Seeker {}", i), sets[((i * 3) % 5) as usize].clone()))
        .collect();

    let start = Instant::now();
    let indexed = MatchingEngine::new(Strategy::IndexedJoin).run(&demands, &supplies);
    let indexed_time = start.elapsed();

    let start = Instant::now();
    let direct = MatchingEngine::new(Strategy::DirectScan).run(&demands, &supplies);
    let direct_time = start.elapsed();

    println!("  Records:           {:>12}", demands.len() + supplies.len());
    println!("  Matches:           {:>12}", indexed.matches.len());
    println!("  Direct scan:       {:>12.2?}", direct_time);
    println!("  Indexed join:      {:>12.2?}", indexed_time);

    assert!(direct.receipt.same_output(&indexed.receipt));
    assert!(is_ranked(&indexed.matches));

    println!("\n=== SHARED SKILLSET STRESS PASSED ===\n");
}
