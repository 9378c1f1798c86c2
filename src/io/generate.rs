//! Seeded synthetic demand and supply records.
//!
//! Uses `ChaCha8Rng`, so the same seed produces the same records on every
//! platform. Handy for benchmarks and for checking strategy equivalence on
//! datasets far larger than anything written by hand.
//!
//! ## Example
//!
//! ```
//! use skillmatch::io::RecordGenerator;
//!
//! let a = RecordGenerator::new(42).demands(10);
//! let b = RecordGenerator::new(42).demands(10);
//!
//! assert_eq!(a, b);
//! assert_eq!(a[0].id, 1);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{CapabilitySet, DemandRecord, SupplyRecord};

/// Number of distinct capability tokens (`Skill 1` ..= `Skill 99`)
pub const SKILL_POOL_SIZE: usize = 99;

/// Fewest capability draws per record
pub const MIN_DRAWS: usize = 1;

/// Most capability draws per record (draws may repeat)
pub const MAX_DRAWS: usize = 6;

const SENIORITY: [&str; 6] = ["Junior", "Associate", "Senior", "Lead", "Principal", "Staff"];
const FIELDS: [&str; 8] = [
    "Backend", "Frontend", "Data", "Cloud", "Security", "Mobile", "Platform", "Research",
];
const ROLES: [&str; 6] = ["Developer", "Engineer", "Analyst", "Architect", "Consultant", "Scientist"];

const FIRST_NAMES: [&str; 10] = [
    "Ada", "Grace", "Alan", "Edsger", "Barbara", "Donald", "Margaret", "Ken", "Frances", "Niklaus",
];
const LAST_NAMES: [&str; 10] = [
    "Lovelace", "Hopper", "Turing", "Dijkstra", "Liskov", "Knuth", "Hamilton", "Thompson", "Allen",
    "Wirth",
];

/// Deterministic record generator
#[derive(Debug, Clone)]
pub struct RecordGenerator {
    rng: ChaCha8Rng,
    skills: Vec<String>,
}

impl RecordGenerator {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            skills: (1..=SKILL_POOL_SIZE).map(|i| format!("Skill {}", i)).collect(),
        }
    }

    fn pick<'a>(&mut self, words: &[&'a str]) -> &'a str {
        words[self.rng.gen_range(0..words.len())]
    }

    /// Draw a random capability set with 1 to 6 members
    pub fn skillset(&mut self) -> CapabilitySet {
        let draws = self.rng.gen_range(MIN_DRAWS..=MAX_DRAWS);
        let mut picked = Vec::with_capacity(draws);
        for _ in 0..draws {
            let idx = self.rng.gen_range(0..self.skills.len());
            picked.push(self.skills[idx].clone());
        }
        picked.into_iter().collect()
    }

    /// Job-title-like label
    pub fn job_title(&mut self) -> String {
        let seniority = self.pick(&SENIORITY);
        let field = self.pick(&FIELDS);
        let role = self.pick(&ROLES);
        format!("{} {} {}", seniority, field, role)
    }

    /// Person-name-like label
    pub fn person_name(&mut self) -> String {
        let first = self.pick(&FIRST_NAMES);
        let last = self.pick(&LAST_NAMES);
        format!("{} {}", first, last)
    }

    /// Generate one demand record
    pub fn demand(&mut self, id: u64) -> DemandRecord {
        let label = self.job_title();
        DemandRecord::new(id, label, self.skillset())
    }

    /// Generate one supply record
    pub fn supply(&mut self, id: u64) -> SupplyRecord {
        let label = self.person_name();
        SupplyRecord::new(id, label, self.skillset())
    }

    /// Generate `count` demand records with ids `1..=count`
    pub fn demands(&mut self, count: usize) -> Vec<DemandRecord> {
        (1..=count as u64).map(|id| self.demand(id)).collect()
    }

    /// Generate `count` supply records with ids `1..=count`
    pub fn supplies(&mut self, count: usize) -> Vec<SupplyRecord> {
        (1..=count as u64).map(|id| self.supply(id)).collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
