//! Feature-hashing embedder.
//!
//! Words and adjacent word pairs are hashed into a fixed number of buckets.
//! No model files, no network, fully deterministic.

use std::collections::BTreeMap;

use accord_core::errors::AccordResult;
use accord_core::traits::Embedder;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Word pairs count for half a word, so shared vocabulary dominates word order.
const WORD_PAIR_WEIGHT: f32 = 0.5;

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(FNV_OFFSET_BASIS, |h, b| (h ^ u64::from(*b)).wrapping_mul(FNV_PRIME))
}

/// `1 + ln(count)`: repeating a word adds less each time.
fn sublinear(count: u32) -> f32 {
    1.0 + (count as f32).ln()
}

fn tally<I: IntoIterator<Item = String>>(features: I) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for feature in features {
        *counts.entry(feature).or_insert(0) += 1;
    }
    counts
}

/// Deterministic embedder used when no neural model is wired in.
///
/// Every text maps to a non-zero unit vector, so identical texts always have
/// cosine 1. Texts without any word hash as a whole, which keeps `""`, `"?!"`
/// and the like comparable to themselves.
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(&self, feature: &str) -> usize {
        (fnv1a(feature.as_bytes()) % self.dimensions as u64) as usize
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }

        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            vec[self.bucket(lowered.trim())] = 1.0;
            return vec;
        }

        // BTreeMap keeps the summation order, and therefore the exact floats, stable.
        for (word, count) in tally(words.iter().map(|w| w.to_string())) {
            vec[self.bucket(&word)] += sublinear(count);
        }
        for (pair, count) in tally(words.windows(2).map(|p| format!("{} {}", p[0], p[1]))) {
            vec[self.bucket(&pair)] += WORD_PAIR_WEIGHT * sublinear(count);
        }

        // Weights are positive, so the norm is too.
        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        for v in &mut vec {
            *v /= norm;
        }
        vec
    }
}

impl Embedder for HashingEmbedder {
    fn encode(&self, text: &str) -> AccordResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-words"
    }
}
