//! Configuration options for schema inference.

use serde::{Deserialize, Serialize};

/// Knobs of the inference engine.
///
/// Fixed per engine instance, never tuned per request: keeping them constant
/// keeps results deterministic and test fixtures reproducible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InferOptions {
    /// How many sampled cell values per column the content classifier reads.
    pub sample_size: usize,

    /// Minimum final score for a field to claim a header.
    pub acceptance_threshold: f32,

    /// Blend weight of the header-name evidence. Names are the primary
    /// signal: manifests are machine-generated and rarely mislabeled.
    pub name_weight: f32,

    /// Blend weight of the sampled-content evidence; the tie-breaker and
    /// safety net when a header is absent or generic.
    pub content_weight: f32,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            sample_size: 10,
            acceptance_threshold: 0.55,
            name_weight: 0.7,
            content_weight: 0.3,
        }
    }
}

impl InferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_acceptance_threshold(mut self, threshold: f32) -> Self {
        self.acceptance_threshold = threshold;
        self
    }

    pub fn with_weights(mut self, name_weight: f32, content_weight: f32) -> Self {
        self.name_weight = name_weight;
        self.content_weight = content_weight;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_constants() {
        let options = InferOptions::default();
        assert_eq!(options.sample_size, 10);
        assert!((options.acceptance_threshold - 0.55).abs() < f32::EPSILON);
        assert!((options.name_weight - 0.7).abs() < f32::EPSILON);
        assert!((options.content_weight - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn builders_override_single_knobs() {
        let options = InferOptions::new()
            .with_sample_size(5)
            .with_acceptance_threshold(0.6);
        assert_eq!(options.sample_size, 5);
        assert!((options.acceptance_threshold - 0.6).abs() < f32::EPSILON);
        assert!((options.name_weight - 0.7).abs() < f32::EPSILON);
    }
}
