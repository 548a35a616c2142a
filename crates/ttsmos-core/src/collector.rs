use serde::{Deserialize, Serialize};

/// Highest score a star control can emit.
pub const MAX_RATING: u8 = 5;

pub const PLACEHOLDER_AUDIO_URL: &str = "/api/placeholder/400/320";

/// Text spoken in every sample and in the reference recording.
pub const INFERENCED_TEXT: &str = "The rainbow arched across the sky after the storm, painting the world in vibrant colors. Birds began to sing again as sunshine broke through the clouds, creating a perfect moment of natural beauty.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Naturalness,
    Similarity,
}

impl Criterion {
    pub fn all() -> &'static [Criterion] {
        &[Criterion::Naturalness, Criterion::Similarity]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub id: u32,
    pub audio_url: String,
    pub name: String,
    pub naturalness: u8,
    pub similarity: u8,
}

impl Sample {
    pub fn new(id: u32, audio_url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            audio_url: audio_url.into(),
            name: name.into(),
            naturalness: 0,
            similarity: 0,
        }
    }

    pub fn score(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Naturalness => self.naturalness,
            Criterion::Similarity => self.similarity,
        }
    }
}

/// Transient rating state for one page visit. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingCollector {
    pub reference_audio_url: String,
    pub inferenced_text: String,
    samples: Vec<Sample>,
}

impl Default for RatingCollector {
    fn default() -> Self {
        let samples = (1..=3)
            .map(|i| Sample::new(i, PLACEHOLDER_AUDIO_URL, format!("Sample {}", i)))
            .collect();
        Self::new(PLACEHOLDER_AUDIO_URL, INFERENCED_TEXT, samples)
    }
}

impl RatingCollector {
    pub fn new(
        reference_audio_url: impl Into<String>,
        inferenced_text: impl Into<String>,
        samples: Vec<Sample>,
    ) -> Self {
        Self {
            reference_audio_url: reference_audio_url.into(),
            inferenced_text: inferenced_text.into(),
            samples,
        }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Score of one sample, 0 for unknown ids.
    pub fn score(&self, sample_id: u32, criterion: Criterion) -> u8 {
        self.samples
            .iter()
            .find(|s| s.id == sample_id)
            .map(|s| s.score(criterion))
            .unwrap_or(0)
    }

    /// Replace one criterion score of one sample. Unknown ids are ignored.
    pub fn update_rating(&mut self, sample_id: u32, criterion: Criterion, value: u8) {
        let value = value.min(MAX_RATING);
        let Some(sample) = self.samples.iter_mut().find(|s| s.id == sample_id) else {
            return;
        };

        match criterion {
            Criterion::Naturalness => sample.naturalness = value,
            Criterion::Similarity => sample.similarity = value,
        }
    }
}
