use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scorer::evaluate::scoring::Hits;

/// Named similarity bucket used by the range filter, the histogram and the
/// node color encoding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimilarityRange {
    Lt20,
    P21To40,
    P41To60,
    P61To80,
    P81To100,
}

impl SimilarityRange {
    pub const ALL: [SimilarityRange; 5] = [
        SimilarityRange::Lt20,
        SimilarityRange::P21To40,
        SimilarityRange::P41To60,
        SimilarityRange::P61To80,
        SimilarityRange::P81To100,
    ];

    /// Label as the dashboard renders it.
    pub fn label(&self) -> &'static str {
        match self {
            SimilarityRange::Lt20 => "<20",
            SimilarityRange::P21To40 => "21-40",
            SimilarityRange::P41To60 => "41-60",
            SimilarityRange::P61To80 => "61-80",
            SimilarityRange::P81To100 => "81-100",
        }
    }
}

impl fmt::Display for SimilarityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bucket boundary table, inclusive on both ends.
///
/// The default table is carried over verbatim from the dashboard:
/// [0,19], [21,40], [41,60], [61,80], [81,100]. A percentage of exactly 20
/// falls between the first two buckets and classifies to `None`; filters
/// treat it as matching no selection. The gap is intentional behavior to
/// preserve, not a rounding artifact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RangeBoundaries {
    bounds: [(SimilarityRange, u8, u8); 5],
}

impl Default for RangeBoundaries {
    fn default() -> Self {
        RangeBoundaries {
            bounds: [
                (SimilarityRange::Lt20, 0, 19),
                (SimilarityRange::P21To40, 21, 40),
                (SimilarityRange::P41To60, 41, 60),
                (SimilarityRange::P61To80, 61, 80),
                (SimilarityRange::P81To100, 81, 100),
            ],
        }
    }
}

impl RangeBoundaries {
    /// Bucket containing the percentage, `None` for values in a gap.
    pub fn classify(&self, percent: u8) -> Option<SimilarityRange> {
        self.bounds
            .iter()
            .find(|(_, min, max)| percent >= *min && percent <= *max)
            .map(|(range, _, _)| *range)
    }

    /// OR semantics across the selected buckets; a gap value matches
    /// nothing regardless of the selection.
    pub fn matches_any_selected(&self, percent: u8, selected: &[SimilarityRange]) -> bool {
        match self.classify(percent) {
            Some(range) => selected.contains(&range),
            None => false,
        }
    }

    /// Histogram feed: how many hits landed in each bucket.
    /// Scores are rounded to whole percents first, the way the dashboard
    /// histogram does; a hit rounding to a gap value is counted nowhere.
    pub fn bucket_counts(&self, hits: &Hits) -> [(SimilarityRange, usize); 5] {
        let mut counts = SimilarityRange::ALL.map(|range| (range, 0));
        for hit in hits.iter() {
            if let Some(range) = self.classify(round_percent(hit.similarity_percent)) {
                for entry in counts.iter_mut() {
                    if entry.0 == range {
                        entry.1 += 1;
                    }
                }
            }
        }
        counts
    }
}

/// Convert a raw similarity in [0, 1] to a whole percentage.
pub fn percent_of(fraction: f64) -> u8 {
    round_percent(fraction * 100.0)
}

fn round_percent(percent: f64) -> u8 {
    percent.round().clamp(0.0, 100.0) as u8
}

/// Node size scaling applied by the graph layer when similarity sizing is
/// on: `max(min_size, base_size * (offset + similarity * gain))`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SizeScaling {
    pub min_size: f64,
    pub offset: f64,
    pub gain: f64,
}

impl Default for SizeScaling {
    fn default() -> Self {
        SizeScaling {
            min_size: 5.0,
            offset: 0.3,
            gain: 1.4,
        }
    }
}

impl SizeScaling {
    pub fn scaled(&self, base_size: f64, similarity: f64) -> f64 {
        (base_size * (self.offset + similarity * self.gain)).max(self.min_size)
    }
}
