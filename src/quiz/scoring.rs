//! Bucket scoring for personality quizzes.

/// Session-wide bucket labels. Ranged answers map onto these by quartile,
/// independent of the question's own answer buckets.
pub const BUCKET_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Slider position of a ranged question before the user touches it.
pub const DEFAULT_RANGE_VALUE: f64 = 0.5;

/// Maps a slider value in `[0, 1]` to one of four equal-width buckets.
pub fn range_bucket(value: f64) -> &'static str {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    if value < 0.25 {
        BUCKET_LABELS[0]
    } else if value < 0.50 {
        BUCKET_LABELS[1]
    } else if value < 0.75 {
        BUCKET_LABELS[2]
    } else {
        BUCKET_LABELS[3]
    }
}

/// The most frequent bucket. Ties go to the bucket that appeared first.
pub fn dominant_bucket<S: AsRef<str>>(entries: &[S]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        let bucket = entry.as_ref();
        match counts.iter_mut().find(|(seen, _)| *seen == bucket) {
            Some((_, count)) => *count += 1,
            None => counts.push((bucket, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(&str, usize)>, (bucket, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((bucket, count)),
        })
        .map(|(bucket, _)| bucket)
}

/// Append-only log of bucket ids collected during one quiz attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTally {
    entries: Vec<String>,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bucket: impl Into<String>) {
        self.entries.push(bucket.into());
    }

    pub fn extend<I, S>(&mut self, buckets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.extend(buckets.into_iter().map(Into::into));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dominant(&self) -> Option<&str> {
        dominant_bucket(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_boundaries() {
        assert_eq!(range_bucket(0.0), "A");
        assert_eq!(range_bucket(0.2499), "A");
        assert_eq!(range_bucket(0.25), "B");
        assert_eq!(range_bucket(0.5), "C");
        assert_eq!(range_bucket(0.75), "D");
        assert_eq!(range_bucket(1.0), "D");
    }

    #[test]
    fn range_values_outside_unit_interval_are_clamped() {
        assert_eq!(range_bucket(-3.0), "A");
        assert_eq!(range_bucket(7.5), "D");
        assert_eq!(range_bucket(f64::NAN), "A");
    }

    #[test]
    fn most_frequent_bucket_wins() {
        assert_eq!(dominant_bucket(&["A", "A", "B", "D"]), Some("A"));
        assert_eq!(dominant_bucket(&["B", "D", "D", "A", "D"]), Some("D"));
    }

    #[test]
    fn ties_go_to_first_occurrence() {
        assert_eq!(dominant_bucket(&["C", "B", "B", "C"]), Some("C"));
        assert_eq!(dominant_bucket(&["D", "A"]), Some("D"));
    }

    #[test]
    fn empty_tally_has_no_dominant_bucket() {
        let tally = ScoreTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.dominant(), None);
    }

    #[test]
    fn tally_keeps_append_order() {
        let mut tally = ScoreTally::new();
        tally.push("B");
        tally.extend(["A", "C"]);
        assert_eq!(tally.entries(), ["B", "A", "C"]);
        assert_eq!(tally.dominant(), Some("B"));
    }
}
