use rand::seq::SliceRandom;

use crate::names;

use super::{Dataset, Record};

/// The user's current sample-count choice. Anything that does not parse as
/// an integer (including the literal "All" and an absent value) means no
/// sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleCount {
    All,
    Count(usize),
}

impl SampleCount {
    pub fn parse(value: Option<&str>) -> Self {
        match value.and_then(|v| v.trim().parse::<usize>().ok()) {
            Some(n) => SampleCount::Count(n),
            None => SampleCount::All,
        }
    }
}

impl std::fmt::Display for SampleCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleCount::All => f.write_str(names::ALL_LABEL),
            SampleCount::Count(n) => write!(f, "{n}"),
        }
    }
}

/// The user's current category and sample-count choices. Built fresh from
/// each request; never stored.
#[derive(Debug, Clone)]
pub struct FilterSelection {
    pub category: String,
    pub sample_count: SampleCount,
}

impl Default for FilterSelection {
    fn default() -> Self {
        FilterSelection {
            category: names::ALL_LABEL.to_string(),
            sample_count: SampleCount::All,
        }
    }
}

impl FilterSelection {
    pub fn new(category: Option<String>, sample_count: Option<&str>) -> Self {
        FilterSelection {
            category: category.unwrap_or_else(|| names::ALL_LABEL.to_string()),
            sample_count: SampleCount::parse(sample_count),
        }
    }

    /// Applies the category filter, then the count filter, returning the
    /// result set.
    ///
    /// Category comparison is whitespace-trimmed and case-insensitive;
    /// records without a category are excluded under any non-"All" filter.
    /// A numeric sample count draws a uniform sample without replacement of
    /// size `min(n, population)` and the result order is randomized; with
    /// "All" the result keeps dataset order.
    pub fn apply<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Record> {
        let wanted = normalize(&self.category);
        let keep_all = wanted == normalize(names::ALL_LABEL);

        let matched: Vec<&Record> = dataset
            .records()
            .iter()
            .filter(|r| {
                keep_all
                    || r.category
                        .as_deref()
                        .is_some_and(|c| normalize(c) == wanted)
            })
            .collect();

        match self.sample_count {
            SampleCount::All => matched,
            SampleCount::Count(n) if n >= matched.len() => matched,
            SampleCount::Count(n) => {
                let mut rng = rand::thread_rng();
                let mut sampled: Vec<&Record> =
                    matched.choose_multiple(&mut rng, n).copied().collect();
                // choose_multiple does not promise a random order.
                sampled.shuffle(&mut rng);
                sampled
            }
        }
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
