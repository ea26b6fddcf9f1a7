//! Randomized text and pacing sources
//!
//! Both capabilities sit behind traits so the run engine can be driven by
//! deterministic fakes in tests instead of uncontrolled randomness.

use rand::Rng;
use std::time::Duration;

/// Fixed cool-down before merging a freshly created pull request
pub const PRE_MERGE_DELAY: Duration = Duration::from_secs(5);

/// Lower bound of the gap between iterations, in milliseconds
pub const MIN_ITERATION_GAP_MS: u64 = 10_000;

/// Upper bound of the gap between iterations, in milliseconds
pub const MAX_ITERATION_GAP_MS: u64 = 30_000;

/// Lorem word pool for generated branch names, files, and PR text
const WORDS: &[&str] = &[
    "ab", "accusamus", "ad", "alias", "aliquam", "amet", "aperiam", "architecto", "asperiores",
    "aspernatur", "atque", "aut", "beatae", "blanditiis", "commodi", "consequatur", "corporis",
    "culpa", "cumque", "debitis", "delectus", "deserunt", "dicta", "dignissimos", "dolorem",
    "ducimus", "eaque", "earum", "eligendi", "enim", "eveniet", "excepturi", "expedita",
    "facere", "fugiat", "harum", "illum", "impedit", "inventore", "ipsam", "iste", "itaque",
    "laborum", "laudantium", "magnam", "maiores", "minima", "mollitia", "natus", "nemo",
    "nesciunt", "nihil", "nobis", "officiis", "omnis", "pariatur", "perferendis", "porro",
    "possimus", "praesentium", "quaerat", "quasi", "quidem", "quisquam", "ratione",
    "recusandae", "reiciendis", "repellat", "rerum", "saepe", "sapiente", "sequi", "similique",
    "soluta", "tempora", "tenetur", "ullam", "unde", "vero", "voluptatem",
];

/// Source of randomized human-readable text
pub trait TextSource: Send + Sync {
    /// A single lowercase word
    fn word(&self) -> String;

    /// A capitalized sentence ending in a period
    fn sentence(&self) -> String;

    /// A paragraph of several sentences
    fn paragraph(&self) -> String;

    /// A hyphenated three-word slug, suitable for branch names.
    ///
    /// Provided method composed from [`word`]; implementors only need to
    /// override it when slugs must differ from plain words.
    ///
    /// [`word`]: Self::word
    fn slug(&self) -> String {
        format!("{}-{}-{}", self.word(), self.word(), self.word())
    }

    /// `n` paragraphs separated by blank lines
    fn paragraphs(&self, n: usize) -> String {
        (0..n)
            .map(|_| self.paragraph())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Production text source sampling the embedded lorem word pool
#[derive(Debug, Clone, Copy, Default)]
pub struct LoremText;

impl TextSource for LoremText {
    fn word(&self) -> String {
        let mut rng = rand::rng();
        WORDS[rng.random_range(0..WORDS.len())].to_string()
    }

    fn sentence(&self) -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(4..=8);
        let words: Vec<String> = (0..len).map(|_| self.word()).collect();
        let sentence = words.join(" ");

        let mut chars = sentence.chars();
        match chars.next() {
            Some(c) => format!("{}{}.", c.to_uppercase(), chars.as_str()),
            None => sentence,
        }
    }

    fn paragraph(&self) -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(3..=5);
        (0..len)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Source of inter-request delays
pub trait Pacing: Send + Sync {
    /// Cool-down before merging; always exactly [`PRE_MERGE_DELAY`] in
    /// production and not configurable.
    fn pre_merge(&self) -> Duration;

    /// Gap between one iteration and the next
    fn between_iterations(&self) -> Duration;
}

/// Production pacing: fixed pre-merge pause, randomized gap between
/// iterations to emulate organic activity.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPacing;

impl Pacing for HumanPacing {
    fn pre_merge(&self) -> Duration {
        PRE_MERGE_DELAY
    }

    fn between_iterations(&self) -> Duration {
        let millis = rand::rng().random_range(MIN_ITERATION_GAP_MS..=MAX_ITERATION_GAP_MS);
        Duration::from_millis(millis)
    }
}
