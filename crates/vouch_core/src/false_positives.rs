/// Values that are overwhelmingly placeholder text rather than real secrets.
const DEFAULT_ENTRIES: &[&str] = &[
    "example",
    "sample",
    "placeholder",
    "changeme",
    "deadbeef",
    "xxxxxxxx",
    "00000000",
];

/// Known-noise filter consulted before reporting unverified candidates.
///
/// Secret patterns inevitably match documentation placeholders and test
/// fixtures. When verification has not confirmed a candidate, a candidate
/// containing one of these entries is dropped rather than reported. Verified
/// candidates are never filtered.
#[derive(Debug, Clone)]
pub struct FalsePositives {
    entries: Box<[Box<str>]>,
}

impl FalsePositives {
    /// Builds a store from custom entries. Matching is substring containment,
    /// so an entry of `"example"` also suppresses `"my-example-key"`. Entries
    /// are stored lowercased.
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries.into_iter().map(|e| e.as_ref().to_lowercase().into()).collect(),
        }
    }

    /// Returns `true` if `candidate` contains any registered entry.
    ///
    /// With `case_insensitive` set, the candidate is lowercased before the
    /// containment check.
    #[must_use]
    pub fn is_known(&self, candidate: &str, case_insensitive: bool) -> bool {
        let lowered;
        let haystack = if case_insensitive {
            lowered = candidate.to_lowercase();
            lowered.as_str()
        } else {
            candidate
        };

        self.entries.iter().any(|entry| haystack.contains(entry.as_ref()))
    }

    /// Returns the number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FalsePositives {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES)
    }
}
