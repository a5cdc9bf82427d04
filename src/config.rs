//! Configuration for unimodularity checks

use crate::unimodular::PairEnumeration;

/// Configuration for the pairwise minor scan
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to scan row pairs in parallel (false = single-threaded)
    pub parallel: bool,
    /// Ordered pairs (reference behaviour) or unordered pairs (half the work)
    pub enumeration: PairEnumeration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: true,
            enumeration: PairEnumeration::Ordered,
        }
    }
}

impl CheckConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self {
            threads,
            parallel,
            enumeration: PairEnumeration::default(),
        }
    }

    pub fn with_enumeration(mut self, enumeration: PairEnumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    pub fn from_args(matches: &clap::ArgMatches) -> Self {
        let threads = matches.get_one::<usize>("threads").copied().unwrap_or(0);

        let parallel = !matches.get_flag("no-parallel");

        let enumeration = if matches.get_flag("unordered") {
            PairEnumeration::Unordered
        } else {
            PairEnumeration::Ordered
        };

        Self::new(threads, parallel).with_enumeration(enumeration)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4), // Auto-detect CPU cores
            (true, n) => n,  // Use specified thread count
        }
    }
}
