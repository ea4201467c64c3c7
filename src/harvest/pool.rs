// src/harvest/pool.rs
// =============================================================================
// The concurrent part of the program: a fixed pool of workers draining a
// queue of seed URLs.
//
// How it works:
// 1. All seeds go into a shared queue
// 2. `concurrency` worker tasks are spawned on the tokio runtime
// 3. Each worker pops a seed, fetches it, extracts links, and merges them
//    into the one shared set (under the one lock)
// 4. After the merge the worker reports progress, then pops the next seed
// 5. harvest() waits for every worker before returning a snapshot
//
// A failed fetch contributes nothing; it never stops the other workers.
// =============================================================================

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::collect::{extract_links, DomainFilter};
use crate::fetch::Fetch;

/// Pool size used when harvesting directories.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// What one seed contributed, reported right after its merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub seed: String,
    /// Links extracted from the seed page
    pub found: usize,
    /// How many of those were new to the shared set
    pub added: usize,
    /// Size of the shared set right after the merge
    pub total: usize,
    /// True when the fetch failed
    pub failed: bool,
}

pub type ProgressCallback = Arc<dyn Fn(&SeedReport) + Send + Sync>;

pub struct Harvester<F> {
    fetcher: Arc<F>,
    filter: DomainFilter,
    concurrency: usize,
    progress_callback: Option<ProgressCallback>,
}

impl<F: Fetch + 'static> Harvester<F> {
    pub fn new(fetcher: F, filter: DomainFilter, concurrency: usize) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            filter,
            concurrency: concurrency.max(1),
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Harvests every seed and returns the full deduplicated set.
    ///
    /// Returns only once every seed has been processed. Each call starts
    /// from an empty set; nothing carries over between calls.
    pub async fn harvest(&self, seeds: Vec<String>) -> HashSet<String> {
        let workers = self.concurrency.min(seeds.len());
        info!(
            seeds = seeds.len(),
            workers,
            suffix = self.filter.suffix(),
            "starting harvest"
        );

        let queue = Arc::new(Mutex::new(VecDeque::from(seeds)));
        let collected = Arc::new(Mutex::new(HashSet::new()));

        let mut handles = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let queue = queue.clone();
            let fetcher = self.fetcher.clone();
            let filter = self.filter.clone();
            let collected = collected.clone();
            let progress_cb = self.progress_callback.clone();

            handles.push(tokio::spawn(async move {
                debug!(worker_id, "worker started");
                loop {
                    // Release the queue lock before doing any I/O
                    let next = queue.lock().await.pop_front();
                    let Some(seed) = next else {
                        break;
                    };

                    let (links, failed) = harvest_seed(fetcher.as_ref(), &filter, &seed).await;
                    let found = links.len();

                    let (added, total) = {
                        let mut collected = collected.lock().await;
                        let before = collected.len();
                        collected.extend(links);
                        (collected.len() - before, collected.len())
                    };

                    debug!(worker_id, %seed, found, added, total, "seed merged");

                    if let Some(cb) = &progress_cb {
                        cb(&SeedReport {
                            seed,
                            found,
                            added,
                            total,
                            failed,
                        });
                    }
                }
                debug!(worker_id, "worker finished");
            }));
        }

        for result in join_all(handles).await {
            if let Err(e) = result {
                warn!(error = %e, "harvest worker panicked");
            }
        }

        let snapshot = std::mem::take(&mut *collected.lock().await);
        info!(urls = snapshot.len(), "harvest complete");
        snapshot
    }
}

// One unit of work: fetch, then extract. A failure means an empty set.
async fn harvest_seed<F: Fetch + ?Sized>(
    fetcher: &F,
    filter: &DomainFilter,
    seed: &str,
) -> (HashSet<String>, bool) {
    match fetcher.fetch(seed).await {
        Ok(html) => (extract_links(seed, &html, filter), false),
        Err(e) => {
            warn!(%seed, error = %e, "directory fetch failed");
            (HashSet::new(), true)
        }
    }
}
