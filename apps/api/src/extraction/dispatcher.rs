//! Parallel dispatch of page extractions under a bounded worker pool.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::segmenter::PageText;
use super::worker::PageExtract;
use crate::models::resume::ResumeRecord;

/// Runs one extraction per page and returns exactly `pages.len()` records
/// in the original page order, regardless of completion order.
///
/// A single page is extracted inline, skipping task-spawn overhead for the
/// common one-page resume. Larger documents fan out over a `JoinSet` gated
/// by a semaphore of `max_workers` permits. A failing or panicking worker
/// forfeits only its own slot, which is backfilled with an empty record.
pub async fn run(
    extractor: &Arc<dyn PageExtract>,
    pages: Vec<PageText>,
    max_workers: usize,
) -> Vec<ResumeRecord> {
    match pages.len() {
        0 => Vec::new(),
        1 => {
            debug!("single page, extracting inline");
            let record = extractor
                .extract_page(&pages[0])
                .await
                .unwrap_or_default();
            vec![record]
        }
        n => {
            let semaphore = Arc::new(Semaphore::new(max_workers.max(1)));
            let mut tasks = JoinSet::new();

            for (slot, page) in pages.into_iter().enumerate() {
                let extractor = Arc::clone(extractor);
                let semaphore = Arc::clone(&semaphore);
                tasks.spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .expect("extraction semaphore closed");
                    let record = extractor.extract_page(&page).await.unwrap_or_default();
                    (slot, record)
                });
            }

            // Slots are pre-filled with defaults so even a panicked task
            // leaves a well-formed placeholder in page order.
            let mut records = vec![ResumeRecord::default(); n];
            while let Some(joined) = tasks.join_next().await {
                match joined {
                    Ok((slot, record)) => records[slot] = record,
                    Err(e) => error!(error = %e, "extraction task aborted"),
                }
            }
            records
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::extraction::ExtractError;

    /// Extractor that finishes pages in reverse order and stamps each record
    /// with its page text, so ordering and count are observable.
    struct ReverseLatency {
        spawned: AtomicUsize,
    }

    #[async_trait]
    impl PageExtract for ReverseLatency {
        async fn extract_page(&self, page: &PageText) -> Result<ResumeRecord, ExtractError> {
            self.spawned.fetch_add(1, Ordering::SeqCst);
            // Later pages finish first.
            let delay = 50u64.saturating_sub(page.index as u64 * 10);
            tokio::time::sleep(Duration::from_millis(delay)).await;
            let mut record = ResumeRecord::default();
            record.about = format!("page-{}", page.index);
            Ok(record)
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl PageExtract for AlwaysFails {
        async fn extract_page(&self, page: &PageText) -> Result<ResumeRecord, ExtractError> {
            Err(ExtractError::PageExtractionFailed {
                page: page.index + 1,
            })
        }
    }

    fn make_pages(n: usize) -> Vec<PageText> {
        (0..n)
            .map(|index| PageText {
                index,
                text: format!("page {index}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_results_are_in_page_order_despite_completion_order() {
        let extractor: Arc<dyn PageExtract> = Arc::new(ReverseLatency {
            spawned: AtomicUsize::new(0),
        });
        let records = run(&extractor, make_pages(5), 5).await;

        let abouts: Vec<_> = records.iter().map(|r| r.about.as_str()).collect();
        assert_eq!(abouts, ["page-0", "page-1", "page-2", "page-3", "page-4"]);
    }

    #[tokio::test]
    async fn test_returns_one_record_per_page_even_when_all_fail() {
        let extractor: Arc<dyn PageExtract> = Arc::new(AlwaysFails);
        let records = run(&extractor, make_pages(4), 2).await;

        assert_eq!(records.len(), 4);
        assert!(records.iter().all(|r| *r == ResumeRecord::default()));
    }

    #[tokio::test]
    async fn test_single_page_returns_one_element() {
        let extractor: Arc<dyn PageExtract> = Arc::new(ReverseLatency {
            spawned: AtomicUsize::new(0),
        });
        let records = run(&extractor, make_pages(1), 5).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].about, "page-0");
    }

    #[tokio::test]
    async fn test_single_failing_page_yields_default_record() {
        let extractor: Arc<dyn PageExtract> = Arc::new(AlwaysFails);
        let records = run(&extractor, make_pages(1), 5).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0], ResumeRecord::default());
    }

    #[tokio::test]
    async fn test_empty_input_returns_empty_output() {
        let extractor: Arc<dyn PageExtract> = Arc::new(AlwaysFails);
        let records = run(&extractor, Vec::new(), 5).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_pool_of_one_still_processes_every_page() {
        let extractor: Arc<dyn PageExtract> = Arc::new(ReverseLatency {
            spawned: AtomicUsize::new(0),
        });
        let records = run(&extractor, make_pages(3), 1).await;
        assert_eq!(records.len(), 3);
    }
}
