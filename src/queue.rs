/// Rate-limited batch generation queue
///
/// Interfaces queued for generation are drained under a semaphore sized by
/// the global `rate_limit`; every job fetches one interface definition,
/// generates its TypeScript and reports progress to the frontend. Failures
/// are per-item: a failed job logs an error entry and the run continues.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tauri::AppHandle;
use tokio::sync::{Mutex, Semaphore};
use tokio::time::sleep;
use tracing::{info, warn};

use crate::codegen;
use crate::config::{global, project};
use crate::error::Result;
use crate::models::ResolvedInterface;
use crate::ui::events::{self, QueueLog};
use crate::upstream;

/// One queued generation job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueJob {
    pub interface_id: u32,
    pub token: String,
    pub source_path: String,
}

/// Tauri-managed batch queue
#[derive(Clone, Default)]
pub struct TaskQueue {
    waiting: Arc<Mutex<VecDeque<QueueJob>>>,
    results: Arc<Mutex<Vec<ResolvedInterface>>>,
    running: Arc<AtomicBool>,
    processed: Arc<AtomicUsize>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a job to the waiting queue
    pub async fn enqueue(&self, job: QueueJob) {
        self.waiting.lock().await.push_back(job);
    }

    /// Number of jobs still waiting
    pub async fn pending(&self) -> usize {
        self.waiting.lock().await.len()
    }

    /// Stop the drain loop at its next check
    pub fn cancel(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Claim the running flag; false when a run is already in flight
    pub fn begin_run(&self) -> bool {
        !self.running.swap(true, Ordering::SeqCst)
    }

    /// Hand over everything generated so far, clearing the result list
    pub async fn take_results(&self) -> Vec<ResolvedInterface> {
        std::mem::take(&mut *self.results.lock().await)
    }

    /// Put taken results back so a retry after a failed write still has them
    pub async fn restore_results(&self, items: Vec<ResolvedInterface>) {
        let mut results = self.results.lock().await;
        let newer = std::mem::take(&mut *results);
        *results = items;
        results.extend(newer);
    }

    /// Drain the waiting queue
    ///
    /// Returns immediately when a run is already in flight. Jobs execute
    /// concurrently up to the configured rate limit; each one pauses
    /// `break_seconds` before returning its permit, spacing out upstream
    /// requests.
    pub async fn run(&self, app_handle: AppHandle) -> Result<()> {
        if !self.begin_run() {
            warn!("Batch task already running");
            return Ok(());
        }

        let global_config = match global::read(&app_handle) {
            Ok(config) => config,
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };
        let client = match upstream::build_client(global_config.proxy.as_deref()) {
            Ok(client) => client,
            Err(e) => {
                self.running.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        info!(
            "Starting batch run (rate limit {}, break {}s)",
            global_config.rate_limit, global_config.break_seconds
        );

        let emitter = app_handle.clone();
        self.drain(
            global_config.rate_limit,
            global_config.break_seconds,
            move |job| {
                let client = client.clone();
                async move { execute_job(&client, &job).await }
            },
            move |log| events::emit_queue_log(&emitter, &log),
        )
        .await;

        info!(
            "Batch run drained ({} items processed so far)",
            self.processed.load(Ordering::SeqCst)
        );
        Ok(())
    }

    /// Drain loop behind `run`: the caller has claimed the running flag
    ///
    /// Each popped job goes to `execute`; its outcome is recorded and handed
    /// to `report` as a `QueueLog`. Failures are per-item, the drain keeps
    /// going. The running flag clears once the queue is empty or cancelled.
    async fn drain<E, Fut, S>(&self, rate_limit: usize, break_seconds: u64, execute: E, report: S)
    where
        E: Fn(QueueJob) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Result<ResolvedInterface>> + Send + 'static,
        S: Fn(QueueLog) + Clone + Send + Sync + 'static,
    {
        let semaphore = Arc::new(Semaphore::new(rate_limit.max(1)));
        self.processed.store(0, Ordering::SeqCst);

        while self.running.load(Ordering::SeqCst) {
            let Ok(permit) = semaphore.clone().acquire_owned().await else {
                break;
            };

            let Some(job) = self.waiting.lock().await.pop_front() else {
                break;
            };

            let queue = self.clone();
            let execute = execute.clone();
            let report = report.clone();

            tokio::spawn(async move {
                let log = match execute(job.clone()).await {
                    Ok(resolved) => {
                        let title = resolved.interface.title.clone();
                        queue.results.lock().await.push(resolved.clone());
                        let processed = queue.processed.fetch_add(1, Ordering::SeqCst) + 1;
                        QueueLog::success(
                            format!("Interface '{title}' finished"),
                            processed,
                            resolved,
                        )
                    }
                    Err(e) => {
                        let processed = queue.processed.fetch_add(1, Ordering::SeqCst) + 1;
                        QueueLog::failure(
                            format!("Interface {} failed: {e}", job.interface_id),
                            processed,
                        )
                    }
                };
                report(log);

                sleep(Duration::from_secs(break_seconds)).await;
                drop(permit);
            });
        }

        self.running.store(false, Ordering::SeqCst);
    }
}

/// Fetch one interface and generate its declarations
async fn execute_job(client: &Client, job: &QueueJob) -> Result<ResolvedInterface> {
    let config = project::read(&job.source_path)?;
    let detail = upstream::fetch_interface_detail(
        client,
        &config.base_url,
        &job.token,
        job.interface_id,
    )
    .await?;
    let ts_string = codegen::generate_interface_types(&detail)?;

    Ok(ResolvedInterface {
        interface: detail,
        ts_string,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForgeError;
    use crate::models::InterfaceDetail;

    fn job(id: u32) -> QueueJob {
        QueueJob {
            interface_id: id,
            token: "tok".to_string(),
            source_path: "/nonexistent".to_string(),
        }
    }

    fn resolved(id: u32) -> ResolvedInterface {
        ResolvedInterface {
            interface: InterfaceDetail {
                _id: id,
                path: "/api/user/login".to_string(),
                project_id: 77,
                title: format!("interface {id}"),
                catid: 5,
                method: "GET".to_string(),
                req_body_other: None,
                req_query: None,
                req_params: None,
                req_body_form: None,
                req_body_type: None,
                res_body: None,
            },
            ts_string: "export interface loginResponse {\n}\n".to_string(),
        }
    }

    #[tokio::test]
    async fn test_enqueue_and_pending() {
        let queue = TaskQueue::new();
        assert_eq!(queue.pending().await, 0);

        queue.enqueue(job(1)).await;
        queue.enqueue(job(2)).await;
        assert_eq!(queue.pending().await, 2);
    }

    #[tokio::test]
    async fn test_cancel_clears_running_flag() {
        let queue = TaskQueue::new();
        assert!(!queue.is_running());
        queue.cancel();
        assert!(!queue.is_running());
    }

    #[tokio::test]
    async fn test_take_results_drains() {
        let queue = TaskQueue::new();
        assert!(queue.take_results().await.is_empty());
    }

    #[tokio::test]
    async fn test_begin_run_claims_single_runner() {
        let queue = TaskQueue::new();
        assert!(queue.begin_run());
        assert!(queue.is_running());
        assert!(!queue.begin_run(), "second claim must fail");

        queue.cancel();
        assert!(queue.begin_run());
    }

    #[tokio::test]
    async fn test_restored_results_are_taken_again() {
        let queue = TaskQueue::new();
        queue.restore_results(vec![resolved(1)]).await;

        let taken = queue.take_results().await;
        assert_eq!(taken.len(), 1);
        assert!(queue.take_results().await.is_empty());

        queue.restore_results(taken).await;
        assert_eq!(queue.take_results().await.len(), 1);
    }

    #[tokio::test]
    async fn test_restored_results_keep_order_before_newer_ones() {
        let queue = TaskQueue::new();
        queue.restore_results(vec![resolved(2)]).await;
        queue.restore_results(vec![resolved(1)]).await;

        let results = queue.take_results().await;
        assert_eq!(results[0].interface._id, 1);
        assert_eq!(results[1].interface._id, 2);
    }

    #[tokio::test]
    async fn test_drain_continues_past_failed_jobs() {
        let queue = TaskQueue::new();
        for id in 1..=3 {
            queue.enqueue(job(id)).await;
        }

        let logs: Arc<std::sync::Mutex<Vec<QueueLog>>> = Arc::default();
        let sink = logs.clone();

        assert!(queue.begin_run());
        queue
            .drain(
                2,
                0,
                |job| async move {
                    if job.interface_id == 2 {
                        Err(ForgeError::EmptyResponseBody {
                            title: "broken".to_string(),
                        })
                    } else {
                        Ok(resolved(job.interface_id))
                    }
                },
                move |log| sink.lock().unwrap().push(log),
            )
            .await;

        // workers may still be finishing after the drain loop exits
        for _ in 0..200 {
            if logs.lock().unwrap().len() == 3 {
                break;
            }
            sleep(Duration::from_millis(10)).await;
        }

        assert!(!queue.is_running());
        assert_eq!(queue.pending().await, 0);
        assert_eq!(queue.take_results().await.len(), 2);

        let logs = logs.lock().unwrap();
        assert_eq!(logs.len(), 3, "every job must report");
        assert_eq!(logs.iter().filter(|log| !log.is_success).count(), 1);
    }

    #[tokio::test]
    async fn test_execute_job_surfaces_missing_config() {
        let client = Client::new();
        let err = execute_job(&client, &job(1)).await.unwrap_err();
        assert!(matches!(err, ForgeError::ConfigRead { .. }));
    }
}
