use std::time::Duration;

use qqbot::services::scheduler::SchedulerService;

#[test_log::test]
fn scheduled_task_runs_without_panicking() {
    SchedulerService::run_scheduled_task();
    SchedulerService::run_scheduled_task();
}

#[test_log::test(tokio::test(start_paused = true))]
async fn spawned_task_keeps_running_until_aborted() {
    let handle = SchedulerService::spawn_scheduled_task(Duration::from_secs(60));

    // Several periods elapse on the paused clock
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert!(!handle.is_finished());

    handle.abort();
    let err = handle.await.expect_err("task should be cancelled");
    assert!(err.is_cancelled());
}

#[test_log::test(tokio::test(start_paused = true))]
async fn zero_period_does_not_panic() {
    let handle = SchedulerService::spawn_scheduled_task(Duration::ZERO);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(!handle.is_finished());
    handle.abort();
}
