use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use classtrack::scheduler::RefreshTask;

fn counting_task(period_secs: u64) -> (RefreshTask, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let ticks = count.clone();
    let task = RefreshTask::spawn(Duration::from_secs(period_secs), move || {
        let ticks = ticks.clone();
        async move {
            ticks.fetch_add(1, Ordering::SeqCst);
        }
    });
    (task, count)
}

#[tokio::test(start_paused = true)]
async fn fires_exactly_once_per_period() {
    let (task, count) = counting_task(15);

    tokio::time::sleep(Duration::from_secs(14)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_secs(15)).await;
    assert_eq!(count.load(Ordering::SeqCst), 2);

    task.cancel();
}

#[tokio::test(start_paused = true)]
async fn nothing_fires_after_cancel() {
    let (task, count) = counting_task(15);

    tokio::time::sleep(Duration::from_secs(5)).await;
    task.cancel();

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_handle_stops_the_loop() {
    let (task, count) = counting_task(15);

    tokio::time::sleep(Duration::from_secs(40)).await;
    assert_eq!(count.load(Ordering::SeqCst), 2);

    drop(task);
    tokio::time::sleep(Duration::from_secs(120)).await;
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn cancel_between_periods_suppresses_the_next_tick() {
    let (task, count) = counting_task(30);

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);

    task.cancel();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
