//! Real-clock scenarios: wakes arrive from the timer reactor's thread.

use std::time::{Duration, Instant};

use conjoin::{block_on, concurrent_join};
use smol::Timer;

async fn fetch_after(
    ms: u64,
    outcome: Result<&'static str, &'static str>,
) -> Result<&'static str, &'static str> {
    Timer::after(Duration::from_millis(ms)).await;
    outcome
}

#[test]
fn slowest_first_still_yields_input_order() {
    let res = block_on(concurrent_join([
        fetch_after(300, Ok("A")),
        fetch_after(100, Ok("B")),
        fetch_after(200, Ok("C")),
    ]));
    assert_eq!(res, Ok(vec!["A", "B", "C"]));
}

#[test]
fn operations_overlap_rather_than_queue() {
    let start = Instant::now();
    let res = block_on(concurrent_join(
        (0..4).map(|i| fetch_after(100, Ok(["a", "b", "c", "d"][i]))),
    ));
    assert_eq!(res, Ok(vec!["a", "b", "c", "d"]));
    // Sequential execution would need 400ms.
    assert!(start.elapsed() < Duration::from_millis(350));
}

#[test]
fn early_rejection_preempts_later_successes() {
    let start = Instant::now();
    let res = block_on(concurrent_join([
        fetch_after(200, Ok("1")),
        fetch_after(50, Err("timeout")),
        fetch_after(200, Ok("3")),
    ]));
    let err = res.unwrap_err();
    assert_eq!(err.index(), 1);
    assert_eq!(*err.error(), "timeout");
    // The join must not have waited out the 200ms successes.
    assert!(start.elapsed() < Duration::from_millis(180));
}

#[test]
fn earliest_rejection_wins_across_timers() {
    let res = block_on(concurrent_join([
        fetch_after(50, Err("err-A")),
        fetch_after(10, Err("err-B")),
    ]));
    let err = res.unwrap_err();
    assert_eq!(err.index(), 1);
    assert_eq!(*err.error(), "err-B");
}
