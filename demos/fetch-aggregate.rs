//! The classic dashboard shape: fetch users, posts, and comments at once,
//! then render all three — or report whichever request failed first.
//!
//! The fetches are simulated with timers so the demo runs offline; swap in a
//! real HTTP client without touching the join.

use std::time::Duration;

use conjoin::{block_on, concurrent_join};
use smol::Timer;

async fn fetch(resource: &'static str, ms: u64) -> Result<String, String> {
    Timer::after(Duration::from_millis(ms)).await;
    if resource == "comments" && std::env::var_os("FAIL_COMMENTS").is_some() {
        return Err(format!("GET /{resource}: 503 service unavailable"));
    }
    Ok(format!("{resource}: 100 records"))
}

fn main() {
    let result = block_on(concurrent_join([
        fetch("users", 120),
        fetch("posts", 40),
        fetch("comments", 80),
    ]));

    match result {
        Ok(bodies) => {
            for body in &bodies {
                println!("{body}");
            }
        }
        Err(err) => eprintln!("aggregation failed: {err}"),
    }
}
