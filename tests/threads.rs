use easy_parallel::Parallel;

use conjoin::{block_on, concurrent_join};
use conjoin::utils::PendingN;

#[test]
fn independent_joins_on_many_threads() {
    let results = Parallel::new()
        .each(0..4u32, |t| {
            block_on(concurrent_join((0..8u32).map(move |i| async move {
                Ok::<_, &'static str>(PendingN::new((i % 3) as usize, t * 8 + i).await)
            })))
        })
        .run();

    for (t, res) in results.into_iter().enumerate() {
        let t = t as u32;
        assert_eq!(res, Ok((t * 8..t * 8 + 8).collect::<Vec<_>>()));
    }
}
