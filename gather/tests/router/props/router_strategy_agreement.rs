use gather::{PARTIAL_FAILURE_MESSAGE, PostId, SUCCESS_MESSAGE, fetch_parallel, fetch_sequential};
use gather_mock::{FaultPlan, Forced};
use proptest::prelude::*;

use crate::helpers::{instant_source, u1};

fn forced(fail: bool) -> Forced {
    if fail { Forced::Fail } else { Forced::Succeed }
}

fn arb_plan() -> impl Strategy<Value = FaultPlan> {
    (any::<bool>(), any::<bool>(), proptest::array::uniform3(any::<bool>())).prop_map(
        |(profile, posts, comments)| {
            comments.iter().enumerate().fold(
                FaultPlan::new()
                    .profile(forced(profile))
                    .posts(forced(posts)),
                |plan, (i, &fail)| plan.comments(PostId(i as u64 + 1), forced(fail)),
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn strategies_agree_on_deterministic_sources(plan in arb_plan()) {
        let src = instant_source(plan);
        let (seq, par) = tokio_test::block_on(async {
            (fetch_sequential(&*src, &u1()).await, fetch_parallel(&*src, &u1()).await)
        });

        prop_assert_eq!(&seq.profile, &par.profile);
        prop_assert_eq!(&seq.posts, &par.posts);
        prop_assert_eq!(&seq.errors, &par.errors);
        prop_assert_eq!(&seq.message, &par.message);

        let expected = if seq.errors.is_empty() { SUCCESS_MESSAGE } else { PARTIAL_FAILURE_MESSAGE };
        prop_assert_eq!(seq.message.as_str(), expected);
        for p in &seq.posts {
            prop_assert!(p.comments().is_empty() != p.comments_error().is_none());
        }
    }
}
