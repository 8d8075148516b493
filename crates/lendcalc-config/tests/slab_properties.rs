//! Rate lookup over generated slab ladders.

use lendcalc_config::{InterestSetting, RateSlab, Validate};
use lendcalc_core::LoanType;
use proptest::prelude::*;

const DEFAULT_RATE: f64 = 3.0;

/// (gap before the slab, slab width, slab rate) for each rung.
fn rungs() -> impl Strategy<Value = Vec<(f64, f64, f64)>> {
    prop::collection::vec((1.0f64..1_000.0, 1.0f64..100_000.0, 0.0f64..30.0), 1..6)
}

fn ladder(rungs: &[(f64, f64, f64)], open_ended: bool) -> InterestSetting {
    let mut setting = InterestSetting::new("Ladder", LoanType::FlatRate, DEFAULT_RATE);
    let mut floor = 0.0;
    for (i, &(gap, width, rate)) in rungs.iter().enumerate() {
        let min = floor + gap;
        let max = min + width;
        let last = i + 1 == rungs.len();
        setting = setting.with_slab(RateSlab::new(min, (!(last && open_ended)).then_some(max), rate));
        floor = max;
    }
    setting
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ascending_ladders_are_valid(rungs in rungs(), open_ended in any::<bool>()) {
        let setting = ladder(&rungs, open_ended);
        prop_assert!(setting.validate().is_empty(), "{:?}", setting.validate());
    }

    #[test]
    fn rate_is_a_slab_rate_or_default(
        rungs in rungs(),
        open_ended in any::<bool>(),
        amount in 0.0f64..1_000_000.0,
    ) {
        let setting = ladder(&rungs, open_ended);
        let rate = setting.applicable_rate(amount);
        let from_slab = setting.amount_slabs.iter().any(|s| s.interest_rate == rate);
        prop_assert!(rate == DEFAULT_RATE || from_slab);

        if amount < setting.amount_slabs[0].min_amount {
            prop_assert_eq!(rate, DEFAULT_RATE);
        }
    }

    #[test]
    fn slab_bounds_are_inclusive(rungs in rungs(), open_ended in any::<bool>()) {
        let setting = ladder(&rungs, open_ended);
        for slab in &setting.amount_slabs {
            prop_assert_eq!(setting.applicable_rate(slab.min_amount), slab.interest_rate);
            if let Some(max) = slab.max_amount {
                prop_assert_eq!(setting.applicable_rate(max), slab.interest_rate);
            }
        }
    }

    #[test]
    fn gaps_fall_back_to_default(rungs in rungs()) {
        let setting = ladder(&rungs, false);
        for pair in setting.amount_slabs.windows(2) {
            let prev_max = pair[0].max_amount.unwrap_or(f64::INFINITY);
            let midpoint = (prev_max + pair[1].min_amount) / 2.0;
            prop_assert_eq!(setting.applicable_rate(midpoint), DEFAULT_RATE);
        }
    }
}
