//! Child allowance (monthly stipend by age band)

use crate::household::Child;
use crate::HORIZON_YEARS;

/// Monthly stipend before age 3, yen
const UNDER_3_MONTHLY: i64 = 15_000;

/// Monthly stipend from age 3 through 18, yen
const UNDER_19_MONTHLY: i64 = 10_000;

/// Annual allowance for one child at one age
fn allowance_at_age(age: i32) -> i64 {
    match age {
        0..=2 => UNDER_3_MONTHLY * 12,
        3..=18 => UNDER_19_MONTHLY * 12,
        _ => 0,
    }
}

/// Total annual child allowance per simulated year, in yen
pub fn child_allowance_schedule(children: &[Child]) -> Vec<i64> {
    (0..HORIZON_YEARS)
        .map(|i| {
            children
                .iter()
                .map(|child| allowance_at_age(child.age_at(i)))
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_bands() {
        let schedule = child_allowance_schedule(&[Child::new(0)]);

        assert_eq!(schedule[0], 180_000); // age 0
        assert_eq!(schedule[2], 180_000); // age 2
        assert_eq!(schedule[3], 120_000); // age 3
        assert_eq!(schedule[18], 120_000); // age 18
        assert_eq!(schedule[19], 0); // aged out
    }

    #[test]
    fn test_unborn_child_receives_nothing() {
        let schedule = child_allowance_schedule(&[Child::new(-2)]);
        assert_eq!(schedule[0], 0);
        assert_eq!(schedule[2], 180_000);
    }

    #[test]
    fn test_sums_across_children() {
        let schedule = child_allowance_schedule(&[Child::new(1), Child::new(10)]);
        assert_eq!(schedule[0], 180_000 + 120_000);
    }
}
