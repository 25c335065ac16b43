//! Per-child education cost estimation by life stage
//!
//! Annual cost figures approximate ministry-of-education averages for each
//! stage and public/private selection. Two subsidy programs can reduce them:
//! free nursery care (ages 0-5) and regional tuition support (high school
//! and public university).

use crate::household::{Child, SchoolTrack, UniversityTrack};
use crate::HORIZON_YEARS;

// Annual costs in yen
const NURSERY: f64 = 480_000.0;
const KINDERGARTEN_PUBLIC: f64 = 220_000.0;
const KINDERGARTEN_PRIVATE: f64 = 500_000.0;
const ELEMENTARY_PUBLIC: f64 = 320_000.0;
const ELEMENTARY_PRIVATE: f64 = 1_600_000.0;
const JUNIOR_HIGH_PUBLIC: f64 = 490_000.0;
const JUNIOR_HIGH_PRIVATE: f64 = 1_400_000.0;
const HIGH_SCHOOL_PUBLIC: f64 = 460_000.0;
const HIGH_SCHOOL_PRIVATE: f64 = 970_000.0;
const UNIVERSITY_PUBLIC: f64 = 820_000.0;
const UNIVERSITY_PRIVATE_ARTS: f64 = 1_200_000.0;
const UNIVERSITY_PRIVATE_SCIENCE: f64 = 1_600_000.0;

// Subsidy caps in yen
const KINDERGARTEN_SUBSIDY: f64 = 308_000.0;
const HIGH_SCHOOL_SUBSIDY_PUBLIC: f64 = 120_000.0;
const HIGH_SCHOOL_SUBSIDY_PRIVATE: f64 = 480_000.0;
const UNIVERSITY_SUBSIDY_PUBLIC: f64 = 540_000.0;

/// Cost for one child at one age, after subsidies
fn cost_at_age(child: &Child, age: i32, regional_subsidy: bool, free_nursery: bool) -> f64 {
    let edu = &child.education;

    match age {
        0..=2 => {
            if free_nursery {
                0.0
            } else {
                NURSERY
            }
        }
        3..=5 => {
            let base = match edu.kindergarten {
                SchoolTrack::Public => KINDERGARTEN_PUBLIC,
                SchoolTrack::Private => KINDERGARTEN_PRIVATE,
            };
            if free_nursery {
                (base - KINDERGARTEN_SUBSIDY).max(0.0)
            } else {
                base
            }
        }
        6..=11 => match edu.elementary {
            SchoolTrack::Public => ELEMENTARY_PUBLIC,
            SchoolTrack::Private => ELEMENTARY_PRIVATE,
        },
        12..=14 => match edu.junior_high {
            SchoolTrack::Public => JUNIOR_HIGH_PUBLIC,
            SchoolTrack::Private => JUNIOR_HIGH_PRIVATE,
        },
        15..=17 => {
            let (base, subsidy) = match edu.high_school {
                SchoolTrack::Public => (HIGH_SCHOOL_PUBLIC, HIGH_SCHOOL_SUBSIDY_PUBLIC),
                SchoolTrack::Private => (HIGH_SCHOOL_PRIVATE, HIGH_SCHOOL_SUBSIDY_PRIVATE),
            };
            if regional_subsidy {
                (base - subsidy).max(0.0)
            } else {
                base
            }
        }
        18..=21 => match edu.university {
            UniversityTrack::Public => {
                if regional_subsidy {
                    (UNIVERSITY_PUBLIC - UNIVERSITY_SUBSIDY_PUBLIC).max(0.0)
                } else {
                    UNIVERSITY_PUBLIC
                }
            }
            UniversityTrack::PrivateArts => UNIVERSITY_PRIVATE_ARTS,
            UniversityTrack::PrivateScience => UNIVERSITY_PRIVATE_SCIENCE,
        },
        _ => 0.0,
    }
}

/// Total education cost per simulated year across all children, in yen
pub fn education_cost_schedule(
    children: &[Child],
    regional_subsidy: bool,
    free_nursery: bool,
) -> Vec<i64> {
    (0..HORIZON_YEARS)
        .map(|i| {
            children
                .iter()
                .map(|child| cost_at_age(child, child.age_at(i), regional_subsidy, free_nursery))
                .sum::<f64>() as i64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::EducationPath;

    #[test]
    fn test_stage_progression() {
        let child = Child::new(0);
        let schedule = education_cost_schedule(&[child], false, false);

        assert_eq!(schedule[0], 480_000); // nursery
        assert_eq!(schedule[3], 220_000); // public kindergarten
        assert_eq!(schedule[6], 320_000); // public elementary
        assert_eq!(schedule[12], 490_000); // public junior high
        assert_eq!(schedule[15], 460_000); // public high school
        assert_eq!(schedule[18], 1_200_000); // private arts university
        assert_eq!(schedule[22], 0); // done
    }

    #[test]
    fn test_free_nursery_zeroes_early_years() {
        let child = Child::new(0);
        let schedule = education_cost_schedule(&[child], false, true);

        assert_eq!(schedule[0], 0);
        assert_eq!(schedule[1], 0);
        assert_eq!(schedule[2], 0);
        // Kindergarten cost reduced by the subsidy cap, floored at 0
        assert_eq!(schedule[3], 0); // 220,000 - 308,000 clamps
    }

    #[test]
    fn test_free_nursery_private_kindergarten() {
        let mut child = Child::new(3);
        child.education.kindergarten = SchoolTrack::Private;
        let schedule = education_cost_schedule(&[child], false, true);

        assert_eq!(schedule[0], 500_000 - 308_000);
    }

    #[test]
    fn test_regional_subsidy_high_school() {
        let mut private_hs = Child::new(15);
        private_hs.education.high_school = SchoolTrack::Private;

        let without = education_cost_schedule(&[private_hs.clone()], false, false);
        let with = education_cost_schedule(&[private_hs], true, false);

        assert_eq!(without[0], 970_000);
        assert_eq!(with[0], 970_000 - 480_000);
    }

    #[test]
    fn test_regional_subsidy_public_university() {
        let mut child = Child::new(18);
        child.education = EducationPath {
            university: UniversityTrack::Public,
            ..EducationPath::default()
        };

        let with = education_cost_schedule(&[child], true, false);
        assert_eq!(with[0], 820_000 - 540_000);
    }

    #[test]
    fn test_multiple_children_sum() {
        let schedule = education_cost_schedule(&[Child::new(0), Child::new(6)], false, false);
        assert_eq!(schedule[0], 480_000 + 320_000);
    }

    #[test]
    fn test_unborn_child_costs_nothing_yet() {
        let schedule = education_cost_schedule(&[Child::new(-2)], false, false);
        assert_eq!(schedule[0], 0);
        assert_eq!(schedule[2], 480_000);
    }
}
