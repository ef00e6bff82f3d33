use crate::completion::categories::Category;
use crate::models::profile::Profile;

/// How one category scored against a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub completed: usize,
    pub total: usize,
    /// Percentage points earned, already rounded.
    pub points: u32,
}

/// Scores `category` as `round(weight * completed / total)`, rounding half up.
pub fn score_category(profile: &Profile, category: &Category) -> CategoryScore {
    let total = category.fields().len();
    let completed = category
        .fields()
        .iter()
        .filter(|spec| spec.is_complete(profile))
        .count();

    CategoryScore {
        completed,
        total,
        points: weighted_points(category.weight(), completed, total),
    }
}

/// `weight * completed / total`, rounded half up in integer arithmetic so
/// identical inputs always give identical points.
pub(crate) fn weighted_points(weight: u32, completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let numerator = u64::from(weight) * completed as u64;
    let total = total as u64;
    ((2 * numerator + total) / (2 * total)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::categories::CategoryTable;

    fn core(table: &CategoryTable) -> &Category {
        &table.categories()[0]
    }

    #[test]
    fn test_example_core_three_of_six() {
        let table = CategoryTable::builtin().unwrap();
        let profile = Profile {
            primary_sport: Some("Football".to_string()),
            position: Some("Striker".to_string()),
            level: Some("amateur".to_string()),
            ..Profile::default()
        };
        let score = score_category(&profile, core(&table));
        assert_eq!(
            score,
            CategoryScore {
                completed: 3,
                total: 6,
                points: 20
            }
        );
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let table = CategoryTable::builtin().unwrap();
        for category in table.categories() {
            let score = score_category(&Profile::default(), category);
            assert_eq!(score.completed, 0);
            assert_eq!(score.points, 0);
            assert_eq!(score.total, category.fields().len());
        }
    }

    #[test]
    fn test_rounds_half_up() {
        // 15 * 1/4 = 3.75, 15 * 2/4 = 7.5, 15 * 1/6 = 2.5
        assert_eq!(weighted_points(15, 1, 4), 4);
        assert_eq!(weighted_points(15, 2, 4), 8);
        assert_eq!(weighted_points(15, 1, 6), 3);
        // 40 * 1/6 = 6.67, 20 * 1/6 = 3.33
        assert_eq!(weighted_points(40, 1, 6), 7);
        assert_eq!(weighted_points(20, 1, 6), 3);
    }

    #[test]
    fn test_full_category_earns_full_weight() {
        for total in 1..=12 {
            assert_eq!(weighted_points(15, total, total), 15);
        }
    }

    #[test]
    fn test_points_never_decrease_with_more_fields() {
        for weight in [10, 15, 20, 40] {
            for total in 1..=8 {
                let points: Vec<_> = (0..=total)
                    .map(|done| weighted_points(weight, done, total))
                    .collect();
                assert!(points.windows(2).all(|w| w[0] <= w[1]), "{points:?}");
            }
        }
    }
}
