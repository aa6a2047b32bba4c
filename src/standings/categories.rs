use chrono::{Datelike, NaiveDate};

use crate::error::{Result, ResultsError};

/// Label for runners under the first veteran band.
pub const SENIOR: &str = "Senior";

const FIRST_VETERAN_AGE: i64 = 40;
const LAST_VETERAN_AGE: i64 = 80;

/// All age categories for a season with the given bucket width:
/// `"Senior"` followed by `"V40"`, `"V{40 + size}"`, ... up to 80.
pub fn generate_categories(category_size: i64) -> Result<Vec<String>> {
    let step = validate_size(category_size)?;
    let mut categories = vec![SENIOR.to_string()];
    categories.extend(
        (FIRST_VETERAN_AGE..=LAST_VETERAN_AGE)
            .step_by(step)
            .map(|age| format!("V{age}")),
    );
    Ok(categories)
}

/// The category a runner of `age` falls into: the band `V{base}` holding
/// `base <= age < base + size`. Ages past the last band fall into `"V80"`.
pub fn category_for_age(age: i64, category_size: i64) -> Result<String> {
    let step = validate_size(category_size)?;
    if age < FIRST_VETERAN_AGE {
        return Ok(SENIOR.to_string());
    }
    let category = (FIRST_VETERAN_AGE..=LAST_VETERAN_AGE)
        .step_by(step)
        .find(|base| age < base + category_size)
        .map_or_else(|| format!("V{LAST_VETERAN_AGE}"), |base| format!("V{base}"));
    Ok(category)
}

/// Whole years of age on `season_date` for someone born on `date_of_birth`.
pub fn age_on(season_date: NaiveDate, date_of_birth: NaiveDate) -> i64 {
    let had_birthday =
        (season_date.month(), season_date.day()) >= (date_of_birth.month(), date_of_birth.day());
    i64::from(season_date.year() - date_of_birth.year()) - i64::from(!had_birthday)
}

fn validate_size(category_size: i64) -> Result<usize> {
    if category_size <= 0 {
        return Err(ResultsError::Configuration(format!(
            "age_category_size must be positive, got {category_size}"
        )));
    }
    usize::try_from(category_size).map_err(|_| {
        ResultsError::Configuration(format!("age_category_size {category_size} is too large"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_categories_size_5() {
        let categories = generate_categories(5).unwrap();
        assert_eq!(
            categories,
            vec!["Senior", "V40", "V45", "V50", "V55", "V60", "V65", "V70", "V75", "V80"]
        );
    }

    #[test]
    fn test_generate_categories_size_20() {
        assert_eq!(
            generate_categories(20).unwrap(),
            vec!["Senior", "V40", "V60", "V80"]
        );
    }

    #[test]
    fn test_generate_categories_stops_at_or_below_80() {
        assert_eq!(
            generate_categories(15).unwrap(),
            vec!["Senior", "V40", "V55", "V70"]
        );
        assert_eq!(generate_categories(100).unwrap(), vec!["Senior", "V40"]);
    }

    #[test]
    fn test_generate_categories_rejects_non_positive_size() {
        assert!(matches!(
            generate_categories(0),
            Err(ResultsError::Configuration(_))
        ));
        assert!(matches!(
            generate_categories(-5),
            Err(ResultsError::Configuration(_))
        ));
    }

    #[test]
    fn test_category_for_age() {
        assert_eq!(category_for_age(39, 5).unwrap(), "Senior");
        assert_eq!(category_for_age(40, 5).unwrap(), "V40");
        assert_eq!(category_for_age(44, 5).unwrap(), "V40");
        assert_eq!(category_for_age(45, 5).unwrap(), "V45");
        assert_eq!(category_for_age(59, 10).unwrap(), "V50");
        assert_eq!(category_for_age(93, 5).unwrap(), "V80");
        assert_eq!(category_for_age(79, 20).unwrap(), "V60");
        assert_eq!(category_for_age(84, 15).unwrap(), "V70");
        assert_eq!(category_for_age(90, 15).unwrap(), "V80");
        assert_eq!(category_for_age(89, 50).unwrap(), "V40");
        assert_eq!(category_for_age(95, 50).unwrap(), "V80");
        assert!(category_for_age(50, 0).is_err());
    }

    #[test]
    fn test_age_on() {
        let dob = NaiveDate::from_ymd_opt(1980, 6, 2).unwrap();
        assert_eq!(age_on(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(), dob), 39);
        assert_eq!(age_on(NaiveDate::from_ymd_opt(2020, 6, 2).unwrap(), dob), 40);
    }
}
