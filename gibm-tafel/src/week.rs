use time::{Date, Duration};

/// ISO-8601 week of `date` and the year that week belongs to.
///
/// The date is moved to the Thursday of its week (weeks start on monday), the
/// week is then counted from january 1st of that thursday's year. Late december
/// dates can therefore land in week 1 of the next year and early january dates
/// in week 52 or 53 of the previous one.
pub fn iso_week(date: Date) -> (u8, i32) {
  let weekday = i64::from(date.weekday().number_from_monday());
  let thursday = date + Duration::days(4 - weekday);

  let days_since_year_start = u16::from(thursday.ordinal()) - 1;
  let week = (days_since_year_start + 1).div_ceil(7);

  (week as u8, thursday.year())
}

pub fn week_number(date: Date) -> u8 {
  iso_week(date).0
}

#[cfg(test)]
mod test {
  use time::macros::date;

  use super::{iso_week, week_number};

  #[test]
  fn first_day_of_2020() {
    assert_eq!(iso_week(date!(2020 - 01 - 01)), (1, 2020));
  }

  #[test]
  fn last_monday_of_2018_belongs_to_2019() {
    assert_eq!(iso_week(date!(2018 - 12 - 31)), (1, 2019));
  }

  #[test]
  fn early_january_belongs_to_previous_year() {
    assert_eq!(iso_week(date!(2021 - 01 - 03)), (53, 2020));
    assert_eq!(iso_week(date!(2023 - 01 - 01)), (52, 2022));
  }

  #[test]
  fn whole_week_shares_number() {
    // monday to sunday
    for day in 9..=15 {
      let date = time::Date::from_calendar_date(2023, time::Month::January, day).unwrap();
      assert_eq!(week_number(date), 2, "{date}");
    }
    assert_eq!(week_number(date!(2023 - 01 - 16)), 3);
  }

  #[test]
  fn long_years() {
    assert_eq!(iso_week(date!(2026 - 12 - 31)), (53, 2026));
    assert_eq!(iso_week(date!(2027 - 01 - 01)), (53, 2026));
    assert_eq!(iso_week(date!(2027 - 01 - 04)), (1, 2027));
  }

  #[test]
  fn mid_year() {
    assert_eq!(week_number(date!(2023 - 03 - 08)), 10);
    assert_eq!(week_number(date!(2026 - 10 - 14)), 42);
  }
}
