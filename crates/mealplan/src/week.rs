use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Date, Duration, OffsetDateTime};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// ISO date (`YYYY-MM-DD`) of the Monday starting the week of `date`.
pub fn week_start_of(date: Date) -> String {
    let monday = date - Duration::days(date.weekday().number_days_from_monday() as i64);

    format!(
        "{:04}-{:02}-{:02}",
        monday.year(),
        monday.month() as u8,
        monday.day()
    )
}

pub fn current_week_start() -> String {
    week_start_of(OffsetDateTime::now_utc().date())
}
