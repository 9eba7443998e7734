use chrono::{DateTime, Datelike, Local, TimeZone};

pub fn calendar_year<Tz: TimeZone>(now: &DateTime<Tz>) -> i32 {
    now.year()
}

pub fn current_year() -> i32 {
    calendar_year(&Local::now())
}
