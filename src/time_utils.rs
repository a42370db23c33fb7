use js_sys::Date;

/// Format calendar components as ISO `YYYY-MM-DD`.
pub fn format_ymd(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today's local date from the browser clock.
pub fn today_iso() -> String {
    let date = Date::new_0();
    format_ymd(
        date.get_full_year() as u32,
        date.get_month() as u32 + 1,
        date.get_date() as u32,
    )
}

/// First day of the current local month.
pub fn first_of_month_iso() -> String {
    let date = Date::new_0();
    format_ymd(date.get_full_year() as u32, date.get_month() as u32 + 1, 1)
}
