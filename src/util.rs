use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

/// The exact wire/date-key format; daily caches are keyed on this string.
pub static DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn today() -> Date {
	time::OffsetDateTime::now_utc().date()
}

pub fn format_date(date: Date) -> String {
	date.format(DATE_FORMAT).unwrap_or_default()
}

pub fn parse_date(value: &str) -> Option<Date> {
	Date::parse(value, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dates_round_trip_through_the_key_format() {
		let date = parse_date("2024-03-05").unwrap();
		assert_eq!(format_date(date), "2024-03-05");
		// Single-digit months and days stay zero-padded.
		let padded = parse_date("2024-06-01").unwrap();
		assert_eq!(format_date(padded), "2024-06-01");
	}
}
