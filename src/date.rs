use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::Error;

type FormatDescription<'a> = &'a [BorrowedFormatItem<'a>];

const YMD_DOT_FORMAT: FormatDescription = format_description!("[year].[month].[day]");
const YMD_MINUS_FORMAT: FormatDescription = format_description!("[year]-[month]-[day]");

/// Parse a calendar date written as `YYYY.MM.DD`, `YYYY-MM-DD` or a RFC 3339 timestamp, in that
/// order. The whole input has to be consumed and the time part of a timestamp is dropped.
pub fn parse(input: &str) -> Result<Date, Error> {
    Date::parse(input, YMD_DOT_FORMAT)
        .or_else(|_| Date::parse(input, YMD_MINUS_FORMAT))
        .or_else(|_| OffsetDateTime::parse(input, &Rfc3339).map(OffsetDateTime::date))
        .map_err(|_| Error::InvalidDate(input.to_owned()))
}
