use std::borrow::Cow;

use time::Date;

use crate::pagination::Pagination;

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug)]
pub struct Filter<'a> {
    pub id: Option<i64>,
    pub group_name: Option<Cow<'a, str>>,
    pub song_name: Option<Cow<'a, str>>,
    pub text: Option<Cow<'a, str>>,
    pub release_date: Option<Date>,
    pub pagination: Pagination,
}

/// `ILIKE` pattern matching `value` anywhere, with the pattern metacharacters of `value` escaped.
pub fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
