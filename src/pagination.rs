#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Non-positive `page` falls back to the first page, non-positive `limit` to `default_limit`.
    pub fn new(page: i64, limit: i64, default_limit: i64) -> Self {
        Self {
            page: if page > 0 { page } else { 1 },
            limit: if limit > 0 { limit } else { default_limit },
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn window<I: Iterator>(self, iter: I) -> impl Iterator<Item = I::Item> {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        iter.skip(skip).take(take)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 10, 1, 10, 0)]
    #[case(3, 10, 3, 10, 20)]
    #[case(2, 3, 2, 3, 3)]
    #[case(0, 10, 1, 10, 0)]
    #[case(-4, 10, 1, 10, 0)]
    #[case(2, 0, 2, 10, 10)]
    #[case(2, -1, 2, 10, 10)]
    #[case(i64::MAX, 10, i64::MAX, 10, i64::MAX)]
    fn test_new(
        #[case] page: i64,
        #[case] limit: i64,
        #[case] expected_page: i64,
        #[case] expected_limit: i64,
        #[case] offset: i64,
    ) {
        let pagination = Pagination::new(page, limit, 10);
        assert_eq!(pagination, Pagination { page: expected_page, limit: expected_limit });
        assert_eq!(pagination.offset(), offset);
    }

    #[rstest]
    #[case(1, 2, &[0, 1])]
    #[case(2, 2, &[2, 3])]
    #[case(3, 2, &[4])]
    #[case(4, 2, &[])]
    #[case(9, 2, &[])]
    fn test_window(#[case] page: i64, #[case] limit: i64, #[case] expected: &[i32]) {
        let window: Vec<_> = Pagination::new(page, limit, 3).window(0..5).collect();
        assert_eq!(window, expected);
    }
}
