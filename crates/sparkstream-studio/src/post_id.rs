use chrono::Utc;

/// Issues timestamp-based post ids (Unix milliseconds).
///
/// Ids are strictly increasing within one generator, so two saves in the
/// same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct PostIdGenerator {
    last: i64,
}

impl PostIdGenerator {
    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_ms: i64) -> String {
        let id = now_ms.max(self.last + 1);
        self.last = id;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_the_timestamp_when_it_advances() {
        let mut ids = PostIdGenerator::default();
        assert_eq!(ids.next_at(1_700_000_000_000), "1700000000000");
        assert_eq!(ids.next_at(1_700_000_000_500), "1700000000500");
    }

    #[test]
    fn same_millisecond_still_distinct() {
        let mut ids = PostIdGenerator::default();
        let a = ids.next_at(1_700_000_000_000);
        let b = ids.next_at(1_700_000_000_000);
        assert_ne!(a, b);
        assert_eq!(b, "1700000000001");
    }

    #[test]
    fn clock_going_backwards_does_not_repeat() {
        let mut ids = PostIdGenerator::default();
        let a = ids.next_at(2_000);
        let b = ids.next_at(1_000);
        assert_eq!(a, "2000");
        assert_eq!(b, "2001");
    }

    #[test]
    fn real_clock_ids_are_non_empty_and_distinct() {
        let mut ids = PostIdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}
