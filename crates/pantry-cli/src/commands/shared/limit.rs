/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> u32 {
    global.filter(|limit| *limit > 0).unwrap_or(configured)
}

#[cfg(test)]
mod tests {
    use super::effective_limit;

    #[test]
    fn flag_takes_precedence() {
        assert_eq!(effective_limit(Some(5), 20), 5);
    }

    #[test]
    fn configured_default_used_when_flag_missing() {
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn zero_flag_falls_back() {
        assert_eq!(effective_limit(Some(0), 20), 20);
    }
}
