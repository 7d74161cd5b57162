//! Tunables shared by every cache created for an export session.

pub const DEFAULT_CANDIDATE_LIMIT: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MangleOptions {
    /// Upper bound on candidates tried for a single symbol before giving up.
    pub candidate_limit: usize,
}

impl MangleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = limit.max(1);
        self
    }
}

impl Default for MangleOptions {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_never_drops_to_zero() {
        let options = MangleOptions::new().with_candidate_limit(0);
        assert_eq!(
            options.candidate_limit, 1,
            "a zero limit would reject even the preferred name"
        );
    }

    #[test]
    fn default_limit_is_generous() {
        assert_eq!(MangleOptions::default().candidate_limit, DEFAULT_CANDIDATE_LIMIT);
    }
}
