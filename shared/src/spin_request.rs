/// Token value meaning "no spin pending".
pub const SPIN_REQUEST_BASELINE: u64 = 0;

/// Lets anything ask for a spin without holding a reference to the wheel.
///
/// A requester writes a fresh token; the wheel consumes it, which puts the
/// token back to the baseline. Each move away from the baseline is exactly one
/// request, no matter how many times the wheel looks at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpinRequestChannel {
    token: u64,
    last_issued: u64,
}

impl SpinRequestChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a new token based on `now_ms`, bumped if the clock has not moved
    /// since the last request.
    pub fn request(&mut self, now_ms: u64) -> u64 {
        let token = now_ms.max(self.last_issued + 1);
        self.token = token;
        self.last_issued = token;
        token
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_pending(&self) -> bool {
        self.token != SPIN_REQUEST_BASELINE
    }

    pub fn consume(&mut self) -> Option<u64> {
        if !self.is_pending() {
            return None;
        }
        Some(std::mem::replace(&mut self.token, SPIN_REQUEST_BASELINE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_is_consumed_once() {
        let mut channel = SpinRequestChannel::new();
        assert_eq!(channel.consume(), None);

        let token = channel.request(1_700_000_000_000);
        assert!(channel.is_pending());
        assert_eq!(channel.consume(), Some(token));
        assert_eq!(channel.consume(), None);
        assert_eq!(channel.token(), SPIN_REQUEST_BASELINE);
    }

    #[test]
    fn test_tokens_increase_within_same_millisecond() {
        let mut channel = SpinRequestChannel::new();
        let first = channel.request(500);
        let second = channel.request(500);
        let third = channel.request(0);
        assert!(second > first);
        assert!(third > second);
        assert_ne!(third, SPIN_REQUEST_BASELINE);
    }
}
