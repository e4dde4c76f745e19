//! Fixed-window rate limiting for outbound API calls.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct WindowEntry {
    count: u32,
    reset_at: Instant,
}

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitStatus {
    pub allowed: bool,
    pub remaining: u32,
    pub reset_at: Instant,
}

impl RateLimitStatus {
    /// Seconds until the current window resets, rounded up to at least 1.
    pub fn seconds_until_reset(&self) -> u64 {
        self.reset_at
            .saturating_duration_since(Instant::now())
            .as_secs()
            .max(1)
    }
}

/// Per-key fixed-window limiter: the first hit on a key opens a window, and
/// once `limit` hits land inside it, further hits are denied until it resets.
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    entries: Mutex<HashMap<String, WindowEntry>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Record a hit for `key` and report whether it is allowed.
    pub fn check(&self, key: &str) -> RateLimitStatus {
        let mut entries = self.entries.lock();
        let now = Instant::now();

        if let Some(entry) = entries.get_mut(key) {
            if now <= entry.reset_at {
                if entry.count >= self.limit {
                    return RateLimitStatus {
                        allowed: false,
                        remaining: 0,
                        reset_at: entry.reset_at,
                    };
                }
                entry.count += 1;
                return RateLimitStatus {
                    allowed: true,
                    remaining: self.limit - entry.count,
                    reset_at: entry.reset_at,
                };
            }
        }

        // Absent or expired: open a fresh window with this hit counted.
        let reset_at = now + self.window;
        entries.insert(key.to_string(), WindowEntry { count: 1, reset_at });
        RateLimitStatus {
            allowed: true,
            remaining: self.limit.saturating_sub(1),
            reset_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        assert_eq!(limiter.check("k").remaining, 2);
        assert_eq!(limiter.check("k").remaining, 1);
        assert_eq!(limiter.check("k").remaining, 0);
        let denied = limiter.check("k");
        assert!(!denied.allowed);
        assert_eq!(denied.remaining, 0);
    }

    #[test]
    fn test_keys_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        assert!(limiter.check("a").allowed);
        assert!(!limiter.check("a").allowed);
        assert!(limiter.check("b").allowed);
    }

    #[test]
    fn test_window_reset_reopens() {
        let limiter = RateLimiter::new(1, Duration::ZERO);
        assert!(limiter.check("k").allowed);
        std::thread::sleep(Duration::from_millis(5));
        assert!(limiter.check("k").allowed);
    }

    #[test]
    fn test_seconds_until_reset_floor() {
        let limiter = RateLimiter::new(1, Duration::from_millis(10));
        let status = limiter.check("k");
        assert!(status.seconds_until_reset() >= 1);
    }
}
