use std::time::Duration;

use anyhow::{Result, bail};
use tokio::{sync::Mutex, time::Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

/// Token bucket shared by every outbound call to the payment backend.
///
/// Constructed once by the caller and handed to clients by `Arc`.
pub struct RequestThrottle {
    capacity: f64,
    refill_per_sec: f64,
    bucket: Mutex<Bucket>,
}

impl RequestThrottle {
    pub fn new(capacity: u32, refill_per_sec: f64) -> Result<Self> {
        if capacity == 0 {
            bail!("throttle capacity must be positive");
        }
        if !refill_per_sec.is_finite() || refill_per_sec <= 0.0 {
            bail!("throttle refill rate must be positive, got {refill_per_sec}");
        }

        let capacity = f64::from(capacity);
        Ok(Self {
            capacity,
            refill_per_sec,
            bucket: Mutex::new(Bucket {
                tokens: capacity,
                last_refill: Instant::now(),
            }),
        })
    }

    pub async fn try_acquire(&self) -> bool {
        self.take_or_wait().await.is_none()
    }

    /// Waits until a token is available, then takes it.
    pub async fn acquire(&self) {
        while let Some(wait) = self.take_or_wait().await {
            debug!(wait_ms = wait.as_millis() as u64, "throttle: waiting for token");
            tokio::time::sleep(wait).await;
        }
    }

    /// Takes a token, or returns how long until one is available.
    async fn take_or_wait(&self) -> Option<Duration> {
        let now = Instant::now();
        let mut bucket = self.bucket.lock().await;

        let elapsed = now.duration_since(bucket.last_refill).as_secs_f64();
        bucket.last_refill = now;
        bucket.tokens = (bucket.tokens + elapsed * self.refill_per_sec).min(self.capacity);

        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            None
        } else {
            Some(Duration::from_secs_f64(
                (1.0 - bucket.tokens) / self.refill_per_sec,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_configuration() {
        assert!(RequestThrottle::new(0, 1.0).is_err());
        assert!(RequestThrottle::new(1, 0.0).is_err());
        assert!(RequestThrottle::new(1, f64::NAN).is_err());
    }

    #[tokio::test]
    async fn allows_burst_up_to_capacity() {
        let throttle = RequestThrottle::new(2, 0.001).unwrap();

        assert!(throttle.try_acquire().await);
        assert!(throttle.try_acquire().await);
        assert!(!throttle.try_acquire().await);
    }

    #[tokio::test]
    async fn acquire_waits_for_refill() {
        let throttle = RequestThrottle::new(1, 50.0).unwrap();
        throttle.acquire().await;

        let started = Instant::now();
        throttle.acquire().await;

        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
