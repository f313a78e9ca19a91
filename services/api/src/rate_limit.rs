//! Process-wide token-bucket rate limiting
//!
//! One bucket gates every inbound request. Refill is lazy: each take
//! computes the tokens earned since the last refill, capped at capacity,
//! then consumes one if available.

use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Mutex;
use std::time::Instant;

/// Token bucket shared by every inbound request.
///
/// Invariant: `0 <= tokens <= capacity` at every observation point. The
/// mutex serializes refill-then-consume, so tokens are never double-spent
/// under concurrent requests.
pub struct TokenBucket {
    capacity: u32,
    refill_rate: f64,
    state: Mutex<BucketState>,
}

struct BucketState {
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    pub fn new(capacity: u32, refill_rate: f64) -> Self {
        Self {
            capacity,
            refill_rate,
            state: Mutex::new(BucketState {
                tokens: capacity as f64,
                last_refill: Instant::now(),
            }),
        }
    }

    /// Consume one token if available.
    pub fn take_token(&self) -> bool {
        self.take_token_at(Instant::now())
    }

    fn take_token_at(&self, now: Instant) -> bool {
        let Ok(mut state) = self.state.lock() else {
            return false;
        };

        // Callers capture `now` before the lock, so instants can arrive out
        // of order; the refill clock never moves backwards.
        let elapsed = now.saturating_duration_since(state.last_refill).as_secs_f64();
        if elapsed > 0.0 {
            state.tokens = f64::min(
                self.capacity as f64,
                state.tokens + elapsed * self.refill_rate,
            );
            state.last_refill = now;
        }

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}

/// Middleware applied to every route: reject with 429 before any handler
/// logic runs when the bucket is empty.
pub async fn enforce(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if state.bucket.take_token() {
        Ok(next.run(request).await)
    } else {
        Err(AppError::RateLimited)
    }
}
