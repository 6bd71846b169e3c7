//! Per-client request quotas.
//!
//! Every route shares an hourly and a daily allowance keyed by the peer IP.
//! Counters live in memory and reset with the process.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::time::Duration;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

pub struct ClientRateLimiter {
    per_hour: NonZeroU32,
    per_day: NonZeroU32,
    hourly: DefaultKeyedRateLimiter<IpAddr>,
    daily: DefaultKeyedRateLimiter<IpAddr>,
}

impl ClientRateLimiter {
    pub fn new(per_hour: NonZeroU32, per_day: NonZeroU32) -> Self {
        Self {
            per_hour,
            per_day,
            hourly: RateLimiter::keyed(quota(per_hour, HOUR)),
            daily: RateLimiter::keyed(quota(per_day, DAY)),
        }
    }

    /// Takes one request from `client`'s allowances. On refusal, returns the
    /// exhausted limit as text, e.g. `100 per 1 hour`.
    pub fn check(&self, client: IpAddr) -> Result<(), String> {
        if self.hourly.check_key(&client).is_err() {
            return Err(format!("{} per 1 hour", self.per_hour));
        }
        if self.daily.check_key(&client).is_err() {
            return Err(format!("{} per 1 day", self.per_day));
        }
        Ok(())
    }

    /// Drops state for clients whose allowances have fully refilled.
    pub fn retain_recent(&self) {
        self.hourly.retain_recent();
        self.daily.retain_recent();
    }
}

/// `limit` requests up front, refilled evenly across `window`.
fn quota(limit: NonZeroU32, window: Duration) -> Quota {
    Quota::with_period(window / limit.get())
        .unwrap_or_else(|| Quota::per_second(limit))
        .allow_burst(limit)
}

/// The peer address set by `into_make_service_with_connect_info`. Requests
/// without one (in-process calls) share a single bucket.
fn client_ip(request: &Request) -> IpAddr {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Router middleware: rejects with 429 once a client exhausts either allowance.
pub async fn enforce_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = client_ip(&request);
    if let Err(limit) = state.rate_limiter.check(client) {
        warn!("Rate limit exceeded for {client}: {limit}");
        return Err(AppError::RateLimited(limit));
    }
    Ok(next.run(request).await)
}
