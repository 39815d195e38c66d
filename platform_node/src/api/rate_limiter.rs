//! Rate limiting for the platform API.
//!
//! Per-IP and global sliding windows. Checked by router middleware
//! before any handler runs; excess requests get a structured 429.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_ip_per_second: u32,
    pub per_ip_per_minute: u32,
    pub per_ip_per_hour: u32,
    pub global_per_second: u32,
    pub burst_allowance: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        RateLimitConfig {
            per_ip_per_second: 20,
            per_ip_per_minute: 600,
            per_ip_per_hour: 6000,
            global_per_second: 2000,
            burst_allowance: 20,
        }
    }
}

struct RateLimitEntry {
    count: u32,
    window_start: Instant,
    last_request: Instant,
}

impl RateLimitEntry {
    fn new() -> Self {
        let now = Instant::now();
        RateLimitEntry {
            count: 0,
            window_start: now,
            last_request: now,
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.window_start = Instant::now();
    }

    fn increment(&mut self) {
        self.count += 1;
        self.last_request = Instant::now();
    }
}

pub struct RateLimiter {
    config: RateLimitConfig,
    ip_limits: RwLock<HashMap<String, RateLimitEntry>>,
    global_counter: RwLock<RateLimitEntry>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        RateLimiter {
            config,
            ip_limits: RwLock::new(HashMap::new()),
            global_counter: RwLock::new(RateLimitEntry::new()),
        }
    }

    /// Check whether a request from `ip` should be allowed.
    pub fn check_rate_limit(&self, ip: &str) -> Result<(), RateLimitError> {
        self.check_global()?;
        self.check_ip_limit(ip)?;
        self.increment_counters(ip);
        Ok(())
    }

    fn check_global(&self) -> Result<(), RateLimitError> {
        let mut global = self.global_counter.write().unwrap();
        let now = Instant::now();

        if now.duration_since(global.window_start) > Duration::from_secs(1) {
            global.reset();
        }

        if global.count >= self.config.global_per_second {
            return Err(RateLimitError::GlobalLimit);
        }

        Ok(())
    }

    fn check_ip_limit(&self, ip: &str) -> Result<(), RateLimitError> {
        let mut ip_limits = self.ip_limits.write().unwrap();
        let entry = ip_limits
            .entry(ip.to_string())
            .or_insert_with(RateLimitEntry::new);

        let now = Instant::now();
        let elapsed = now.duration_since(entry.window_start);

        if elapsed < Duration::from_secs(1)
            && entry.count >= self.config.per_ip_per_second + self.config.burst_allowance
        {
            return Err(RateLimitError::IpPerSecond);
        }

        if elapsed < Duration::from_secs(60) && entry.count >= self.config.per_ip_per_minute {
            return Err(RateLimitError::IpPerMinute);
        }

        if elapsed < Duration::from_secs(3600) && entry.count >= self.config.per_ip_per_hour {
            return Err(RateLimitError::IpPerHour);
        }

        if elapsed > Duration::from_secs(3600) {
            entry.reset();
        }

        Ok(())
    }

    fn increment_counters(&self, ip: &str) {
        let mut global = self.global_counter.write().unwrap();
        global.increment();

        let mut ip_limits = self.ip_limits.write().unwrap();
        if let Some(entry) = ip_limits.get_mut(ip) {
            entry.increment();
        }
    }

    /// Drop entries idle for over an hour. Called periodically from a
    /// background task.
    pub fn cleanup_expired(&self) {
        let now = Instant::now();
        let mut ip_limits = self.ip_limits.write().unwrap();
        ip_limits
            .retain(|_, entry| now.duration_since(entry.last_request) < Duration::from_secs(3600));
    }

    #[cfg(test)]
    fn tracked_ips(&self) -> usize {
        self.ip_limits.read().unwrap().len()
    }
}

#[derive(Debug)]
pub enum RateLimitError {
    GlobalLimit,
    IpPerSecond,
    IpPerMinute,
    IpPerHour,
}

impl std::fmt::Display for RateLimitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateLimitError::GlobalLimit => write!(f, "Global rate limit exceeded"),
            RateLimitError::IpPerSecond => write!(f, "IP rate limit exceeded (per second)"),
            RateLimitError::IpPerMinute => write!(f, "IP rate limit exceeded (per minute)"),
            RateLimitError::IpPerHour => write!(f, "IP rate limit exceeded (per hour)"),
        }
    }
}

impl std::error::Error for RateLimitError {}
