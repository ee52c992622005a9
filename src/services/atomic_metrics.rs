use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::donation::Donation;

pub struct AtomicMetrics {
    submitted: AtomicU64,
    completed: AtomicU64,
    gateway_declined: AtomicU64,
    persist_failed: AtomicU64,
    persist_retried: AtomicU64,
    donated_cents: AtomicU64,
    artist_payout_cents: AtomicU64,
    platform_fee_cents: AtomicU64,
}

impl AtomicMetrics {
    pub fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            completed: AtomicU64::new(0),
            gateway_declined: AtomicU64::new(0),
            persist_failed: AtomicU64::new(0),
            persist_retried: AtomicU64::new(0),
            donated_cents: AtomicU64::new(0),
            artist_payout_cents: AtomicU64::new(0),
            platform_fee_cents: AtomicU64::new(0),
        }
    }

    pub fn increment_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_gateway_declined(&self) {
        self.gateway_declined.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_persist_failed(&self) {
        self.persist_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_persist_retried(&self) {
        self.persist_retried.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_completed(&self, donation: &Donation) {
        self.completed.fetch_add(1, Ordering::Relaxed);
        self.donated_cents
            .fetch_add(donation.base_amount_cents, Ordering::Relaxed);
        self.artist_payout_cents
            .fetch_add(donation.artist_payout_cents, Ordering::Relaxed);
        self.platform_fee_cents
            .fetch_add(donation.platform_fee_cents, Ordering::Relaxed);
    }

    pub fn get_submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    pub fn get_completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    pub fn get_gateway_declined(&self) -> u64 {
        self.gateway_declined.load(Ordering::Relaxed)
    }

    pub fn get_persist_failed(&self) -> u64 {
        self.persist_failed.load(Ordering::Relaxed)
    }

    pub fn get_persist_retried(&self) -> u64 {
        self.persist_retried.load(Ordering::Relaxed)
    }

    pub fn get_donated_cents(&self) -> u64 {
        self.donated_cents.load(Ordering::Relaxed)
    }

    pub fn get_artist_payout_cents(&self) -> u64 {
        self.artist_payout_cents.load(Ordering::Relaxed)
    }

    pub fn get_platform_fee_cents(&self) -> u64 {
        self.platform_fee_cents.load(Ordering::Relaxed)
    }
}

impl Default for AtomicMetrics {
    fn default() -> Self {
        Self::new()
    }
}
