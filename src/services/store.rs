use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::models::donation::Donation;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("data store rejected the write")]
    WriteFailed,
}

/// Seam to the hosted relational store. Row-level inserts and reads only;
/// the breakdown is computed before anything reaches this trait.
#[async_trait]
pub trait DonationStore: Send + Sync {
    async fn insert(&self, donation: Donation) -> Result<(), StoreError>;
    async fn get(&self, id: Uuid) -> Option<Donation>;
    async fn all(&self) -> Vec<Donation>;
}

/// In-memory stand-in for the hosted database. `failure_rate` injects write
/// failures so the persistence-retry path stays exercisable.
pub struct InMemoryStore {
    rows: DashMap<Uuid, Donation>,
    failure_rate: f64,
}

impl InMemoryStore {
    pub fn new(failure_rate: f64) -> Self {
        Self {
            rows: DashMap::new(),
            failure_rate,
        }
    }
}

#[async_trait]
impl DonationStore for InMemoryStore {
    async fn insert(&self, donation: Donation) -> Result<(), StoreError> {
        if self.failure_rate > 0.0 && rand::thread_rng().gen::<f64>() < self.failure_rate {
            return Err(StoreError::WriteFailed);
        }
        self.rows.insert(donation.id, donation);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Option<Donation> {
        self.rows.get(&id).map(|entry| entry.clone())
    }

    async fn all(&self) -> Vec<Donation> {
        self.rows.iter().map(|entry| entry.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::donation::{DonationBreakdown, DonationRequest};

    fn sample_donation() -> Donation {
        let request = DonationRequest {
            base_amount: 10.0,
            payer_id: Uuid::new_v4(),
            recipient_artist_id: Uuid::new_v4(),
            song_id: None,
            message: None,
        };
        let breakdown = DonationBreakdown {
            base_amount: 10.0,
            processing_fee: 0.59,
            total_charged: 10.59,
            artist_payout: 8.0,
            platform_fee: 2.0,
        };
        Donation::from_breakdown(&request, &breakdown, "tx-1".to_string())
    }

    #[tokio::test]
    async fn insert_then_get() {
        let store = InMemoryStore::new(0.0);
        let donation = sample_donation();
        let id = donation.id;
        store.insert(donation).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().total_charged_cents, 1059);
        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn full_failure_rate_rejects_every_write() {
        let store = InMemoryStore::new(1.0);
        assert!(store.insert(sample_donation()).await.is_err());
        assert!(store.all().await.is_empty());
    }
}
