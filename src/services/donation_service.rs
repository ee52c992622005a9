use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::donation::{
    ChargeRequest, Donation, DonationBreakdown, DonationRequest, DonationStatus,
};
use crate::pricing::fees::donation_breakdown;
use crate::services::atomic_metrics::AtomicMetrics;
use crate::services::gateway::{GatewayError, PaymentGateway};
use crate::services::store::{DonationStore, StoreError};
use crate::utils::money::dollars_to_cents;

#[derive(Debug, Error)]
pub enum DonationError {
    #[error("donation amount is below the minimum of {minimum_cents} cents")]
    AmountBelowMinimum { minimum_cents: u64 },
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("donation {id} was charged but not persisted")]
    Persistence {
        id: Uuid,
        #[source]
        source: StoreError,
    },
    #[error("no donation {0} awaiting persistence")]
    UnknownDonation(Uuid),
}

#[derive(Debug, Default, Deserialize)]
pub struct SummaryFilters {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct DonationSummary {
    pub count: u64,
    pub gross_cents: u64,
    pub processing_fee_cents: u64,
    pub artist_payout_cents: u64,
    pub platform_fee_cents: u64,
}

/// Orders the donation flow: compute the breakdown (synchronous), confirm the
/// charge with the gateway, then persist. A store failure parks the charged
/// donation so it can be persisted again later without recomputing or
/// re-charging.
pub struct DonationService {
    gateway: Arc<dyn PaymentGateway>,
    store: Arc<dyn DonationStore>,
    pending: DashMap<Uuid, Donation>,
    metrics: Arc<AtomicMetrics>,
    min_donation_cents: u64,
}

impl DonationService {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        store: Arc<dyn DonationStore>,
        min_donation_cents: u64,
    ) -> Self {
        Self {
            gateway,
            store,
            pending: DashMap::new(),
            metrics: Arc::new(AtomicMetrics::new()),
            min_donation_cents,
        }
    }

    /// Breakdown preview for the donation form. No side effects.
    pub fn quote(&self, base_amount: f64) -> DonationBreakdown {
        donation_breakdown(base_amount)
    }

    pub async fn donate(&self, request: DonationRequest) -> Result<Donation, DonationError> {
        self.metrics.increment_submitted();

        let base_cents = dollars_to_cents(request.base_amount);
        if base_cents < self.min_donation_cents {
            return Err(DonationError::AmountBelowMinimum {
                minimum_cents: self.min_donation_cents,
            });
        }

        let breakdown = donation_breakdown(request.base_amount);
        let charge = ChargeRequest {
            amount_cents: dollars_to_cents(breakdown.total_charged),
            payer_id: request.payer_id,
            recipient_id: request.recipient_artist_id,
            song_id: request.song_id,
        };

        let receipt = match self.gateway.charge(&charge).await {
            Ok(receipt) => receipt,
            Err(e) => {
                self.metrics.increment_gateway_declined();
                warn!("Charge declined for payer {}: {}", request.payer_id, e);
                return Err(e.into());
            }
        };

        info!(
            "Charge {} confirmed for payer {} ({} cents)",
            receipt.transaction_id, request.payer_id, charge.amount_cents
        );

        let donation = Donation::from_breakdown(&request, &breakdown, receipt.transaction_id);
        self.persist(donation).await
    }

    /// Re-attempts only the store write for a donation whose charge already
    /// went through. The breakdown is reused as computed; the gateway is not
    /// called again.
    pub async fn retry_persist(&self, id: Uuid) -> Result<Donation, DonationError> {
        let mut donation = self
            .pending
            .get(&id)
            .map(|entry| entry.clone())
            .ok_or(DonationError::UnknownDonation(id))?;
        donation.status = DonationStatus::Completed;

        let persisted = self.persist(donation).await?;
        self.metrics.increment_persist_retried();
        Ok(persisted)
    }

    async fn persist(&self, donation: Donation) -> Result<Donation, DonationError> {
        match self.store.insert(donation.clone()).await {
            Ok(()) => {
                self.pending.remove(&donation.id);
                self.metrics.record_completed(&donation);
                info!(
                    "Donation {} persisted: {} cents to artist {}",
                    donation.id, donation.artist_payout_cents, donation.recipient_artist_id
                );
                Ok(donation)
            }
            Err(e) => {
                let id = donation.id;
                let mut parked = donation;
                parked.status = DonationStatus::PendingPersist;
                self.pending.insert(id, parked);
                self.metrics.increment_persist_failed();
                error!("Donation {} charged but not persisted: {}", id, e);
                Err(DonationError::Persistence { id, source: e })
            }
        }
    }

    pub async fn get_donation(&self, id: Uuid) -> Option<Donation> {
        match self.store.get(id).await {
            Some(donation) => Some(donation),
            None => self.pending.get(&id).map(|entry| entry.clone()),
        }
    }

    pub async fn summary(&self, filters: SummaryFilters) -> DonationSummary {
        let mut summary = DonationSummary {
            count: 0,
            gross_cents: 0,
            processing_fee_cents: 0,
            artist_payout_cents: 0,
            platform_fee_cents: 0,
        };

        for donation in self.store.all().await {
            if let Some(from) = filters.from {
                if donation.processed_at < from {
                    continue;
                }
            }
            if let Some(to) = filters.to {
                if donation.processed_at > to {
                    continue;
                }
            }
            summary.count += 1;
            summary.gross_cents += donation.base_amount_cents;
            summary.processing_fee_cents += donation.processing_fee_cents;
            summary.artist_payout_cents += donation.artist_payout_cents;
            summary.platform_fee_cents += donation.platform_fee_cents;
        }

        summary
    }

    pub async fn gateway_health(&self) -> bool {
        self.gateway.health_check().await
    }

    pub async fn metrics(&self) -> serde_json::Value {
        serde_json::json!({
            "submitted": self.metrics.get_submitted(),
            "completed": self.metrics.get_completed(),
            "gateway_declined": self.metrics.get_gateway_declined(),
            "persist_failed": self.metrics.get_persist_failed(),
            "persist_retried": self.metrics.get_persist_retried(),
            "pending_persist": self.pending.len() as u64,
            "total_donated_cents": self.metrics.get_donated_cents(),
            "total_artist_payout_cents": self.metrics.get_artist_payout_cents(),
            "total_platform_fee_cents": self.metrics.get_platform_fee_cents(),
            "gateway_healthy": self.gateway.health_check().await,
        })
    }
}
