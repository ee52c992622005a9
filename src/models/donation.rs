use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::money::dollars_to_cents;

/// A fan's donation attempt. Transient; one per submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationRequest {
    pub base_amount: f64,
    pub payer_id: Uuid,
    pub recipient_artist_id: Uuid,
    pub song_id: Option<Uuid>,
    pub message: Option<String>,
}

/// Itemized charge and payout split for one donation, in decimal dollars.
/// Recomputed on demand; each field is independently rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DonationBreakdown {
    pub base_amount: f64,
    pub processing_fee: f64,
    pub total_charged: f64,
    pub artist_payout: f64,
    pub platform_fee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DonationStatus {
    Completed,
    PendingPersist,
}

/// The persisted donation row. Amounts are cents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donation {
    pub id: Uuid,
    pub payer_id: Uuid,
    pub recipient_artist_id: Uuid,
    pub song_id: Option<Uuid>,
    pub message: Option<String>,
    pub base_amount_cents: u64,
    pub processing_fee_cents: u64,
    pub total_charged_cents: u64,
    pub artist_payout_cents: u64,
    pub platform_fee_cents: u64,
    pub transaction_id: String,
    pub status: DonationStatus,
    pub processed_at: DateTime<Utc>,
}

impl Donation {
    pub fn from_breakdown(
        request: &DonationRequest,
        breakdown: &DonationBreakdown,
        transaction_id: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            payer_id: request.payer_id,
            recipient_artist_id: request.recipient_artist_id,
            song_id: request.song_id,
            message: request.message.clone(),
            base_amount_cents: dollars_to_cents(breakdown.base_amount),
            processing_fee_cents: dollars_to_cents(breakdown.processing_fee),
            total_charged_cents: dollars_to_cents(breakdown.total_charged),
            artist_payout_cents: dollars_to_cents(breakdown.artist_payout),
            platform_fee_cents: dollars_to_cents(breakdown.platform_fee),
            transaction_id,
            status: DonationStatus::Completed,
            processed_at: Utc::now(),
        }
    }
}

// Payload sent to the payment gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    #[serde(rename = "amountCents")]
    pub amount_cents: u64,
    #[serde(rename = "payerId")]
    pub payer_id: Uuid,
    #[serde(rename = "recipientId")]
    pub recipient_id: Uuid,
    #[serde(rename = "songId")]
    pub song_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub transaction_id: String,
}

// Reply shape of the gateway's /donations/process endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub success: bool,
    #[serde(rename = "transactionId")]
    pub transaction_id: Option<String>,
    pub error: Option<String>,
}
