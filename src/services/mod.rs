pub mod atomic_metrics;
pub mod donation_service;
pub mod gateway;
pub mod sessions;
pub mod store;

pub use donation_service::{DonationError, DonationService, DonationSummary, SummaryFilters};
pub use gateway::{GatewayError, MockGateway, PaymentGateway};
pub use sessions::SessionService;
pub use store::{DonationStore, InMemoryStore, StoreError};
