//! Cached element types and the admin API's request/response models.

pub mod documents;
pub mod orders;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use documents::{DocumentEntry, DocumentFolder};
pub use orders::{OrderKind, OrderSummary, RecentPurchasedItem};
pub use requests::SetItemsRequest;
pub use responses::{
    GetItemsResponse, HealthResponse, KindStatsResponse, MessageResponse, StatsResponse,
};
