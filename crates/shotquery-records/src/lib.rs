//! Record-store query assembly for the shot browser.
//!
//! Models the channel metadata served by the `/channels` endpoint and builds
//! the sorted, paginated, and filtered query parameters the record API client
//! appends to `/records` requests. Issuing the HTTP requests, caching, and
//! retry behavior belong to the client collaborator, not this crate.

pub mod channels;
pub mod query;
pub mod search;

pub use channels::{
    all_channels, filter_tokens, static_channels, suggest_channel, ChannelDataType,
    ChannelMetadata, ChannelsResponse,
};
pub use query::{Pagination, RecordQuery, SortOrder};
pub use search::DateRange;
