//! Channel metadata for shot records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use shotquery_filter_rs::Token;

/// Maximum Levenshtein distance to consider a name as a suggestion.
const MAX_SUGGESTION_DISTANCE: usize = 3;

/// Data shape of a channel's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelDataType {
    /// A single value per record.
    Scalar,
    /// A two-dimensional image per record.
    Image,
    /// A trace of (x, y) points per record.
    Waveform,
}

/// Metadata describing one channel.
///
/// On the `/channels` endpoint the system name is the map key rather than a
/// field, so it defaults to empty during deserialization and is filled in by
/// [`all_channels`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelMetadata {
    /// Machine name used in query conditions and sort keys.
    #[serde(default)]
    pub system_name: String,

    /// Human-readable display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The channel's data shape.
    #[serde(rename = "type")]
    pub channel_type: ChannelDataType,

    /// Location of the channel in the source hierarchy.
    pub path: String,

    /// Measurement units for scalar channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Significant figures used when displaying scalar values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
}

impl ChannelMetadata {
    /// Display label for dropdowns, falling back to the system name.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.system_name)
    }
}

/// Wire shape of the `/channels` endpoint: metadata keyed by system name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelsResponse {
    /// Channel metadata keyed by system name.
    pub channels: BTreeMap<String, ChannelMetadata>,
}

fn static_channel(system_name: &str, name: &str) -> ChannelMetadata {
    ChannelMetadata {
        system_name: system_name.to_string(),
        name: Some(name.to_string()),
        channel_type: ChannelDataType::Scalar,
        path: "/system".to_string(),
        units: None,
        description: None,
        precision: None,
    }
}

/// The metadata fields present in every record.
pub fn static_channels() -> Vec<ChannelMetadata> {
    vec![
        static_channel("timestamp", "Time"),
        static_channel("shotnum", "Shot Number"),
        static_channel("activeArea", "Active Area"),
        static_channel("activeExperiment", "Active Experiment"),
    ]
}

/// The full channel list: static channels first, then the endpoint's
/// channels with their system names filled in from the map keys.
pub fn all_channels(response: &ChannelsResponse) -> Vec<ChannelMetadata> {
    let mut channels = static_channels();
    for (system_name, entry) in &response.channels {
        let mut channel = entry.clone();
        channel.system_name = system_name.clone();
        channels.push(channel);
    }
    channels
}

/// Channel tokens offered as filter operands in the autocomplete.
///
/// The time channel is excluded: timestamp constraints come from the search
/// date range, not from user-composed filters.
pub fn filter_tokens(channels: &[ChannelMetadata]) -> Vec<Token> {
    channels
        .iter()
        .filter(|channel| channel.system_name != "timestamp")
        .map(|channel| match &channel.name {
            Some(name) => Token::labelled_channel(channel.system_name.as_str(), name.as_str()),
            None => Token::channel(channel.system_name.as_str()),
        })
        .collect()
}

/// Finds the channel closest to a name the user typed.
///
/// Matches case-insensitively against both system names and display names.
/// Returns the matching system name if the best edit distance is within the
/// threshold; exact matches need no suggestion and return `None`.
pub fn suggest_channel(query: &str, channels: &[ChannelMetadata]) -> Option<String> {
    let query_lower = query.to_lowercase();

    let (best_match, best_distance) = channels
        .iter()
        .flat_map(|channel| {
            let by_system = levenshtein(&query_lower, &channel.system_name.to_lowercase());
            let by_name = channel
                .name
                .as_ref()
                .map(|name| levenshtein(&query_lower, &name.to_lowercase()));
            std::iter::once((channel, by_system)).chain(by_name.map(|d| (channel, d)))
        })
        .min_by_key(|(_, distance)| *distance)?;

    if best_distance > 0 && best_distance <= MAX_SUGGESTION_DISTANCE {
        Some(best_match.system_name.clone())
    } else {
        None
    }
}
