//! Player reference data.

use serde::{Deserialize, Serialize};
use url::Url;

use super::PlayerId;

/// Immutable player identity, owned by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Steam id
    pub id: PlayerId,

    /// Display name
    pub name: String,

    /// Avatar image URL
    pub avatar_url: Url,

    /// Steam profile URL
    pub profile_url: Url,
}

impl PlayerRecord {
    pub fn new(id: PlayerId, name: String, avatar_url: Url, profile_url: Url) -> Self {
        Self {
            id,
            name,
            avatar_url,
            profile_url,
        }
    }
}
