use serde_json::Value;
use std::fmt::Display;

use super::client::TruckyClient;

impl TruckyClient {
    /// Resolves a Steam vanity name. The response carries `found`, `steamID` and `playerInfo`.
    pub async fn resolve_vanity_url(&self, username: impl Display) -> Option<Value> {
        self.get(&format!("/v2/steam/resolveVanityUrl?username={}", username))
            .await
    }

    pub async fn get_player_summaries(&self, steam_id: impl Display) -> Option<Value> {
        self.get(&format!("/v2/steam/getPlayerSummaries?steamid={}", steam_id))
            .await
    }

    pub async fn get_friends(&self, steam_id: impl Display) -> Option<Value> {
        self.get(&format!("/v2/steam/getFriendsData?steamid={}", steam_id))
            .await
    }
}
