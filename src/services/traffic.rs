use serde_json::Value;
use std::fmt::Display;

use super::client::TruckyClient;

// Traffic data is sourced from traffic.krashnz.com. `game` is "ETS2" or "ATS".
impl TruckyClient {
    pub async fn traffic(&self, server: impl Display, game: impl Display) -> Option<Value> {
        self.get(&format!("/v2/traffic?server={}&game={}", server, game))
            .await
    }

    pub async fn top_traffic(&self, server: impl Display, game: impl Display) -> Option<Value> {
        self.get(&format!("/v2/traffic/top?server={}&game={}", server, game))
            .await
    }

    pub async fn traffic_servers(&self) -> Option<Value> {
        self.get("/v2/traffic/servers").await
    }
}
