use serde_json::Value;
use std::fmt::Display;

use super::client::TruckyClient;

impl TruckyClient {
    pub async fn update_info(&self) -> Option<Value> {
        self.get("/v2/truckersmp/update_info").await
    }

    pub async fn servers(&self) -> Option<Value> {
        self.get("/v2/truckersmp/servers").await
    }

    pub async fn game_version(&self) -> Option<Value> {
        self.get("/v2/truckersmp/version").await
    }

    pub async fn game_time(&self) -> Option<Value> {
        self.get("/v2/truckersmp/time").await
    }

    pub async fn rules(&self) -> Option<Value> {
        self.get("/v2/truckersmp/rules").await
    }

    /// TruckersMP profile. Accepts either a TruckersMP ID or a Steam ID.
    pub async fn player(&self, id: impl Display) -> Option<Value> {
        self.get(&format!("/v2/truckersmp/player?playerID={}", id))
            .await
    }

    pub async fn bans(&self, id: impl Display) -> Option<Value> {
        self.get(&format!("/v2/truckersmp/bans?playerID={}", id))
            .await
    }

    pub async fn search_player_by_truckersmp_username(&self, query: impl Display) -> Option<Value> {
        self.get(&format!("/v2/truckersmp/searchPlayer?query={}", query))
            .await
    }

    /// TruckersMP player with online state and Steam profile merged in.
    pub async fn get_player_info_complete(&self, query: impl Display) -> Option<Value> {
        self.get(&format!("/v2/trucky/player?query={}", query))
            .await
    }
}
