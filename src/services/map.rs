use serde_json::Value;
use std::fmt::Display;

use super::client::TruckyClient;
use crate::utils::join_ids;

impl TruckyClient {
    /// ETS2 map points of interest.
    pub async fn pois(&self) -> Option<Value> {
        self.get("/v2/map/pois").await
    }

    pub async fn is_online(&self, player_id: impl Display) -> Option<Value> {
        self.get(&format!("/v2/map/online?playerID={}", player_id))
            .await
    }

    /// Like `is_online`, with the map server and computed location filled in.
    pub async fn is_online_improved(&self, player_id: impl Display) -> Option<Value> {
        self.get(&format!("/v3/map/online?playerID={}", player_id))
            .await
    }

    pub async fn online_list<T: Display>(&self, ids: &[T]) -> Option<Value> {
        self.get(&format!("/v2/map/onlineList?ids={}", join_ids(ids)))
            .await
    }

    pub async fn ets2_cities(&self) -> Option<Value> {
        self.get("/v2/map/cities/ets2").await
    }

    pub async fn ats_cities(&self) -> Option<Value> {
        self.get("/v2/map/cities/ats").await
    }

    pub async fn cities_all(&self) -> Option<Value> {
        self.get("/v2/map/cities/all").await
    }

    pub async fn map_servers(&self) -> Option<Value> {
        self.get("/v2/map/servers").await
    }

    pub async fn search_player_on_map(&self, query: impl Display) -> Option<Value> {
        self.get(&format!("/v2/map/searchPlayer?query={}", query))
            .await
    }
}
