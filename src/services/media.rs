use serde_json::Value;

use super::client::TruckyClient;

impl TruckyClient {
    /// TruckersMP news, from the Steam RSS feed.
    pub async fn news(&self) -> Option<Value> {
        self.get("/v2/rss/truckersMP").await
    }

    pub async fn ets2_news(&self) -> Option<Value> {
        self.get("/v2/rss/ets2").await
    }

    pub async fn ats_news(&self) -> Option<Value> {
        self.get("/v2/rss/ats").await
    }

    /// Upcoming events and meetups from ets2.com and truckers.events.
    pub async fn events(&self) -> Option<Value> {
        self.get("/v2/events/upcoming").await
    }

    pub async fn wot_gallery_random(&self) -> Option<Value> {
        self.get("/v2/wot/gallery/random").await
    }

    pub async fn wot_gallery_editors_pick(&self) -> Option<Value> {
        self.get("/v2/wot/gallery/editorspick").await
    }

    pub async fn wot_gallery_best_rated(&self) -> Option<Value> {
        self.get("/v2/wot/gallery/bestrated").await
    }

    pub async fn wot_gallery_most_viewed(&self) -> Option<Value> {
        self.get("/v2/wot/gallery/mostviewed").await
    }

    pub async fn streams_twitch_ets2(&self) -> Option<Value> {
        self.get("/v2/streams/twitch/ets2").await
    }

    pub async fn streams_twitch_ats(&self) -> Option<Value> {
        self.get("/v2/streams/twitch/ats").await
    }

    pub async fn truckersfm_listeners(&self) -> Option<Value> {
        self.get("/v2/truckersfm/listeners").await
    }

    pub async fn truckersfm_shows(&self) -> Option<Value> {
        self.get("/v2/truckersfm/shows").await
    }

    pub async fn truckersfm_last_played(&self) -> Option<Value> {
        self.get("/v2/truckersfm/lastPlayed").await
    }
}
