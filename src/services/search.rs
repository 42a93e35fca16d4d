use serde_json::Value;

use super::client::TruckyClient;
use crate::models::search::{PlayerSearchResult, SearchType};
use crate::utils::{api_succeeded, field, is_truthy, query_value};

impl TruckyClient {
    /// Looks a player up by Steam vanity name, Steam ID or TruckersMP ID.
    ///
    /// Sub-calls run one after another. A failed sub-call leaves its part of the
    /// result empty; nothing is reported beyond `found`.
    pub async fn search_player(&self, term: &str, search_type: SearchType) -> PlayerSearchResult {
        let mut result = PlayerSearchResult::default();

        match search_type {
            SearchType::SteamUsername => self.search_by_vanity_name(term, &mut result).await,
            SearchType::SteamId | SearchType::TruckersMpId => {
                self.search_by_id(term, &mut result).await
            }
        }

        tracing::debug!(
            "Player search {} ({}): found={}",
            term,
            search_type,
            result.found
        );
        result
    }

    /// Same as `search_player` with the type given as its raw tag.
    /// An unrecognised tag yields a not-found result without touching the API.
    pub async fn search_player_with_tag(&self, term: &str, tag: &str) -> PlayerSearchResult {
        match tag.parse::<SearchType>() {
            Ok(search_type) => self.search_player(term, search_type).await,
            Err(e) => {
                tracing::debug!("Player search skipped: {}", e);
                PlayerSearchResult::default()
            }
        }
    }

    async fn search_by_vanity_name(&self, username: &str, result: &mut PlayerSearchResult) {
        let Some(steam) = self.resolve_vanity_url(username).await else {
            return;
        };
        if !is_truthy(&steam["found"]) {
            return;
        }
        result.steam_profile_info = field(&steam, "playerInfo");

        let Some(steam_id) = query_value(&steam["steamID"]) else {
            return;
        };
        let Some(profile) = self.player(steam_id).await.filter(api_succeeded) else {
            return;
        };

        result.found = true;
        result.truckers_mp_profile_info = field(&profile, "response");
        result.bans = self.bans_of(result.truckers_mp_profile_info.as_ref()).await;
    }

    // Marks the player found as soon as the profile lookup succeeds, whatever
    // happens to the Steam summary and bans afterwards.
    async fn search_by_id(&self, id: &str, result: &mut PlayerSearchResult) {
        let Some(profile) = self.player(id).await.filter(api_succeeded) else {
            return;
        };
        let profile = field(&profile, "response");

        if let Some(steam_id) = profile.as_ref().and_then(|p| query_value(&p["steamID64"])) {
            result.steam_profile_info = self
                .get_player_summaries(steam_id)
                .await
                .and_then(|summary| field(&summary, "playerInfo"));
        }

        result.bans = self.bans_of(profile.as_ref()).await;
        result.truckers_mp_profile_info = profile;
        result.found = true;
    }

    async fn bans_of(&self, profile: Option<&Value>) -> Value {
        match profile.and_then(|p| query_value(&p["id"])) {
            Some(id) => self.bans(id).await.unwrap_or(Value::Null),
            None => Value::Array(Vec::new()),
        }
    }
}
