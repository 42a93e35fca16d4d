use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Steam vanity URL name.
    SteamUsername,
    SteamId,
    TruckersMpId,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::SteamUsername => "steamusername",
            SearchType::SteamId => "steamid",
            SearchType::TruckersMpId => "truckersmpid",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "steamusername" => Ok(SearchType::SteamUsername),
            "steamid" => Ok(SearchType::SteamId),
            "truckersmpid" => Ok(SearchType::TruckersMpId),
            other => anyhow::bail!("unknown search type: {}", other),
        }
    }
}

/// Outcome of a player search. Profile and ban payloads are passed through as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSearchResult {
    pub found: bool,
    #[serde(rename = "steamProfileInfo")]
    pub steam_profile_info: Option<Value>,
    #[serde(rename = "truckersMPProfileInfo")]
    pub truckers_mp_profile_info: Option<Value>,
    pub bans: Value,
}

impl Default for PlayerSearchResult {
    fn default() -> Self {
        Self {
            found: false,
            steam_profile_info: None,
            truckers_mp_profile_info: None,
            bans: Value::Array(Vec::new()),
        }
    }
}
