//! Region table
//!
//! One fixed entry per supported region. CN runs on distinct hosts
//! (`gateway.battlenet.com.cn` plus `.battle.net.cn` OAuth hosts); all
//! other regions share the global `oauth.battle.net` endpoints.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Supported Battle.net regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Us,
    Eu,
    Kr,
    Tw,
    Cn,
    Sea,
}

/// Per-region host configuration.
#[derive(Debug)]
pub struct RegionConfig {
    /// Base host for game-data and profile resources.
    pub urlbase: &'static str,
    pub authorization_endpoint: &'static str,
    pub token_endpoint: &'static str,
    /// Host for the `account` resource (`/oauth/userinfo`).
    pub account_endpoint: &'static str,
}

const GLOBAL_AUTHORIZE: &str = "https://oauth.battle.net/authorize";
const GLOBAL_TOKEN: &str = "https://oauth.battle.net/token";
const GLOBAL_ACCOUNT: &str = "https://oauth.battle.net";

impl Region {
    /// Upper-case region code as it appears in vendor documentation.
    pub fn code(&self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Eu => "EU",
            Region::Kr => "KR",
            Region::Tw => "TW",
            Region::Cn => "CN",
            Region::Sea => "SEA",
        }
    }

    /// Lower-case code used in the `namespace=<tag>-<region>` parameter.
    pub fn namespace_suffix(&self) -> String {
        self.code().to_lowercase()
    }

    pub fn config(&self) -> &'static RegionConfig {
        match self {
            Region::Us => &RegionConfig {
                urlbase: "https://us.api.blizzard.com",
                authorization_endpoint: GLOBAL_AUTHORIZE,
                token_endpoint: GLOBAL_TOKEN,
                account_endpoint: GLOBAL_ACCOUNT,
            },
            Region::Eu => &RegionConfig {
                urlbase: "https://eu.api.blizzard.com",
                authorization_endpoint: GLOBAL_AUTHORIZE,
                token_endpoint: GLOBAL_TOKEN,
                account_endpoint: GLOBAL_ACCOUNT,
            },
            Region::Kr => &RegionConfig {
                urlbase: "https://kr.api.blizzard.com",
                authorization_endpoint: GLOBAL_AUTHORIZE,
                token_endpoint: GLOBAL_TOKEN,
                account_endpoint: GLOBAL_ACCOUNT,
            },
            Region::Tw => &RegionConfig {
                urlbase: "https://tw.api.blizzard.com",
                authorization_endpoint: GLOBAL_AUTHORIZE,
                token_endpoint: GLOBAL_TOKEN,
                account_endpoint: GLOBAL_ACCOUNT,
            },
            Region::Cn => &RegionConfig {
                urlbase: "https://gateway.battlenet.com.cn",
                authorization_endpoint: "https://oauth.battle.net.cn/authorize",
                token_endpoint: "https://oauth.battle.net.cn/token",
                account_endpoint: "https://oauth.battlenet.com.cn",
            },
            Region::Sea => &RegionConfig {
                urlbase: "https://sea.api.blizzard.com",
                authorization_endpoint: GLOBAL_AUTHORIZE,
                token_endpoint: GLOBAL_TOKEN,
                account_endpoint: GLOBAL_ACCOUNT,
            },
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "US" => Ok(Region::Us),
            "EU" => Ok(Region::Eu),
            "KR" => Ok(Region::Kr),
            "TW" => Ok(Region::Tw),
            "CN" => Ok(Region::Cn),
            "SEA" => Ok(Region::Sea),
            _ => Err(Error::UnknownRegion(s.to_string())),
        }
    }
}
