use crate::models::{ClubId, ClubParseError};
use dotenv::dotenv;
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const BIND_VAR: &str = "IRONSPEED_BIND";
pub const DEFAULT_CLUB_VAR: &str = "IRONSPEED_DEFAULT_CLUB";

const DEFAULT_BIND: &str = "0.0.0.0:3043";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IRONSPEED_BIND={value:?} is not a socket address")]
    InvalidBind {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("IRONSPEED_DEFAULT_CLUB is invalid")]
    InvalidDefaultClub(#[source] ClubParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    /// Club used when a request does not name one.
    pub default_club: ClubId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3043)),
            default_club: ClubId::Seven,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_value = get(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBind {
                value: bind_value.clone(),
                source,
            })?;

        let default_club = match get(DEFAULT_CLUB_VAR) {
            Some(value) => value.parse().map_err(ConfigError::InvalidDefaultClub)?,
            None => ClubId::Seven,
        };

        Ok(Self { bind, default_club })
    }
}
