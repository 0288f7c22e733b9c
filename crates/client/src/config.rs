//! Client configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use game_core::ClassKey;

/// Party used when `CRAWLER_PARTY` is unset.
const DEFAULT_PARTY: &str = "Aria:FIGHTER,Bram:PRIEST,Cyra:MAGE,Vex:THIEF";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    /// Fixed run seed; random when unset.
    pub seed: Option<u64>,
    pub party: Vec<(String, ClassKey)>,
    /// Autopilot command budget.
    pub max_steps: u32,
    pub session_id: Option<String>,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CRAWLER_DATA_DIR` - Content directory (default: `./data`)
    /// - `CRAWLER_SEED` - Run seed (default: random)
    /// - `CRAWLER_PARTY` - Roster as `Name:CLASS` pairs separated by commas
    /// - `CRAWLER_MAX_STEPS` - Autopilot command budget (default: 500)
    /// - `CRAWLER_SESSION_ID` - Log directory name (default: timestamp based)
    pub fn from_env() -> Result<Self> {
        let party = match env::var("CRAWLER_PARTY") {
            Ok(roster) => parse_party(&roster).context("invalid CRAWLER_PARTY")?,
            Err(_) => parse_party(DEFAULT_PARTY)?,
        };

        Ok(Self {
            data_dir: env::var("CRAWLER_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            seed: read_env("CRAWLER_SEED"),
            party,
            max_steps: read_env("CRAWLER_MAX_STEPS").unwrap_or(500),
            session_id: env::var("CRAWLER_SESSION_ID").ok(),
        })
    }
}

/// Parses `Name:CLASS` pairs, e.g. `Aria:FIGHTER,Bram:PRIEST`.
pub fn parse_party(roster: &str) -> Result<Vec<(String, ClassKey)>> {
    let members = roster
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, class) = entry
                .split_once(':')
                .ok_or_else(|| anyhow!("expected Name:CLASS, got '{}'", entry))?;
            let class = class
                .trim()
                .parse::<ClassKey>()
                .map_err(|_| anyhow!("unknown class '{}'", class.trim()))?;
            Ok((name.trim().to_owned(), class))
        })
        .collect::<Result<Vec<_>>>()?;

    if members.is_empty() {
        bail!("party roster is empty");
    }
    Ok(members)
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roster_pairs() {
        let party = parse_party("Aria:FIGHTER, Bram:priest").unwrap();
        assert_eq!(
            party,
            vec![
                ("Aria".to_owned(), ClassKey::Fighter),
                ("Bram".to_owned(), ClassKey::Priest),
            ]
        );
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(parse_party("Aria").is_err());
        assert!(parse_party("Aria:BARD").is_err());
        assert!(parse_party(" , ").is_err());
    }

    #[test]
    fn default_roster_parses() {
        assert_eq!(parse_party(DEFAULT_PARTY).unwrap().len(), 4);
    }
}
