//! JSON summary printed when a run ends.
use serde::Serialize;

use game_core::{Character, ClassKey, GamePhase, GameState};

use crate::autopilot::RunStats;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub session_id: String,
    pub seed: u64,
    pub phase: GamePhase,
    pub depth: u32,
    pub stats: RunStats,
    pub events_journaled: usize,
    pub party: Vec<MemberSummary>,
}

#[derive(Debug, Serialize)]
pub struct MemberSummary {
    pub name: String,
    pub class: ClassKey,
    pub level: u32,
    pub xp: u64,
    pub hp: u32,
    pub max_hp: u32,
    pub gold: u64,
    pub alive: bool,
}

impl From<&Character> for MemberSummary {
    fn from(member: &Character) -> Self {
        Self {
            name: member.name.clone(),
            class: member.class,
            level: member.level,
            xp: member.xp,
            hp: member.hp.current,
            max_hp: member.hp.maximum,
            gold: member.gold,
            alive: member.is_alive(),
        }
    }
}

impl RunSummary {
    pub fn new(
        session_id: String,
        state: &GameState,
        stats: RunStats,
        events_journaled: usize,
    ) -> Self {
        Self {
            session_id,
            seed: state.game_seed,
            phase: state.phase,
            depth: state.dungeon.as_ref().map_or(0, |dungeon| dungeon.depth),
            stats,
            events_journaled,
            party: state.party.iter().map(MemberSummary::from).collect(),
        }
    }
}
