//! Grid movement and the hand-off into combat.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::env::{GameEnv, OracleError, RandomSource, SeededRolls};
use crate::state::{CombatState, DungeonState, EntityId, GamePhase, Monster, Position, Tile};

use super::{ExecuteError, ExplorationOutcome, GameEngine, Step, Turn};

/// Treasure purse: `floor(random() * 50) + 20`.
const TREASURE_GOLD_BASE: u64 = 20;
const TREASURE_GOLD_SPREAD: f64 = 50.0;

impl GameEngine<'_> {
    /// Rotates the party a quarter turn in place.
    pub fn turn(&mut self, turn: Turn) -> Result<ExplorationOutcome, ExecuteError> {
        self.require_phase(GamePhase::Exploring)?;

        let dungeon = self.dungeon_mut()?;
        dungeon.facing = match turn {
            Turn::Left => dungeon.facing.left(),
            Turn::Right => dungeon.facing.right(),
        };
        let facing = dungeon.facing;

        self.advance_nonce();
        Ok(ExplorationOutcome::Turned { facing })
    }

    /// Moves one tile forward or back and resolves the tile entered.
    ///
    /// Walls and the map edge block the move without consuming the nonce.
    pub fn step(&mut self, env: GameEnv<'_>, step: Step) -> Result<ExplorationOutcome, ExecuteError> {
        self.require_phase(GamePhase::Exploring)?;

        let dungeon = self.state.dungeon.as_ref().ok_or(ExecuteError::NotInDungeon)?;
        let direction = match step {
            Step::Forward => dungeon.facing,
            Step::Back => dungeon.facing.opposite(),
        };
        let target = dungeon.position.offset(direction.delta());

        let Some(tile) = dungeon.grid.tile(target).filter(|tile| tile.is_passable()) else {
            return Ok(ExplorationOutcome::Blocked {
                position: dungeon.position,
                facing: dungeon.facing,
            });
        };

        let outcome = match tile {
            Tile::Encounter => self.start_encounter(env, target)?,
            Tile::Treasure => self.collect_treasure(env, target)?,
            Tile::Stairs => self.descend(env)?,
            Tile::Floor | Tile::Wall => {
                self.dungeon_mut()?.position = target;
                ExplorationOutcome::Moved { position: target }
            }
        };

        self.advance_nonce();
        Ok(outcome)
    }

    /// Spawns `floor(random() * 3) + 1` monsters for the current depth and
    /// switches to combat.
    ///
    /// Templates are drawn uniformly from the first
    /// `min(len - 1, floor(depth / 2) + 1) + 1` entries, so deeper levels
    /// unlock stronger monsters.
    fn start_encounter(
        &mut self,
        env: GameEnv<'_>,
        position: Position,
    ) -> Result<ExplorationOutcome, ExecuteError> {
        let templates = env.tables()?.monsters();
        if templates.is_empty() {
            return Err(OracleError::NoMonsters.into());
        }
        let depth = self.dungeon_mut()?.depth;

        let mut rolls = SeededRolls::new(
            env.rng()?,
            self.state.game_seed,
            self.state.nonce,
            EntityId::SYSTEM.0,
        );
        let count = rolls.pick_index(GameConfig::MAX_MONSTERS) + 1;
        let max_index = (templates.len() - 1).min(depth as usize / 2 + 1);

        let picks: Vec<usize> = (0..count).map(|_| rolls.pick_index(max_index + 1)).collect();
        if let Some(&index) = picks.iter().find(|&&index| templates[index].hp == 0) {
            return Err(OracleError::LifelessMonster(index).into());
        }

        let mut monsters = ArrayVec::<Monster, { GameConfig::MAX_MONSTERS }>::new();
        for index in picks {
            let id = self.state.allocate_entity_id();
            monsters.push(Monster::spawn(id, &templates[index]));
        }

        let spawned = monsters.to_vec();
        self.dungeon_mut()?.position = position;
        self.state.combat = Some(CombatState::new(monsters));
        self.state.phase = GamePhase::Combat;

        Ok(ExplorationOutcome::EncounterStarted {
            position,
            monsters: spawned,
        })
    }

    /// Splits a rolled purse between living members and empties the chest.
    fn collect_treasure(
        &mut self,
        env: GameEnv<'_>,
        position: Position,
    ) -> Result<ExplorationOutcome, ExecuteError> {
        let mut rolls = SeededRolls::new(
            env.rng()?,
            self.state.game_seed,
            self.state.nonce,
            EntityId::SYSTEM.0,
        );
        let gold = (rolls.next_unit() * TREASURE_GOLD_SPREAD).floor() as u64 + TREASURE_GOLD_BASE;

        let dungeon = self.dungeon_mut()?;
        dungeon.position = position;
        dungeon.grid.set_tile(position, Tile::Floor);
        let share = self.state.party.share_gold(gold);

        Ok(ExplorationOutcome::TreasureFound {
            position,
            gold,
            share,
        })
    }

    /// Enters the next level at its origin.
    fn descend(&mut self, env: GameEnv<'_>) -> Result<ExplorationOutcome, ExecuteError> {
        let depth = self.dungeon_mut()?.depth + 1;
        let grid = env.map()?.layout(depth).ok_or(OracleError::NoLayout(depth))?;
        self.state.dungeon = Some(DungeonState::enter(depth, grid));

        Ok(ExplorationOutcome::Descended { depth })
    }
}
