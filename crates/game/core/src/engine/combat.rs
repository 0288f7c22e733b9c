//! Combat session state machine.
//!
//! ```text
//! AwaitingPlayerAction → ActionResolving → (MonsterTurnResolving)*
//!                      → AwaitingPlayerAction | Concluded(Victory | Defeat)
//! ```
//!
//! A player action resolves completely inside one call: the action itself,
//! then either victory or the monsters' retaliation, then defeat detection.
//! Every transition is recorded as a [`CombatEvent::PhaseEntered`] so callers
//! can replay the sequence at their own pace.

use crate::combat::{
    ActionRejection, ResolvedAction, SessionOutcome, apply_critical_multiplier, roll_critical,
    roll_healing, roll_magic_damage, roll_monster_damage, roll_physical_damage,
};
use crate::env::{GameEnv, OracleError, RandomSource, RngOracle, SeededRolls, SpellEffect};
use crate::progression::level_up_fully;
use crate::state::{ActionSelection, CombatPhase, EntityId, GamePhase, Tile, Verdict};

use super::{ActionOutcome, ActionReport, CombatEvent, ExecuteError, GameEngine};

/// Victory purse: `floor(random() * 30) + 10`.
const VICTORY_GOLD_BASE: u64 = 10;
const VICTORY_GOLD_SPREAD: f64 = 30.0;

impl GameEngine<'_> {
    /// Physical attack by a living party member on a living monster.
    ///
    /// Rolls the critical first, then the damage. Declined without any
    /// mutation when either side is missing or already down.
    pub fn attack(
        &mut self,
        env: GameEnv<'_>,
        attacker: EntityId,
        target: EntityId,
    ) -> Result<ActionOutcome, ExecuteError> {
        let combat = self.open_combat()?;
        let config = env.config()?;
        let rng = env.rng()?;

        let Some(member) = self.state.party.get(attacker).filter(|member| member.is_alive()) else {
            return Ok(ActionOutcome::Declined(ActionRejection::InvalidActor(attacker)));
        };
        let Some(monster) = combat.monster(target).filter(|monster| monster.is_alive()) else {
            return Ok(ActionOutcome::Declined(ActionRejection::InvalidTarget(target)));
        };

        let mut rolls = SeededRolls::new(rng, self.state.game_seed, self.state.nonce, attacker.0);
        let is_crit = roll_critical(member, config, &mut rolls);
        let mut damage = roll_physical_damage(member, &mut rolls);
        if is_crit {
            damage = apply_critical_multiplier(damage, config);
        }

        let action = ResolvedAction::Attack {
            attacker,
            attacker_name: member.name.clone(),
            target,
            target_name: monster.name.clone(),
            damage,
            is_crit,
        };

        let mut events = self.begin_resolution()?;
        events.push(CombatEvent::AttackResolved {
            attacker,
            target,
            damage,
            is_crit,
        });
        self.strike_monster(target, damage, &mut events)?;

        self.finish_player_action(env, action, events)
    }

    /// Casts one of the caster's class spells.
    ///
    /// Checks run in order: caster exists, spell belongs to the class (fatal
    /// otherwise), caster alive, enough mp, target valid for the spell's
    /// effect. Only a cast that passes all of them spends mana.
    pub fn cast_spell(
        &mut self,
        env: GameEnv<'_>,
        caster: EntityId,
        spell: &str,
        target: EntityId,
    ) -> Result<ActionOutcome, ExecuteError> {
        let combat = self.open_combat()?;
        let config = env.config()?;
        let tables = env.tables()?;
        let rng = env.rng()?;

        let Some(member) = self.state.party.get(caster) else {
            return Ok(ActionOutcome::Declined(ActionRejection::InvalidActor(caster)));
        };
        let definition = tables
            .spell(member.class, spell)
            .ok_or_else(|| ExecuteError::UnknownSpell {
                class: member.class,
                spell: spell.to_owned(),
            })?;
        if !member.is_alive() {
            return Ok(ActionOutcome::Declined(ActionRejection::InvalidActor(caster)));
        }

        let cost = config.spell_cost();
        if member.mp.current < cost {
            return Ok(ActionOutcome::Declined(
                ActionRejection::InsufficientResource {
                    actor: caster,
                    required: cost,
                    available: member.mp.current,
                },
            ));
        }

        let target_name = match definition.effect {
            SpellEffect::Heal => self
                .state
                .party
                .get(target)
                .filter(|ally| ally.is_alive())
                .map(|ally| ally.name.clone()),
            SpellEffect::Damage => combat
                .monster(target)
                .filter(|monster| monster.is_alive())
                .map(|monster| monster.name.clone()),
        };
        let Some(target_name) = target_name else {
            return Ok(ActionOutcome::Declined(ActionRejection::InvalidTarget(target)));
        };

        let mut rolls = SeededRolls::new(rng, self.state.game_seed, self.state.nonce, caster.0);
        let amount = match definition.effect {
            SpellEffect::Heal => roll_healing(&mut rolls),
            SpellEffect::Damage => roll_magic_damage(member, config, &mut rolls),
        };

        let action = ResolvedAction::Spell {
            caster,
            caster_name: member.name.clone(),
            spell: definition.name.clone(),
            effect: definition.effect,
            target,
            target_name,
            amount,
        };

        let mut events = self.begin_resolution()?;
        if let Some(member) = self.state.party.get_mut(caster) {
            member.spend_mana(cost);
        }

        match definition.effect {
            SpellEffect::Heal => {
                events.push(CombatEvent::HealResolved {
                    caster,
                    target,
                    spell: definition.name.clone(),
                    amount,
                });
                if let Some(ally) = self.state.party.get_mut(target) {
                    ally.heal(amount);
                }
            }
            SpellEffect::Damage => {
                events.push(CombatEvent::SpellResolved {
                    caster,
                    target,
                    spell: definition.name.clone(),
                    damage: amount,
                });
                self.strike_monster(target, amount, &mut events)?;
            }
        }

        self.finish_player_action(env, action, events)
    }

    /// Hands back the outcome of a concluded session and leaves combat.
    ///
    /// Victory clears the encounter tile and resumes exploration; defeat ends
    /// the run. Returns `None` while the session is still being fought or
    /// when no session exists.
    pub fn conclude_if_session_over(&mut self) -> Result<Option<SessionOutcome>, ExecuteError> {
        if self.state.phase != GamePhase::Combat {
            return Ok(None);
        }
        let Some(outcome) = self.combat()?.outcome.clone() else {
            return Ok(None);
        };

        self.state.combat = None;
        match outcome.verdict() {
            Verdict::Victory => {
                if let Some(dungeon) = self.state.dungeon.as_mut() {
                    if dungeon.current_tile() == Some(Tile::Encounter) {
                        dungeon.grid.set_tile(dungeon.position, Tile::Floor);
                    }
                }
                self.state.phase = GamePhase::Exploring;
            }
            Verdict::Defeat => self.state.phase = GamePhase::GameOver,
        }

        self.advance_nonce();
        Ok(Some(outcome))
    }

    fn begin_resolution(&mut self) -> Result<Vec<CombatEvent>, ExecuteError> {
        let mut events = Vec::new();
        self.enter_phase(CombatPhase::ActionResolving, &mut events)?;
        Ok(events)
    }

    fn enter_phase(
        &mut self,
        phase: CombatPhase,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), ExecuteError> {
        self.combat_mut()?.phase = phase;
        events.push(CombatEvent::PhaseEntered { phase });
        Ok(())
    }

    fn strike_monster(
        &mut self,
        target: EntityId,
        damage: u32,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), ExecuteError> {
        if let Some(monster) = self.combat_mut()?.monster_mut(target) {
            monster.take_damage(damage);
            if !monster.is_alive() {
                events.push(CombatEvent::EntityDefeated { entity: target });
            }
        }
        Ok(())
    }

    /// Victory check, retaliation and defeat check after a player action.
    fn finish_player_action(
        &mut self,
        env: GameEnv<'_>,
        action: ResolvedAction,
        mut events: Vec<CombatEvent>,
    ) -> Result<ActionOutcome, ExecuteError> {
        let rng = env.rng()?;

        if self.combat()?.all_defeated() {
            self.resolve_victory(env, &mut events)?;
        } else {
            self.resolve_monster_turn(rng, &mut events)?;
            if self.state.party.is_wiped() {
                self.resolve_defeat(&mut events)?;
            } else {
                self.enter_phase(CombatPhase::AwaitingPlayerAction, &mut events)?;
            }
        }

        let combat = self.combat_mut()?;
        combat.round += 1;
        combat.selection = ActionSelection::Idle;
        let phase = combat.phase;
        let alive_monsters = combat.alive_ids();
        let alive_party = self.state.party.alive_ids();

        self.advance_nonce();
        Ok(ActionOutcome::Resolved(ActionReport {
            action,
            events,
            phase,
            alive_party,
            alive_monsters,
        }))
    }

    /// Every living monster strikes once, in spawn order.
    ///
    /// Each monster picks its target among the members still standing when
    /// it acts, so nobody is hit after falling. The turn ends early on a wipe.
    fn resolve_monster_turn(
        &mut self,
        rng: &(impl RngOracle + ?Sized),
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), ExecuteError> {
        self.enter_phase(CombatPhase::MonsterTurnResolving, events)?;

        let attackers = self.combat()?.alive_ids();
        for monster_id in attackers {
            let targets = self.state.party.alive_ids();
            if targets.is_empty() {
                break;
            }
            let Some(monster) = self.combat()?.monster(monster_id) else {
                continue;
            };

            let mut rolls =
                SeededRolls::new(rng, self.state.game_seed, self.state.nonce, monster_id.0);
            let target = targets[rolls.pick_index(targets.len())];
            let damage = roll_monster_damage(monster, &mut rolls);

            events.push(CombatEvent::MonsterAttackResolved {
                monster: monster_id,
                target,
                damage,
            });
            if let Some(member) = self.state.party.get_mut(target) {
                member.take_damage(damage);
                if !member.is_alive() {
                    events.push(CombatEvent::EntityDefeated { entity: target });
                }
            }
        }
        Ok(())
    }

    /// Rewards every survivor with the full roster's xp and an even share of
    /// the purse, then levels them up as far as their xp allows.
    fn resolve_victory(
        &mut self,
        env: GameEnv<'_>,
        events: &mut Vec<CombatEvent>,
    ) -> Result<(), ExecuteError> {
        let tables = env.tables()?;
        let total_xp = self.combat()?.total_xp();

        let mut rolls = SeededRolls::new(
            env.rng()?,
            self.state.game_seed,
            self.state.nonce,
            EntityId::SYSTEM.0,
        );
        let total_gold =
            (rolls.next_unit() * VICTORY_GOLD_SPREAD).floor() as u64 + VICTORY_GOLD_BASE;

        // Grow survivors on copies first so a missing template changes nothing.
        let mut grown = Vec::new();
        let mut level_ups = Vec::new();
        for member in self.state.party.alive() {
            let template = tables
                .class_template(member.class)
                .ok_or(OracleError::UnknownClass(member.class))?;
            let mut rewarded = member.clone();
            rewarded.xp += total_xp;
            let (next, gained) = level_up_fully(&rewarded, template);
            grown.push(next);
            level_ups.extend(gained);
        }
        for next in grown {
            if let Some(slot) = self.state.party.get_mut(next.id) {
                *slot = next;
            }
        }
        self.state.party.share_gold(total_gold);

        self.combat_mut()?.outcome = Some(SessionOutcome::Victory {
            total_xp,
            total_gold,
            level_ups: level_ups.clone(),
        });
        self.enter_phase(CombatPhase::Concluded(Verdict::Victory), events)?;
        events.push(CombatEvent::VictoryConcluded {
            total_xp,
            total_gold,
            level_ups,
        });
        Ok(())
    }

    fn resolve_defeat(&mut self, events: &mut Vec<CombatEvent>) -> Result<(), ExecuteError> {
        self.combat_mut()?.outcome = Some(SessionOutcome::Defeat);
        self.enter_phase(CombatPhase::Concluded(Verdict::Defeat), events)?;
        events.push(CombatEvent::DefeatConcluded);
        Ok(())
    }
}
