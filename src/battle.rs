use core::{fmt::Display, ops::Deref};
use std::error::Error;

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    data::BattleData,
    endpoint::BattleEndpoint,
    experience::{award_experience, ExperiencePolicy, ScaledExperience},
    item::{catch, heal},
    moves::{damage::compute_damage, resolve_turn_order, BattleInput, BattleMove, Side},
    party::{BattleParty, PartyError},
    pokedex::{
        item::{Item, ItemCategory},
        moves::Move,
        pokemon::Pokemon,
    },
    random,
    report::{BattleEvent, BattleReport},
    state::{BattleOutcome, BattleState},
};

/// Turns after which [`Battle::run`] gives up on a battle.
pub const MAX_TURNS: usize = 1000;

/// A battle between the user's party and an opposing party.
pub struct Battle<P: Deref<Target = Pokemon>, X: ExperiencePolicy = ScaledExperience> {
    data: BattleData,
    state: BattleState,

    user: BattleParty<P>,
    opponent: BattleParty<P>,

    experience: X,
    report: BattleReport,
}

impl<P: Deref<Target = Pokemon>> Battle<P> {
    pub fn new(data: BattleData, user: BattleParty<P>, opponent: BattleParty<P>) -> Self {
        Self::with_experience(data, user, opponent, ScaledExperience)
    }
}

impl<P: Deref<Target = Pokemon>, X: ExperiencePolicy> Battle<P, X> {
    pub fn with_experience(
        data: BattleData,
        user: BattleParty<P>,
        opponent: BattleParty<P>,
        experience: X,
    ) -> Self {
        let mut battle = Self {
            data,
            state: BattleState::default(),
            user,
            opponent,
            experience,
            report: BattleReport::default(),
        };
        battle.user.mark_faced();
        battle.opponent.mark_faced();
        battle.check_end();
        battle
    }

    pub fn data(&self) -> &BattleData {
        &self.data
    }

    pub fn party(&self, side: Side) -> &BattleParty<P> {
        match side {
            Side::User => &self.user,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn report(&self) -> &BattleReport {
        &self.report
    }

    pub fn finished(&self) -> bool {
        matches!(self.state, BattleState::End(..))
    }

    pub fn outcome(&self) -> BattleOutcome {
        match self.state {
            BattleState::End(outcome) => outcome,
            BattleState::Selecting => BattleOutcome::Unfinished,
        }
    }

    /// Builds an input for `side` from its active pokemon.
    pub fn input<M, I>(&self, side: Side, action: BattleMove<M, I>) -> Option<BattleInput<M, I>> {
        self.party(side)
            .active()
            .map(|pokemon| BattleInput::new(side, pokemon, action))
    }

    /// Plays turns until the battle ends, asking each endpoint for its
    /// action every turn.
    pub fn run<M, I>(
        &mut self,
        random: &mut impl Rng,
        user: &mut impl BattleEndpoint<P, M, I>,
        opponent: &mut impl BattleEndpoint<P, M, I>,
    ) -> Result<BattleReport, BattleError>
    where
        M: Deref<Target = Move>,
        I: Deref<Target = Item>,
    {
        while !self.finished() && self.report.turns < MAX_TURNS {
            let user_action = user.select(Side::User, &self.user, &self.opponent);
            let opponent_action = opponent.select(Side::Opponent, &self.opponent, &self.user);

            match (
                self.input(Side::User, user_action),
                self.input(Side::Opponent, opponent_action),
            ) {
                (Some(user), Some(opponent)) => self.turn(random, user, opponent)?,
                _ => {
                    warn!("A side has no active pokemon, ending battle");
                    self.check_end();
                    break;
                }
            }
        }

        if !self.finished() {
            info!("Battle stopped after {} turns", self.report.turns);
        }

        self.report.outcome = self.outcome();
        Ok(self.report.clone())
    }

    /// Resolves one turn.
    ///
    /// The second input is skipped if its pokemon fainted to the first, or
    /// if the first ended the battle.
    pub fn turn<M, I>(
        &mut self,
        random: &mut impl Rng,
        user: BattleInput<M, I>,
        opponent: BattleInput<M, I>,
    ) -> Result<(), BattleError>
    where
        M: Deref<Target = Move>,
        I: Deref<Target = Item>,
    {
        if self.finished() {
            return Err(BattleError::Finished);
        }

        self.report.turns += 1;
        debug!("Turn {}", self.report.turns);

        let (first, second) = resolve_turn_order(user, opponent);

        let fainted = self.execute(random, first)?;

        if self.finished() || fainted == Some(second.side) {
            debug!("{} could not act this turn", second.side);
        } else {
            self.execute(random, second)?;
        }

        self.report.outcome = self.outcome();
        Ok(())
    }

    /// Executes a single input. Returns the side whose active pokemon
    /// fainted because of it.
    fn execute<M, I>(
        &mut self,
        random: &mut impl Rng,
        input: BattleInput<M, I>,
    ) -> Result<Option<Side>, BattleError>
    where
        M: Deref<Target = Move>,
        I: Deref<Target = Item>,
    {
        let side = input.side;
        let coefficient = self.data.damage_coefficient();

        match input.action {
            BattleMove::Move(m) => {
                let (user, target) = sides(&mut self.user, &mut self.opponent, side);

                let (attacker, defender) = match (user.active(), target.active()) {
                    (Some(attacker), Some(defender)) => (attacker, defender),
                    _ => return Ok(None),
                };

                if attacker.fainted() {
                    warn!("{} has fainted and cannot use {}", attacker.name(), m.name);
                    return Ok(None);
                }

                if defender.fainted() {
                    warn!("{} has fainted and cannot be targeted", defender.name());
                    return Ok(None);
                }

                info!("{} used {}!", attacker.name(), m.name);

                let result = compute_damage(
                    attacker,
                    defender,
                    &m,
                    coefficient,
                    random::crit(random),
                    random::damage_roll(random),
                );

                let fainted = match target.active_mut() {
                    Some(defender) => {
                        let fainted = defender.damage(result.damage);
                        self.report.push(BattleEvent::Damage {
                            side: side.other(),
                            pokemon: defender.name().to_owned(),
                            result,
                        });
                        fainted
                    }
                    None => false,
                };

                if fainted {
                    self.faint(side.other());
                    return Ok(Some(side.other()));
                }
            }
            BattleMove::Switch(index) => {
                let (user, ..) = sides(&mut self.user, &mut self.opponent, side);

                if index == user.active_index() && index < user.len() {
                    debug!("{} is already active", side);
                    return Ok(None);
                }

                let switched = user.switch_to(index)?;
                let mut pokemon = switched.name().to_owned();

                if switched.fainted() {
                    warn!("{} has fainted and cannot battle", pokemon);
                    match user.replace_fainted() {
                        Some(replacement) => pokemon = replacement.name().to_owned(),
                        None => {
                            self.check_end();
                            return Ok(None);
                        }
                    }
                }

                info!("{} switched to {}", side, pokemon);
                self.report.push(BattleEvent::Switch { side, pokemon });
                self.active_changed(side);
            }
            BattleMove::UseItem(item) => {
                let (user, ..) = sides(&mut self.user, &mut self.opponent, side);
                match (item.category, user.active_mut()) {
                    (ItemCategory::Medicine, Some(pokemon)) => {
                        heal(pokemon, &item);
                        let event = BattleEvent::Heal {
                            side,
                            pokemon: pokemon.name().to_owned(),
                            hp: pokemon.hp(),
                        };
                        self.report.push(event);
                    }
                    (category, _) => {
                        warn!("{} ({:?}) has no use in battle", item.name, category)
                    }
                }
            }
            BattleMove::Catch(item) => {
                if !self.data.type_.allows_catching() {
                    info!("Cannot use pokeballs in trainer battles!");
                    return Ok(None);
                }

                let (user, target) = sides(&mut self.user, &mut self.opponent, side);

                let (captured, pokemon) = match target.active() {
                    Some(pokemon) => (
                        random::try_catch(random, pokemon, &item),
                        pokemon.name().to_owned(),
                    ),
                    None => return Ok(None),
                };

                let caught = catch(target, user, &item, captured);

                self.report.push(BattleEvent::Catch {
                    side: side.other(),
                    pokemon: pokemon.clone(),
                    caught,
                });

                if caught {
                    self.report.caught.push(pokemon);
                    self.end(BattleOutcome::Caught);
                }
            }
            BattleMove::Run => {
                let escaped = self.data.settings.allow_forfeit;
                self.report.push(BattleEvent::Run { side, escaped });
                match escaped {
                    true => {
                        info!("{} got away safely!", side);
                        self.end(BattleOutcome::Fled(side));
                    }
                    false => info!("{} can't escape!", side),
                }
            }
        }

        Ok(None)
    }

    /// Handles the active pokemon of `side` fainting: the other side earns
    /// experience and `side` sends in a replacement if it has one.
    fn faint(&mut self, side: Side) {
        let (party, other) = match side {
            Side::User => (&mut self.user, &self.opponent),
            Side::Opponent => (&mut self.opponent, &self.user),
        };

        if let Some(fainted) = party.active() {
            info!("{} fainted!", fainted.name());

            self.report.push(BattleEvent::Faint {
                side,
                pokemon: fainted.name().to_owned(),
            });

            let participants = other.faced();

            for gain in award_experience(fainted, &participants, &self.experience) {
                if let Some(pokemon) = participants.get(gain.index) {
                    self.report.push(BattleEvent::Experience {
                        side: side.other(),
                        pokemon: pokemon.name().to_owned(),
                        experience: gain.experience,
                    });
                }
            }
        }

        match party.replace_fainted().map(|p| p.name().to_owned()) {
            Some(pokemon) => {
                info!("{} sent out {}", side, pokemon);
                self.report.push(BattleEvent::Switch { side, pokemon });
                self.active_changed(side);
            }
            None => self.check_end(),
        }
    }

    /// The active pokemon of `side` was replaced, so the other side starts
    /// over on who has faced it.
    fn active_changed(&mut self, side: Side) {
        let (party, other) = sides(&mut self.user, &mut self.opponent, side);
        party.mark_faced();
        other.reset_faced();
    }

    fn check_end(&mut self) {
        if self.opponent.all_fainted() {
            self.end(BattleOutcome::Won);
        } else if self.user.all_fainted() {
            self.end(BattleOutcome::Lost);
        }
    }

    fn end(&mut self, outcome: BattleOutcome) {
        info!("Battle ended: {:?}", outcome);
        self.state = BattleState::End(outcome);
        self.report.outcome = outcome;
    }
}

/// Splits the parties into (acting side, other side).
fn sides<'a, P: Deref<Target = Pokemon>>(
    user: &'a mut BattleParty<P>,
    opponent: &'a mut BattleParty<P>,
    side: Side,
) -> (&'a mut BattleParty<P>, &'a mut BattleParty<P>) {
    match side {
        Side::User => (user, opponent),
        Side::Opponent => (opponent, user),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleError {
    Party(PartyError),
    /// A turn was requested after the battle ended.
    Finished,
}

impl From<PartyError> for BattleError {
    fn from(error: PartyError) -> Self {
        Self::Party(error)
    }
}

impl Error for BattleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Party(error) => Some(error),
            Self::Finished => None,
        }
    }
}

impl Display for BattleError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Party(error) => Display::fmt(error, f),
            Self::Finished => f.write_str("The battle has already ended"),
        }
    }
}
