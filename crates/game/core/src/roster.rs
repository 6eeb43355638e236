//! The fixed set of units taking part in a battle.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::unit::{Ally, AllyId, BattleUnit, Enemy, EnemyId, Party, Troop, UnitId};

/// Errors raised while building or addressing a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("a battle needs at least one ally")]
    NoAllies,

    #[error("a battle needs at least one enemy")]
    NoEnemies,

    #[error("party has {count} members, at most {} can fight", BattleConfig::MAX_ALLIES)]
    TooManyAllies { count: usize },

    #[error("troop has {count} enemies, at most {} can fight", BattleConfig::MAX_ENEMIES)]
    TooManyEnemies { count: usize },

    #[error("unit {0} is not part of this battle")]
    UnknownUnit(UnitId),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RosterError::NoAllies => "ROSTER_NO_ALLIES",
            RosterError::NoEnemies => "ROSTER_NO_ENEMIES",
            RosterError::TooManyAllies { .. } => "ROSTER_TOO_MANY_ALLIES",
            RosterError::TooManyEnemies { .. } => "ROSTER_TOO_MANY_ENEMIES",
            RosterError::UnknownUnit(_) => "ROSTER_UNKNOWN_UNIT",
        }
    }
}

/// Allies and enemies of one battle, in deployment order.
///
/// The roster never grows or shrinks once built; only the standing flag of a
/// unit can change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    allies: ArrayVec<Ally, { BattleConfig::MAX_ALLIES }>,
    enemies: ArrayVec<Enemy, { BattleConfig::MAX_ENEMIES }>,
}

impl Roster {
    pub fn new(
        allies: impl IntoIterator<Item = Ally>,
        enemies: impl IntoIterator<Item = Enemy>,
    ) -> Result<Self, RosterError> {
        let allies: Vec<Ally> = allies.into_iter().collect();
        let enemies: Vec<Enemy> = enemies.into_iter().collect();

        if allies.is_empty() {
            return Err(RosterError::NoAllies);
        }
        if enemies.is_empty() {
            return Err(RosterError::NoEnemies);
        }

        if allies.len() > BattleConfig::MAX_ALLIES {
            return Err(RosterError::TooManyAllies {
                count: allies.len(),
            });
        }
        if enemies.len() > BattleConfig::MAX_ENEMIES {
            return Err(RosterError::TooManyEnemies {
                count: enemies.len(),
            });
        }

        Ok(Self {
            allies: allies.into_iter().collect(),
            enemies: enemies.into_iter().collect(),
        })
    }

    /// Builds the roster for a fight between the party and a troop.
    pub fn from_encounter(party: &Party, troop: &Troop) -> Result<Self, RosterError> {
        Self::new(
            party.members.iter().map(Ally::from_member),
            troop.enemies.iter().map(Enemy::from_template),
        )
    }

    pub fn allies(&self) -> &[Ally] {
        &self.allies
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn ally(&self, id: AllyId) -> Option<&Ally> {
        self.allies.get(id.index())
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id.index())
    }

    pub fn unit(&self, id: UnitId) -> Option<BattleUnit<'_>> {
        match id {
            UnitId::Ally(ally) => self.ally(ally).map(BattleUnit::Ally),
            UnitId::Enemy(enemy) => self.enemy(enemy).map(BattleUnit::Enemy),
        }
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.unit(id).is_some()
    }

    pub fn ally_ids(&self) -> impl Iterator<Item = AllyId> + '_ {
        (0..self.allies.len()).map(|index| AllyId(index as u8))
    }

    pub fn enemy_ids(&self) -> impl Iterator<Item = EnemyId> + '_ {
        (0..self.enemies.len()).map(|index| EnemyId(index as u8))
    }

    pub fn standing_allies(&self) -> impl Iterator<Item = AllyId> + '_ {
        self.ally_ids().filter(|id| self.allies[id.index()].is_standing())
    }

    pub fn standing_enemies(&self) -> impl Iterator<Item = EnemyId> + '_ {
        self.enemy_ids().filter(|id| self.enemies[id.index()].is_standing())
    }

    pub(crate) fn set_standing(&mut self, id: UnitId, standing: bool) -> Result<(), RosterError> {
        match id {
            UnitId::Ally(ally) => self
                .allies
                .get_mut(ally.index())
                .map(|unit| unit.set_standing(standing)),
            UnitId::Enemy(enemy) => self
                .enemies
                .get_mut(enemy.index())
                .map(|unit| unit.set_standing(standing)),
        }
        .ok_or(RosterError::UnknownUnit(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{EnemyTemplate, PartyMember, PrototypeId};

    fn party(size: usize) -> Party {
        Party::new(
            (0..size).map(|i| PartyMember::new(format!("Hero {i}"), PrototypeId::new("hero"))),
        )
    }

    fn troop(size: usize) -> Troop {
        Troop::new(
            "test troop",
            (0..size).map(|i| EnemyTemplate::new(format!("Slime {i}"), PrototypeId::new("slime"))),
        )
    }

    #[test]
    fn encounter_keeps_deployment_order() {
        let roster = Roster::from_encounter(&party(2), &troop(3)).expect("valid roster");

        assert_eq!(roster.allies().len(), 2);
        assert_eq!(roster.enemies().len(), 3);
        assert_eq!(roster.ally(AllyId(1)).map(Ally::name), Some("Hero 1"));
        assert_eq!(
            roster.unit(UnitId::Enemy(EnemyId(2))).map(|u| u.name()),
            Some("Slime 2")
        );
        assert!(!roster.contains(UnitId::Enemy(EnemyId(3))));
    }

    #[test]
    fn empty_sides_are_rejected() {
        assert_eq!(
            Roster::from_encounter(&party(0), &troop(1)),
            Err(RosterError::NoAllies)
        );
        assert_eq!(
            Roster::from_encounter(&party(1), &troop(0)),
            Err(RosterError::NoEnemies)
        );
    }

    #[test]
    fn oversized_sides_are_rejected() {
        let err = Roster::from_encounter(&party(BattleConfig::MAX_ALLIES + 1), &troop(1))
            .expect_err("party too large");
        assert_eq!(
            err,
            RosterError::TooManyAllies {
                count: BattleConfig::MAX_ALLIES + 1
            }
        );

        let err = Roster::from_encounter(&party(1), &troop(BattleConfig::MAX_ENEMIES + 1))
            .expect_err("troop too large");
        assert_eq!(err.error_code(), "ROSTER_TOO_MANY_ENEMIES");
    }

    #[test]
    fn standing_flags_filter_iterators() {
        let mut roster = Roster::from_encounter(&party(2), &troop(2)).expect("valid roster");

        roster
            .set_standing(UnitId::Enemy(EnemyId(0)), false)
            .expect("known unit");
        assert_eq!(roster.standing_enemies().collect::<Vec<_>>(), vec![EnemyId(1)]);
        assert_eq!(roster.standing_allies().count(), 2);

        assert_eq!(
            roster.set_standing(UnitId::Ally(AllyId(9)), false),
            Err(RosterError::UnknownUnit(UnitId::Ally(AllyId(9))))
        );
    }
}
