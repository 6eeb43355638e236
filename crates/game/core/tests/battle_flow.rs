use battle_core::{
    ActionDefinition, ActionExecutionResult, AllyId, Annihilation, Battle, BattleEnv, BattleError,
    BattleOutcome, BattleOverResult, BattleResolver, BattleState, Enemy, EnemyId, EnemyTemplate,
    LifecycleError, NextPhase, NoopResolver, OracleError, Party, PartyMember, PcgRng, Phase,
    PhaseKind, PlayerTurnHelper, PrototypeId, RandomOpponent, Roster, StandardReferee, Troop,
    UnitId, WeightedAction,
};

#[derive(Default)]
struct Recorder {
    decide_immediately: bool,
    events: Vec<String>,
    targets: Vec<Option<UnitId>>,
    executed: Vec<ActionExecutionResult>,
    finished: Vec<BattleOverResult>,
}

impl Recorder {
    fn autoplay() -> Self {
        Self {
            decide_immediately: true,
            ..Self::default()
        }
    }

    fn count(&self, event: &str) -> usize {
        self.events.iter().filter(|e| e.as_str() == event).count()
    }
}

impl BattleResolver for Recorder {
    fn on_battle_start(&mut self, _battle: &Battle) {
        self.events.push("battle_start".into());
    }

    fn on_enemy_prepared(
        &mut self,
        battle: &Battle,
        enemy: EnemyId,
        action: &ActionDefinition,
        target: Option<UnitId>,
    ) {
        let name = battle.roster().enemy(enemy).map(Enemy::name).unwrap_or("?");
        self.events
            .push(format!("enemy_prepared:{}:{}", name, action.id));
        self.targets.push(target);
    }

    fn on_player_turn(&mut self, battle: &Battle, helper: &mut PlayerTurnHelper<'_>) {
        self.events.push("player_turn".into());
        if !self.decide_immediately {
            return;
        }
        let roster = battle.roster();
        for ally in roster.standing_allies() {
            let first = roster.ally(ally).and_then(|unit| unit.actions().first().cloned());
            if let Some(action) = first {
                helper
                    .set_ally_action(ally, action, Some(UnitId::Enemy(EnemyId(0))))
                    .expect("valid choice");
            }
        }
        helper.done().expect("first done");
    }

    fn on_action_executed(&mut self, _battle: &Battle, result: &ActionExecutionResult) {
        self.events
            .push(format!("executed:{}:{}", result.actor(), result.action().id));
        self.executed.push(result.clone());
    }

    fn on_battle_over(&mut self, _battle: &Battle, result: &BattleOverResult) {
        self.events.push(format!("battle_over:{}", result.outcome));
        self.finished.push(*result);
    }
}

fn slash() -> ActionDefinition {
    ActionDefinition::new("slash", "Slash")
}

fn party(size: usize) -> Party {
    Party::new((0..size).map(|i| {
        PartyMember::new(format!("Hero {i}"), PrototypeId::new("hero")).with_actions([slash()])
    }))
}

fn troop(size: usize) -> Troop {
    Troop::new(
        "slimes",
        (0..size).map(|i| {
            EnemyTemplate::new(format!("Slime {i}"), PrototypeId::new("slime")).with_actions([
                WeightedAction::new(ActionDefinition::new("tackle", "Tackle"), 3),
                WeightedAction::new(ActionDefinition::new("wobble", "Wobble"), 1),
            ])
        }),
    )
}

fn battle(allies: usize, enemies: usize, seed: u64) -> Battle {
    let roster = Roster::from_encounter(&party(allies), &troop(enemies)).expect("valid roster");
    Battle::new(roster, seed)
}

fn tick(battle: &mut Battle, env: BattleEnv<'_>, resolver: &mut Recorder, ticks: usize) {
    for _ in 0..ticks {
        battle.update(env, resolver).expect("legal tick");
    }
}

/// Ticks needed for one full round once the battle is running.
const TICKS_PER_ROUND: usize = 5;

#[test]
fn one_round_loops_back_to_enemy_decision() {
    let rng = PcgRng;
    let env = BattleEnv::empty().with_rng(&rng);
    let mut resolver = Recorder::autoplay();
    let mut battle = battle(1, 1, 7);

    battle.start().expect("first start");
    assert_eq!(battle.state(), BattleState::Ongoing);
    assert_eq!(battle.phase_kind(), Some(PhaseKind::BattleStart));

    tick(&mut battle, env, &mut resolver, 1 + TICKS_PER_ROUND);

    assert_eq!(battle.phase_kind(), Some(PhaseKind::EnemyDecision));
    assert!(!battle.phase().expect("phase installed").has_started());
    assert_eq!(battle.rounds_completed(), 1);
    assert_eq!(resolver.executed.len(), 2);
    assert!(battle.prepared_actions().is_empty());

    assert_eq!(resolver.events[0], "battle_start");
    assert!(resolver.events[1].starts_with("enemy_prepared:Slime 0:"));
    assert!(resolver.events[2].starts_with("executed:enemy#0:"));
    assert_eq!(resolver.events[3], "player_turn");
    assert_eq!(resolver.events[4], "executed:ally#0:slash");
    assert!(resolver.executed.iter().all(|result| result.round == 1));
}

#[test]
fn action_execution_fires_twice_per_round() {
    let rng = PcgRng;
    let env = BattleEnv::empty().with_rng(&rng);
    let mut resolver = Recorder::autoplay();
    let mut battle = battle(1, 1, 99);

    battle.start().expect("start");
    tick(&mut battle, env, &mut resolver, 1 + 3 * TICKS_PER_ROUND);

    assert_eq!(battle.rounds_completed(), 3);
    assert_eq!(resolver.executed.len(), 6);
    for round in 1..=3 {
        let in_round = resolver
            .executed
            .iter()
            .filter(|result| result.round == round)
            .count();
        assert_eq!(in_round, 2, "round {round}");
    }
    assert_eq!(resolver.count("battle_start"), 1);
}

#[test]
fn battle_starts_only_once() {
    let mut battle = battle(1, 1, 1);

    battle.start().expect("first start");
    assert_eq!(
        battle.start(),
        Err(BattleError::Lifecycle(LifecycleError::BattleAlreadyStarted))
    );
    assert_eq!(battle.phase_kind(), Some(PhaseKind::BattleStart));
}

#[test]
fn update_without_phase_is_a_no_op() {
    let mut battle = battle(1, 1, 1);
    let mut resolver = Recorder::default();

    battle
        .update(BattleEnv::empty(), &mut resolver)
        .expect("no-op");
    assert_eq!(battle.state(), BattleState::NotStarted);
    assert!(resolver.events.is_empty());
}

#[test]
fn prepared_overwrite_executes_last_write_only() {
    let mut battle = battle(1, 2, 1);
    let mut resolver = Recorder::default();
    let actor = UnitId::Ally(AllyId(0));

    battle
        .prepare_action(actor, ActionDefinition::new("guard", "Guard"), None)
        .expect("first choice");
    let replaced = battle
        .prepare_action(actor, slash(), Some(UnitId::Enemy(EnemyId(1))))
        .expect("changed mind");
    assert_eq!(replaced.map(|p| p.action.id.0), Some("guard".to_string()));

    assert_eq!(battle.execute_prepared_actions(&mut resolver), 1);
    assert_eq!(resolver.executed.len(), 1);
    let result = &resolver.executed[0];
    assert_eq!(result.action().id.as_str(), "slash");
    assert_eq!(result.target(), Some(UnitId::Enemy(EnemyId(1))));

    assert_eq!(battle.execute_prepared_actions(&mut resolver), 0);
}

#[test]
fn prepare_action_rejects_strangers() {
    let mut battle = battle(1, 1, 1);
    let stranger = UnitId::Enemy(EnemyId(4));

    let err = battle
        .prepare_action(stranger, slash(), None)
        .expect_err("unknown actor");
    assert!(matches!(err, BattleError::Roster(_)));

    let err = battle
        .prepare_action(UnitId::Ally(AllyId(0)), slash(), Some(stranger))
        .expect_err("unknown target");
    assert!(matches!(err, BattleError::Roster(_)));
    assert!(battle.prepared_actions().is_empty());
}

#[test]
fn player_turn_can_finish_after_the_callback() {
    let rng = PcgRng;
    let env = BattleEnv::empty().with_rng(&rng);
    let mut resolver = Recorder::default();
    let mut battle = battle(2, 1, 3);

    battle.start().expect("start");
    // battle start, enemy decision, action execution, player decision
    tick(&mut battle, env, &mut resolver, 4);
    assert_eq!(battle.phase_kind(), Some(PhaseKind::PlayerDecision));

    tick(&mut battle, env, &mut resolver, 3);
    assert_eq!(battle.phase_kind(), Some(PhaseKind::PlayerDecision));
    assert_eq!(resolver.count("player_turn"), 1);

    {
        let mut helper = battle.player_turn().expect("decision phase running");
        helper
            .set_ally_action(AllyId(1), slash(), Some(UnitId::Enemy(EnemyId(0))))
            .expect("choice");
        assert!(!helper.all_set());
        helper.done().expect("done");
    }

    tick(&mut battle, env, &mut resolver, 1);
    match battle.phase().map(|phase| phase.phase()) {
        Some(Phase::ActionExecution { next }) => assert_eq!(*next, NextPhase::CleanUp),
        other => panic!("expected action execution, got {other:?}"),
    }
    assert_eq!(battle.prepared_actions().len(), 1);
    assert!(battle.player_turn().is_none());
}

#[test]
fn enemy_decision_requires_rng() {
    let mut battle = battle(1, 1, 1);
    let mut resolver = Recorder::default();

    battle.start().expect("start");
    battle
        .update(BattleEnv::empty(), &mut resolver)
        .expect("battle start needs no oracle");
    assert_eq!(
        battle.update(BattleEnv::empty(), &mut resolver),
        Err(BattleError::Oracle(OracleError::RngNotAvailable))
    );

    // the failed tick leaves the phase unstarted and keeps failing
    let phase = battle.phase().expect("phase");
    assert_eq!(phase.kind(), PhaseKind::EnemyDecision);
    assert!(!phase.has_started());
    assert_eq!(
        battle.update(BattleEnv::empty(), &mut resolver),
        Err(BattleError::Oracle(OracleError::RngNotAvailable))
    );

    // once an rng is supplied the enemies decide and the round moves on
    let rng = PcgRng;
    tick(&mut battle, BattleEnv::empty().with_rng(&rng), &mut resolver, 1);
    assert_eq!(battle.phase_kind(), Some(PhaseKind::ActionExecution));
    assert_eq!(battle.prepared_actions().len(), 1);
}

#[test]
fn downed_enemies_skip_their_decision() {
    let rng = PcgRng;
    let env = BattleEnv::empty().with_rng(&rng);
    let mut resolver = Recorder::default();
    let mut battle = battle(1, 3, 11);

    battle.start().expect("start");
    battle
        .incapacitate(UnitId::Enemy(EnemyId(1)))
        .expect("known enemy");
    tick(&mut battle, env, &mut resolver, 2);

    let prepared: Vec<UnitId> = battle.prepared_actions().iter().map(|p| p.actor).collect();
    assert_eq!(
        prepared,
        vec![UnitId::Enemy(EnemyId(0)), UnitId::Enemy(EnemyId(2))]
    );
    assert_eq!(resolver.targets, vec![None, None]);
}

#[test]
fn targeting_oracle_assigns_enemy_targets() {
    let rng = PcgRng;
    let targeting = RandomOpponent;
    let env = BattleEnv::empty().with_rng(&rng).with_targeting(&targeting);
    let mut resolver = Recorder::default();
    let mut battle = battle(1, 2, 5);

    battle.start().expect("start");
    tick(&mut battle, env, &mut resolver, 2);

    assert_eq!(
        resolver.targets,
        vec![Some(UnitId::Ally(AllyId(0))), Some(UnitId::Ally(AllyId(0)))]
    );
}

#[test]
fn annihilation_ends_in_victory_and_stays_finished() {
    let rng = PcgRng;
    let referee = Annihilation;
    let env = BattleEnv::empty().with_rng(&rng).with_referee(&referee);
    let mut resolver = Recorder::autoplay();
    let mut battle = battle(1, 1, 21);

    battle.start().expect("start");
    tick(&mut battle, env, &mut resolver, 3);
    battle
        .incapacitate(UnitId::Enemy(EnemyId(0)))
        .expect("known enemy");
    tick(&mut battle, env, &mut resolver, 3);

    assert_eq!(battle.state(), BattleState::Finished);
    assert!(battle.phase().is_none());
    assert_eq!(
        battle.outcome(),
        Some(&BattleOverResult {
            outcome: BattleOutcome::Victory,
            rounds: 1,
        })
    );
    assert_eq!(resolver.finished.len(), 1);

    assert_eq!(
        battle.update(env, &mut resolver),
        Err(BattleError::Lifecycle(LifecycleError::BattleFinished))
    );
    assert_eq!(
        battle.finish(BattleOutcome::Draw, &mut resolver),
        Err(BattleError::Lifecycle(LifecycleError::BattleAlreadyFinished))
    );
    assert_eq!(battle.state(), BattleState::Finished);
    assert_eq!(resolver.finished.len(), 1);
}

#[test]
fn downed_party_loses() {
    let rng = PcgRng;
    let referee = Annihilation;
    let env = BattleEnv::empty().with_rng(&rng).with_referee(&referee);
    let mut resolver = Recorder::autoplay();
    let mut battle = battle(2, 1, 8);

    battle.start().expect("start");
    battle.incapacitate(UnitId::Ally(AllyId(0))).expect("ally 0");
    tick(&mut battle, env, &mut resolver, 4);
    // only the standing ally was committed
    assert_eq!(battle.prepared_actions().len(), 1);

    battle.incapacitate(UnitId::Ally(AllyId(1))).expect("ally 1");
    tick(&mut battle, env, &mut resolver, 2);

    assert_eq!(
        battle.outcome().map(|result| result.outcome),
        Some(BattleOutcome::Defeat)
    );
    assert_eq!(resolver.events.last().map(String::as_str), Some("battle_over:defeat"));
}

#[test]
fn round_limit_declares_a_draw() {
    let rng = PcgRng;
    let referee = StandardReferee::new(Some(2));
    let env = BattleEnv::empty().with_rng(&rng).with_referee(&referee);
    let mut resolver = Recorder::autoplay();
    let mut battle = battle(1, 1, 4);

    battle.start().expect("start");
    let mut ticks = 0;
    while battle.state() != BattleState::Finished {
        battle.update(env, &mut resolver).expect("legal tick");
        ticks += 1;
        assert!(ticks < 100, "battle should end");
    }

    assert_eq!(ticks, 1 + 2 * TICKS_PER_ROUND);
    assert_eq!(
        resolver.finished,
        vec![BattleOverResult {
            outcome: BattleOutcome::Draw,
            rounds: 2,
        }]
    );
}

#[test]
fn finish_requires_a_started_battle() {
    let mut battle = battle(1, 1, 1);

    assert_eq!(
        battle.finish(BattleOutcome::Victory, &mut NoopResolver),
        Err(BattleError::Lifecycle(LifecycleError::BattleNotStarted))
    );

    battle.start().expect("start");
    let result = battle
        .finish(BattleOutcome::Draw, &mut NoopResolver)
        .expect("driver may end the battle");
    assert_eq!(result.rounds, 0);
    assert_eq!(battle.state(), BattleState::Finished);
}

#[test]
fn same_seed_replays_identically() {
    fn play(seed: u64) -> Vec<String> {
        let rng = PcgRng;
        let targeting = RandomOpponent;
        let referee = StandardReferee::new(Some(5));
        let env = BattleEnv::with_all(&rng, &targeting, &referee);
        let mut resolver = Recorder::autoplay();
        let mut battle = battle(3, 4, seed);

        battle.start().expect("start");
        while battle.state() != BattleState::Finished {
            battle.update(env, &mut resolver).expect("legal tick");
        }
        resolver.events
    }

    assert_eq!(play(0xDEAD_BEEF), play(0xDEAD_BEEF));
}
