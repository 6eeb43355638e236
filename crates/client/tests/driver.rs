use std::path::PathBuf;
use std::time::Duration;

use battle_client::{
    Autopilot, BattleDriver, ClientConfig, DriverBuilder, LoggingResolver, driver_from_config,
};
use battle_core::{
    ActionDefinition, Battle, BattleConfig, BattleOutcome, BattleOverResult, BattleState,
    EnemyTemplate, Party, PartyMember, PhaseKind, PrototypeId, Roster, Troop, WeightedAction,
};

fn fast() -> ClientConfig {
    ClientConfig {
        tick: Duration::from_millis(1),
        ..ClientConfig::default()
    }
}

fn battle(enemies: usize, seed: u64) -> Battle {
    let party = Party::new([
        PartyMember::new("Ayla", PrototypeId::new("fighter"))
            .with_actions([ActionDefinition::new("slash", "Slash")]),
        PartyMember::new("Bren", PrototypeId::new("mage"))
            .with_actions([ActionDefinition::new("fire", "Fire")]),
    ]);
    let troop = Troop::new(
        "test",
        (0..enemies).map(|i| {
            EnemyTemplate::new(format!("Slime {i}"), PrototypeId::new("slime"))
                .with_actions([WeightedAction::new(ActionDefinition::new("tackle", "Tackle"), 1)])
        }),
    );
    let roster = Roster::from_encounter(&party, &troop).expect("valid roster");
    Battle::new(roster, seed)
}

fn driver(enemies: usize, seed: u64, knockout_hits: u32, round_limit: Option<u32>) -> BattleDriver {
    BattleDriver::builder()
        .battle(battle(enemies, seed))
        .resolver(LoggingResolver::new(Autopilot::new(seed), knockout_hits))
        .battle_config(BattleConfig::with_round_limit(round_limit))
        .client_config(&fast())
        .build()
        .expect("driver")
}

#[test]
fn builder_requires_a_battle() {
    let err = DriverBuilder::new()
        .resolver(LoggingResolver::new(Autopilot::new(0), 0))
        .build()
        .err()
        .expect("missing battle");
    assert_eq!(err.to_string(), "Battle is required");
}

#[test]
fn cues_hold_the_battle_back() {
    let mut driver = driver(1, 5, 0, None);
    assert_eq!(driver.battle().state(), BattleState::Ongoing);

    // battle start, then enemy decision queues one prepare cue
    assert!(driver.step().expect("tick"));
    assert!(driver.step().expect("tick"));
    assert_eq!(driver.battle().phase_kind(), Some(PhaseKind::ActionExecution));

    // the cue is played, the battle does not move
    assert!(driver.step().expect("tick"));
    let phase = driver.battle().phase().expect("phase");
    assert_eq!(phase.kind(), PhaseKind::ActionExecution);
    assert!(!phase.has_started());

    assert!(driver.step().expect("tick"));
    assert!(!driver.battle().phase().expect("phase").has_started());
    assert_eq!(driver.battle().phase_kind(), Some(PhaseKind::PlayerDecision));
}

#[tokio::test]
async fn round_limit_ends_in_a_draw() {
    let result = driver(2, 3, 0, Some(2)).run().await.expect("run");

    assert_eq!(
        result,
        BattleOverResult {
            outcome: BattleOutcome::Draw,
            rounds: 2,
        }
    );
}

#[tokio::test]
async fn knockouts_decide_the_battle() {
    let result = driver(3, 11, 1, None).run().await.expect("run");

    assert!(matches!(
        result.outcome,
        BattleOutcome::Victory | BattleOutcome::Defeat
    ));
    assert!(result.rounds >= 1);
}

#[tokio::test]
async fn tick_budget_calls_a_draw() {
    let config = ClientConfig {
        max_ticks: 20,
        ..fast()
    };
    let driver = BattleDriver::builder()
        .battle(battle(1, 9))
        .resolver(LoggingResolver::new(Autopilot::new(9), 0))
        .battle_config(BattleConfig::with_round_limit(None))
        .client_config(&config)
        .build()
        .expect("driver");

    let result = driver.run().await.expect("run");
    assert_eq!(result.outcome, BattleOutcome::Draw);
}

#[tokio::test]
async fn shipped_content_plays_to_the_end() {
    let config = ClientConfig {
        data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/data")),
        seed: Some(1234),
        ..fast()
    };

    let driver = driver_from_config(&config).expect("content loads");
    let result = driver.run().await.expect("run");
    assert!(result.rounds >= 1);
}
