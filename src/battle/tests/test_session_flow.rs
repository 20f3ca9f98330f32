use crate::battle::policy::ScoringPolicy;
use crate::battle::session::{BattlePhase, BattleSession};
use crate::battle::tests::common::*;
use crate::errors::BattleError;
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn start_session(player: crate::team::Team, gym: crate::team::Team) -> BattleSession {
    let dex = test_dex();
    BattleSession::start(Uuid::new_v4(), player, gym, &dex).unwrap()
}

#[test]
fn starting_a_battle_fully_heals_both_sides() {
    let dex = test_dex();

    // Teams arrive battered from an earlier battle.
    let mut player_member = TestMemberBuilder::new(PIKACHU)
        .with_moves(vec![THUNDERBOLT])
        .with_pp(0, 0)
        .build(&dex);
    player_member.current_hp = 0;
    let gym_member = TestMemberBuilder::new(GEODUDE)
        .with_moves(vec![ROCK_THROW])
        .with_hp(1)
        .with_pp(0, 2)
        .build(&dex);

    let player = player_team(vec![player_member]);
    let gym = gym_team(vec![gym_member]);

    let session = start_session(player, gym);

    let player_active = session.player_team.active_member();
    assert_eq!(player_active.current_hp, player_active.max_hp);
    assert_eq!(player_active.move_slot(0).unwrap().pp, 15);

    let gym_active = session.gym_team.active_member();
    assert_eq!(gym_active.current_hp, gym_active.max_hp);
    assert_eq!(gym_active.move_slot(0).unwrap().pp, 15);

    assert_eq!(session.phase, BattlePhase::AwaitingMove);
    assert_eq!(session.turn_number, 0);
}

#[test]
fn reset_is_idempotent_across_battles() {
    let dex = test_dex();
    let player = player_team(vec![TestMemberBuilder::new(PIKACHU)
        .with_moves(vec![THUNDERBOLT])
        .build(&dex)]);
    let gym = gym_team(vec![TestMemberBuilder::new(GYARADOS)
        .with_moves(vec![TACKLE])
        .build(&dex)]);

    // First battle runs to victory.
    let mut first = start_session(player.clone(), gym.clone());
    let report = first
        .play_turn(0, &dex, &ScoringPolicy::new())
        .unwrap();
    assert_eq!(report.phase, BattlePhase::Victory);

    // A fresh session over the same teams starts at full HP and PP again.
    let second = start_session(player, gym);
    let gym_active = second.gym_team.active_member();
    assert_eq!(gym_active.current_hp, gym_active.max_hp);
    assert_eq!(
        second.player_team.active_member().move_slot(0).unwrap().pp,
        15
    );
}

#[test]
fn a_full_round_returns_to_awaiting_move() {
    let dex = test_dex();
    // Tackle back and forth; nobody faints in one round.
    let session_player = player_team(vec![TestMemberBuilder::new(SQUIRTLE)
        .with_moves(vec![TACKLE])
        .build(&dex)]);
    let session_gym = gym_team(vec![TestMemberBuilder::new(GEODUDE)
        .with_moves(vec![TACKLE])
        .build(&dex)]);

    let mut session = start_session(session_player, session_gym);
    let report = session.play_turn(0, &dex, &ScoringPolicy::new()).unwrap();

    assert_eq!(report.phase, BattlePhase::AwaitingMove);
    assert_eq!(report.turn_number, 1);
    assert_eq!(session.turn_number, 1);
    // Both sides acted: two attack lines.
    assert_eq!(report.events.len(), 2);
    assert!(report.player_active_hp < session.player_team.active_member().max_hp);
    assert!(report.gym_active_hp < session.gym_team.active_member().max_hp);
}

#[test]
fn knocking_out_the_last_gym_member_is_victory() {
    let dex = test_dex();
    // Thunderbolt is 4x against Gyarados: a guaranteed one-shot.
    let player = player_team(vec![TestMemberBuilder::new(PIKACHU)
        .with_moves(vec![THUNDERBOLT])
        .build(&dex)]);
    let gym = gym_team(vec![TestMemberBuilder::new(GYARADOS)
        .with_moves(vec![TACKLE])
        .build(&dex)]);

    let mut session = start_session(player, gym);
    let report = session.play_turn(0, &dex, &ScoringPolicy::new()).unwrap();

    assert_eq!(report.phase, BattlePhase::Victory);
    assert!(report.events.contains(&"Gyarados fainted!".to_string()));
    assert!(report.events.contains(&"You defeated Brock!".to_string()));
    // The gym leader gets no reply turn after the battle ends.
    assert_eq!(
        session.player_team.active_member().current_hp,
        session.player_team.active_member().max_hp
    );

    // Terminal sessions accept no further moves.
    assert_eq!(
        session.play_turn(0, &dex, &ScoringPolicy::new()),
        Err(BattleError::SessionTerminated)
    );
}

#[test]
fn gym_knockout_forces_a_switch_to_the_next_healthy_member() {
    let dex = test_dex();
    let player = player_team(vec![TestMemberBuilder::new(PIKACHU)
        .with_moves(vec![THUNDERBOLT])
        .build(&dex)]);
    // Growl replies keep the player's Pikachu standing through the round.
    let gym = gym_team(vec![
        TestMemberBuilder::new(GYARADOS)
            .with_moves(vec![GROWL])
            .build(&dex),
        TestMemberBuilder::new(GEODUDE)
            .with_moves(vec![GROWL])
            .build(&dex),
    ]);

    let mut session = start_session(player, gym);
    let report = session.play_turn(0, &dex, &ScoringPolicy::new()).unwrap();

    assert_eq!(report.phase, BattlePhase::AwaitingMove);
    assert!(report
        .events
        .contains(&"Brock sent out Geodude!".to_string()));
    assert_eq!(session.gym_team.active_index(), 1);
    // The replacement already fought back this round.
    assert_eq!(report.events.len(), 4);
}

#[test]
fn losing_the_last_member_is_defeat() {
    let dex = test_dex();
    // Growl deals nothing; Water Gun one-shots a Charmander (80 vs 39 HP).
    let player = player_team(vec![
        TestMemberBuilder::new(CHARMANDER)
            .with_moves(vec![GROWL])
            .build(&dex),
        TestMemberBuilder::new(CHARMANDER)
            .with_moves(vec![GROWL])
            .build(&dex),
    ]);
    let gym = gym_team(vec![TestMemberBuilder::new(GYARADOS)
        .with_moves(vec![WATER_GUN])
        .build(&dex)]);

    let mut session = start_session(player, gym);

    // Round one: the first Charmander goes down, the second is forced in.
    let report = session.play_turn(0, &dex, &ScoringPolicy::new()).unwrap();
    assert_eq!(report.phase, BattlePhase::AwaitingMove);
    assert!(report.events.contains(&"Charmander fainted!".to_string()));
    assert!(report.events.contains(&"Go, Charmander!".to_string()));
    assert_eq!(session.player_team.active_index(), 1);

    // Round two: the roster is exhausted.
    let report = session.play_turn(0, &dex, &ScoringPolicy::new()).unwrap();
    assert_eq!(report.phase, BattlePhase::Defeat);
    assert!(report
        .events
        .contains(&"Brock wins the battle!".to_string()));

    assert_eq!(
        session.play_turn(0, &dex, &ScoringPolicy::new()),
        Err(BattleError::SessionTerminated)
    );
}

#[test]
fn gym_with_no_usable_move_surfaces_an_error() {
    let dex = test_dex();
    let player = player_team(vec![TestMemberBuilder::new(SQUIRTLE)
        .with_moves(vec![GROWL])
        .build(&dex)]);
    let mut gym = gym_team(vec![TestMemberBuilder::new(GEODUDE)
        .with_moves(vec![TACKLE])
        .build(&dex)]);
    gym.active_member_mut().moves[0].as_mut().unwrap().pp = 0;

    // start() would refill the gym's PP, so build the session directly.
    let mut session = BattleSession {
        id: Uuid::new_v4(),
        player_team: player,
        gym_team: gym,
        turn_number: 0,
        phase: BattlePhase::AwaitingMove,
    };

    assert_eq!(
        session.play_turn(0, &dex, &ScoringPolicy::new()),
        Err(BattleError::NoUsableMove)
    );
}
