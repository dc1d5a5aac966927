//! Tests for the game lifecycle coordinator.

mod common;

use common::{ScriptedConsole, winning_line};
use hit_and_blow::{
    Game, GameProcedure, GameTitle, HitAndBlow, Janken, RegistryError, Secret,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Registry with a seeded engine so tests can predict the secret.
fn seeded_registry(seed: u64) -> HashMap<GameTitle, Box<dyn Game>> {
    let mut registry: HashMap<GameTitle, Box<dyn Game>> = HashMap::new();
    registry.insert(
        GameTitle::HitAndBlow,
        Box::new(HitAndBlow::with_rng(StdRng::seed_from_u64(seed))),
    );
    registry.insert(GameTitle::Janken, Box::new(Janken::new()));
    registry
}

#[tokio::test]
async fn test_full_session_then_exit() {
    let seed = 5;
    let secret = Secret::generate(3, &mut StdRng::seed_from_u64(seed));
    let win = winning_line(&secret);
    let console = ScriptedConsole::new(&["hit-and-blow", "normal", &win, "exit"]);
    let mut procedure = GameProcedure::with_registry(console, seeded_registry(seed));

    procedure.start().await.unwrap();

    let transcript = procedure.console().transcript();
    assert!(transcript.contains("correct! attempts: 1"));
    assert!(transcript.contains("thanks for playing, goodbye\n"));
}

#[tokio::test]
async fn test_play_again_reuses_the_selected_game() {
    let seed = 31;
    let mut mirror = StdRng::seed_from_u64(seed);
    let first = Secret::generate(3, &mut mirror);
    let second = Secret::generate(3, &mut mirror);
    let win_first = winning_line(&first);
    let win_second = winning_line(&second);
    let console = ScriptedConsole::new(&[
        "hit-and-blow",
        "normal",
        &win_first,
        "play-again",
        "normal",
        &win_second,
        "exit",
    ]);
    let mut procedure = GameProcedure::with_registry(console, seeded_registry(seed));

    procedure.start().await.unwrap();

    let transcript = procedure.console().transcript();
    // The title is selected once; replay skips straight to configure.
    assert_eq!(transcript.matches("select a game to play").count(), 1);
    assert_eq!(transcript.matches("correct! attempts: 1").count(), 2);
}

#[tokio::test]
async fn test_unrecognized_title_retries_selection() {
    let console = ScriptedConsole::new(&["chess", "janken", "exit"]);
    let mut procedure = GameProcedure::new(console);

    procedure.start().await.unwrap();

    let transcript = procedure.console().transcript();
    assert_eq!(transcript.matches("select a game to play").count(), 2);
    assert!(transcript.contains("janken is not playable yet"));
}

#[tokio::test]
async fn test_title_prompt_layout() {
    let console = ScriptedConsole::new(&["janken", "exit"]);
    let mut procedure = GameProcedure::new(console);

    procedure.start().await.unwrap();

    let transcript = procedure.console().transcript();
    assert!(transcript.contains("\nselect a game to play\n- hit-and-blow\n- janken\n> "));
    assert!(transcript.contains("\nplay again?\n- play-again\n- exit\n> "));
}

#[tokio::test]
async fn test_missing_registry_entry_is_fatal() {
    // A registry that lies about its coverage is a programming defect;
    // the coordinator must surface it, not recover.
    let mut registry: HashMap<GameTitle, Box<dyn Game>> = HashMap::new();
    registry.insert(GameTitle::Janken, Box::new(Janken::new()));
    let console = ScriptedConsole::new(&["hit-and-blow"]);
    let mut procedure = GameProcedure::with_registry(console, registry);

    let error = procedure.start().await.unwrap_err();

    assert!(error.downcast_ref::<RegistryError>().is_some());
}

#[tokio::test]
async fn test_default_registry_covers_every_title() {
    // Both titles resolve and run through their full lifecycle.
    let console = ScriptedConsole::new(&["janken", "play-again", "exit"]);
    let mut procedure = GameProcedure::new(console);

    procedure.start().await.unwrap();

    let transcript = procedure.console().transcript();
    assert_eq!(
        transcript.matches("janken is not playable yet").count(),
        2,
        "replay drives the same registered instance again"
    );
}
