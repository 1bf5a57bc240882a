//! Unit tests for the race participant progress loop.

use racetracker::racing::{ParticipantConfig, RaceError, RaceParticipant};
use std::time::Duration;

fn create_test_participant() -> RaceParticipant {
    RaceParticipant::new(
        "Test",
        ParticipantConfig {
            max_progress: 100,
            progress_delay: Duration::from_millis(500),
            progress_increment: 1,
            initial_progress: 0,
        },
    )
    .expect("Should create participant")
}

async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

async fn advance_ticks(participant: &RaceParticipant, ticks: usize) {
    for _ in 0..ticks {
        tokio::time::advance(participant.progress_delay()).await;
        settle().await;
    }
}

fn spawn_run(participant: &RaceParticipant) -> tokio::task::JoinHandle<()> {
    let participant = participant.clone();
    tokio::spawn(async move { participant.run().await })
}

#[tokio::test(start_paused = true)]
async fn test_race_started_progress_updated() {
    let participant = create_test_participant();
    let racer = spawn_run(&participant);
    settle().await;

    advance_ticks(&participant, 1).await;

    assert_eq!(participant.current_progress(), 1);
    racer.abort();
}

#[tokio::test(start_paused = true)]
async fn test_race_finished_progress_updated() {
    let participant = create_test_participant();
    let racer = spawn_run(&participant);
    settle().await;

    advance_ticks(&participant, participant.max_progress() as usize).await;

    assert_eq!(participant.current_progress(), 100);
    assert!(racer.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_race_paused_progress_kept() {
    let participant = create_test_participant();
    let racer = spawn_run(&participant);
    settle().await;

    advance_ticks(&participant, 5).await;
    racer.abort();
    assert!(racer.await.unwrap_err().is_cancelled());

    assert_eq!(participant.current_progress(), 5);

    // No further ticks once cancelled
    advance_ticks(&participant, 3).await;
    assert_eq!(participant.current_progress(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_race_paused_and_resumed_progress_updated() {
    let participant = create_test_participant();

    for _ in 0..2 {
        let racer = spawn_run(&participant);
        settle().await;
        advance_ticks(&participant, 5).await;
        racer.abort();
        let _ = racer.await;
    }

    assert_eq!(participant.current_progress(), 10);
}

#[tokio::test(start_paused = true)]
async fn test_reset_after_progress() {
    let participant = create_test_participant();
    let racer = spawn_run(&participant);
    settle().await;
    advance_ticks(&participant, 7).await;
    racer.abort();
    let _ = racer.await;

    participant.reset();

    assert_eq!(participant.current_progress(), 0);
    assert_eq!(participant.progress_factor(), 0.0);
}

#[test]
fn test_construction_keeps_initial_progress() {
    for (max_progress, progress_increment, initial_progress) in [(1, 1, 0), (100, 3, 50), (7, 9, 7)] {
        let participant = RaceParticipant::new(
            "Valid",
            ParticipantConfig::default()
                .with_max_progress(max_progress)
                .with_increment(progress_increment)
                .with_initial_progress(initial_progress),
        )
        .expect("Valid configuration");
        assert_eq!(participant.current_progress(), initial_progress);
    }
}

#[test]
fn test_progress_increment_zero_rejected() {
    let result = RaceParticipant::new(
        "Progress Test",
        ParticipantConfig::default().with_increment(0),
    );
    assert!(matches!(result, Err(RaceError::InvalidConfiguration(_))));
}

#[test]
fn test_max_progress_zero_rejected() {
    let result = RaceParticipant::new(
        "Progress Test",
        ParticipantConfig::default().with_max_progress(0),
    );
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Invalid configuration: max_progress=0; must be > 0");
}

#[test]
fn test_negative_max_progress_rejected() {
    let result = RaceParticipant::new(
        "Progress Test",
        ParticipantConfig::default().with_max_progress(-10),
    );
    assert!(result.is_err());
}

#[test]
fn test_reset_is_idempotent() {
    let participant = create_test_participant();
    participant.reset();
    participant.reset();
    assert_eq!(participant.current_progress(), 0);
}
