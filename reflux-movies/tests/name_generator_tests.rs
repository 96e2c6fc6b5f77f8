// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_movies::{split_string, DelayPolicy, NameGenerator};
use reflux_rx::{ImmediateTimer, SubscribeExt, TokioTimer};
use reflux_test_utils::StepVerifier;
use std::time::Duration;

fn immediate() -> NameGenerator<ImmediateTimer> {
    NameGenerator::new(ImmediateTimer, DelayPolicy::Fixed(Duration::ZERO))
}

fn upper(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

#[tokio::test]
async fn test_names_flux() {
    let generator = immediate();

    StepVerifier::create(&generator.names_flux())
        .expect_next_values(upper(&["victor", "felipe", "joko", "peras"]))
        .verify_complete()
        .await;
    StepVerifier::create(&generator.names_flux())
        .expect_next_count(4)
        .verify_complete()
        .await;
    StepVerifier::create(&generator.names_flux())
        .expect_next("victor".to_string())
        .expect_next_count(3)
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_mono() {
    StepVerifier::create(&immediate().names_mono())
        .expect_next("victor".to_string())
        .expect_next_count(0)
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_flux_map() {
    StepVerifier::create(&immediate().names_flux_map())
        .expect_next_values(upper(&["VICTOR", "FELIPE", "JOKO", "PERAS"]))
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_flux_immutability() {
    StepVerifier::create(&immediate().names_flux_immutability())
        .expect_next_values(upper(&["victor", "felipe", "joko", "peras"]))
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_flux_filter() {
    let generator = immediate();

    StepVerifier::create(&generator.names_flux_filter(4))
        .expect_next("joko".to_string())
        .verify_complete()
        .await;
    StepVerifier::create(&generator.names_flux_filter(10))
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_flux_flat_map() -> anyhow::Result<()> {
    // Arrange
    let flux = immediate().names_flux_flat_map();

    // Act
    let (mut letters, error) = flux.collect_signals().await;
    letters.sort();

    // Assert
    assert!(error.is_none());
    assert_eq!(letters, upper(&["E", "F", "I", "V"]));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_names_flux_flat_map_async_emits_all_letters() {
    // Arrange
    let generator = NameGenerator::new(
        TokioTimer,
        DelayPolicy::Random {
            max: Duration::from_millis(1000),
        },
    );

    // Act & Assert
    StepVerifier::create(&generator.names_flux_flat_map_async())
        .expect_next_count(4)
        .verify_complete()
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_names_flux_concat_map_keeps_order_under_random_delays() {
    // Arrange
    let generator = NameGenerator::new(
        TokioTimer,
        DelayPolicy::Random {
            max: Duration::from_millis(1000),
        },
    );

    // Act & Assert
    for _ in 0..5 {
        StepVerifier::create(&generator.names_flux_concat_map())
            .expect_next_values(upper(&["V", "I", "F", "E"]))
            .verify_complete()
            .await;
    }
}

#[tokio::test]
async fn test_names_mono_filter_flat_map() {
    let generator = immediate();

    StepVerifier::create(&generator.names_mono_filter_flat_map(3))
        .expect_next(upper(&["V", "I", "C", "T", "O", "R"]))
        .verify_complete()
        .await;
    StepVerifier::create(&generator.names_mono_filter_flat_map(6))
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_mono_filter_flat_map_many() {
    StepVerifier::create(&immediate().names_mono_filter_flat_map_many(3))
        .expect_next_values(upper(&["V", "I", "C", "T", "O", "R"]))
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_names_flux_transform() {
    let generator = immediate();

    StepVerifier::create(&generator.names_flux_transform(3))
        .verify_complete()
        .await;
    StepVerifier::create(&generator.names_flux_transform(1))
        .expect_next_count(4)
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_explore_concat() {
    StepVerifier::create(&immediate().explore_concat())
        .expect_next_values(upper(&["A", "B", "C"]))
        .expect_next_values(upper(&["D", "E"]))
        .expect_next("F".to_string())
        .verify_complete()
        .await;
}

#[tokio::test]
async fn test_split_string() {
    StepVerifier::create(&split_string("vi"))
        .expect_next_values(upper(&["v", "i"]))
        .verify_complete()
        .await;
}

#[tokio::test(start_paused = true)]
async fn test_split_string_async_applies_fixed_delay() {
    // Arrange
    let generator = NameGenerator::new(TokioTimer, DelayPolicy::Fixed(Duration::from_millis(200)));
    let start = tokio::time::Instant::now();

    // Act
    StepVerifier::create(&generator.split_string_async("FE"))
        .expect_next_values(upper(&["F", "E"]))
        .verify_complete()
        .await;

    // Assert
    assert!(start.elapsed() >= Duration::from_millis(400));
}

#[test]
fn test_delay_policy_bounds() {
    let random = DelayPolicy::Random {
        max: Duration::from_millis(50),
    };

    for _ in 0..100 {
        assert!(random.next_delay() < Duration::from_millis(50));
    }
    assert_eq!(
        DelayPolicy::Random { max: Duration::ZERO }.next_delay(),
        Duration::ZERO
    );
    assert_eq!(
        DelayPolicy::Fixed(Duration::from_millis(7)).next_delay(),
        Duration::from_millis(7)
    );
}
