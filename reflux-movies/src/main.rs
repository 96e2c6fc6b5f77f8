// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reflux_movies::{
    CatalogMovieInfoService, InMemoryReviewService, MovieReactiveService, MoviesConfig,
    NameGenerator,
};
use reflux_rx::{SubscribeExt, SubscriptionState, TokioTimer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let override_path = std::env::args().nth(1).map(PathBuf::from);
    let config = MoviesConfig::load_with_override(override_path.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting movie aggregation demo");

    let generator = NameGenerator::new(TokioTimer, config.delay_policy());
    let letters = generator
        .names_flux_flat_map()
        .subscribe_fn(|letter| println!("{letter}"))
        .join()
        .await?;
    info!("Letters subscription ended: {:?}", letters);

    let service = MovieReactiveService::with_config(
        Arc::new(CatalogMovieInfoService::batman()?),
        Arc::new(InMemoryReviewService::batman()),
        &config,
    );
    let movies = service
        .get_all_movies()
        .subscribe_fn(|movie| {
            println!(
                "{} ({}) - {} reviews",
                movie.movie_info.name,
                movie.movie_info.year,
                movie.reviews.len()
            );
        })
        .join()
        .await?;

    if movies != SubscriptionState::Completed {
        anyhow::bail!("movie subscription ended in state {movies:?}");
    }
    info!("Demo finished");
    Ok(())
}
