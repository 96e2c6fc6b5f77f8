// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Aggregation of movie infos with their reviews.
//!
//! ```
//! use reflux_movies::{CatalogMovieInfoService, InMemoryReviewService, MovieReactiveService};
//! use reflux_rx::SubscribeExt;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let service = MovieReactiveService::new(
//!     Arc::new(CatalogMovieInfoService::batman()?),
//!     Arc::new(InMemoryReviewService::batman()),
//! );
//!
//! let (movies, error) = service.get_all_movies().collect_signals().await;
//! assert_eq!(movies.len(), 3);
//! assert!(error.is_none());
//! # Ok(())
//! # }
//! ```

use crate::config::MoviesConfig;
use crate::domain::{Movie, MovieInfo};
use crate::providers::{MovieInfoService, ReviewService};
use reflux_rx::{Flux, Mono, ReactiveError};
use std::sync::Arc;

const DEFAULT_RETRY_ATTEMPTS: usize = 3;

/// Context of the error surfaced when aggregation fails.
pub const AGGREGATION_FAILED: &str = "movie aggregation failed";

#[derive(Clone)]
pub struct MovieReactiveService {
    movie_info_service: Arc<dyn MovieInfoService>,
    review_service: Arc<dyn ReviewService>,
    retry_attempts: usize,
}

impl MovieReactiveService {
    pub fn new(
        movie_info_service: Arc<dyn MovieInfoService>,
        review_service: Arc<dyn ReviewService>,
    ) -> Self {
        Self {
            movie_info_service,
            review_service,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
        }
    }

    pub fn with_config(
        movie_info_service: Arc<dyn MovieInfoService>,
        review_service: Arc<dyn ReviewService>,
        config: &MoviesConfig,
    ) -> Self {
        Self {
            retry_attempts: config.retry.attempts,
            ..Self::new(movie_info_service, review_service)
        }
    }

    /// Every catalog movie paired with its reviews, in catalog order.
    ///
    /// Reviews are fetched one movie at a time. Any provider failure ends
    /// the stream with a `WrappedFailure` whose source is the provider error.
    pub fn get_all_movies(&self) -> Flux<Movie> {
        self.aggregate_movies().log("movies")
    }

    /// [`get_all_movies`](Self::get_all_movies), re-subscribed from the
    /// catalog up to the configured number of times on failure.
    pub fn get_all_movies_retry(&self) -> Flux<Movie> {
        self.aggregate_movies()
            .retry(self.retry_attempts)
            .log("movies-retry")
    }

    /// The movie with `movie_id` and its reviews, fetched concurrently.
    pub fn get_movie_info(&self, movie_id: u64) -> Mono<Movie> {
        let info = self
            .movie_info_service
            .retrieve_movie_info_mono_using_id(movie_id);
        let reviews = self
            .review_service
            .retrieve_reviews_flux(movie_id)
            .collect_list();
        info.zip_with(&reviews, Movie::new)
    }

    /// The movie with `movie_id`, then the reviews of the movie found.
    pub fn get_movie_info_by_id(&self, movie_id: u64) -> Mono<Movie> {
        let review_service = Arc::clone(&self.review_service);
        self.movie_info_service
            .retrieve_movie_info_mono_using_id(movie_id)
            .flat_map(move |info| with_reviews(review_service.as_ref(), info))
    }

    fn aggregate_movies(&self) -> Flux<Movie> {
        let review_service = Arc::clone(&self.review_service);
        self.movie_info_service
            .movie_info_flux()
            .do_on_next(|info| debug!("movie info: {}", info.name))
            .do_on_subscribe(|| debug!("subscribed to movie infos"))
            .concat_map(move |info| with_reviews(review_service.as_ref(), info).flux())
            .on_error_map(|error| {
                error!("{}: {}", AGGREGATION_FAILED, error);
                ReactiveError::wrapped(AGGREGATION_FAILED, error)
            })
            .do_on_next(|movie| debug!("movie: {} ({} reviews)", movie.movie_info.name, movie.reviews.len()))
            .do_on_subscribe(|| debug!("subscribed to movies"))
    }
}

/// Pairs `info` with its reviews. A review failure fails the whole movie.
fn with_reviews(review_service: &dyn ReviewService, info: MovieInfo) -> Mono<Movie> {
    let movie_id = info.movie_id;
    review_service
        .retrieve_reviews_flux(movie_id)
        .collect_list()
        .on_error_map(move |error| {
            ReactiveError::aggregation_failure(format!("reviews for movie {movie_id}"), error)
        })
        .map(move |reviews| Movie::new(info.clone(), reviews))
}
