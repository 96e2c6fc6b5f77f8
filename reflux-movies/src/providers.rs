// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Data providers consumed by [`MovieReactiveService`](crate::MovieReactiveService).
//!
//! Providers hand out descriptors, not data: nothing is read until the
//! returned `Flux`/`Mono` is subscribed.

use crate::domain::{MovieInfo, Review};
use reflux_rx::{Flux, Mono, Result};
use std::collections::BTreeMap;

pub trait MovieInfoService: Send + Sync {
    /// Every movie in the catalog, in catalog order.
    fn movie_info_flux(&self) -> Flux<MovieInfo>;

    /// The movie with `movie_id`; empty when there is none.
    fn retrieve_movie_info_mono_using_id(&self, movie_id: u64) -> Mono<MovieInfo>;
}

pub trait ReviewService: Send + Sync {
    /// All reviews of `movie_id`, possibly none.
    fn retrieve_reviews_flux(&self, movie_id: u64) -> Flux<Review>;
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone)]
pub struct CatalogMovieInfoService {
    movies: Vec<MovieInfo>,
}

impl CatalogMovieInfoService {
    pub fn new(movies: Vec<MovieInfo>) -> Self {
        Self { movies }
    }

    /// The three Batman movies.
    ///
    /// # Errors
    /// Fails only if one of the built-in release dates is malformed.
    pub fn batman() -> Result<Self> {
        Ok(Self::new(vec![
            MovieInfo::new(
                1,
                100,
                "Batman Begins",
                2005,
                &["Christian Bale", "Michael Cane"],
                "2005-06-15",
            )?,
            MovieInfo::new(
                2,
                101,
                "The Dark Knight",
                2008,
                &["Christian Bale", "Heath Ledger"],
                "2008-07-18",
            )?,
            MovieInfo::new(
                3,
                102,
                "Dark Knight Rises",
                2012,
                &["Christian Bale", "Tom Hardy"],
                "2012-07-20",
            )?,
        ]))
    }
}

impl MovieInfoService for CatalogMovieInfoService {
    fn movie_info_flux(&self) -> Flux<MovieInfo> {
        Flux::from_iterable(self.movies.clone())
    }

    fn retrieve_movie_info_mono_using_id(&self, movie_id: u64) -> Mono<MovieInfo> {
        match self.movies.iter().find(|movie| movie.movie_id == movie_id) {
            Some(movie) => Mono::just(movie.clone()),
            None => Mono::empty(),
        }
    }
}

/// Reviews kept in memory, grouped by movie.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewService {
    reviews: BTreeMap<u64, Vec<Review>>,
}

impl InMemoryReviewService {
    pub fn new<I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = Review>,
    {
        let mut by_movie: BTreeMap<u64, Vec<Review>> = BTreeMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { reviews: by_movie }
    }

    /// Two reviews for each of the Batman movies.
    pub fn batman() -> Self {
        Self::new([
            Review::new(1, 1, "Awesome Movie", 8.9),
            Review::new(2, 1, "Excellent Movie", 9.0),
            Review::new(3, 2, "Heath Ledger steals the show", 9.5),
            Review::new(4, 2, "Great sequel", 9.1),
            Review::new(5, 3, "Solid ending", 8.4),
            Review::new(6, 3, "Tom Hardy as Bane", 8.0),
        ])
    }
}

impl ReviewService for InMemoryReviewService {
    fn retrieve_reviews_flux(&self, movie_id: u64) -> Flux<Review> {
        match self.reviews.get(&movie_id) {
            Some(reviews) => Flux::from_iterable(reviews.clone()),
            None => Flux::empty(),
        }
    }
}
