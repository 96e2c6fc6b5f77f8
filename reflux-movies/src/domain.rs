// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Movie, review and the aggregate pairing them.

use chrono::NaiveDate;
use reflux_rx::{ReactiveError, Result};
use serde::{Deserialize, Serialize};

/// Catalog entry for one movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInfo {
    pub movie_id: u64,
    pub movie_info_id: u64,
    pub name: String,
    pub year: u16,
    pub cast: Vec<String>,
    pub release_date: NaiveDate,
}

impl MovieInfo {
    /// # Errors
    /// Returns `Err(ReactiveError::SourceFailure)` if `release_date` is not a
    /// `YYYY-MM-DD` date.
    pub fn new(
        movie_id: u64,
        movie_info_id: u64,
        name: impl Into<String>,
        year: u16,
        cast: &[&str],
        release_date: &str,
    ) -> Result<Self> {
        let name = name.into();
        let release_date = NaiveDate::parse_from_str(release_date, "%Y-%m-%d").map_err(|e| {
            ReactiveError::source_failure(format!("invalid release date for {name}: {e}"))
        })?;
        Ok(Self {
            movie_id,
            movie_info_id,
            name,
            year,
            cast: cast.iter().map(|member| (*member).to_string()).collect(),
            release_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub review_id: u64,
    pub movie_id: u64,
    pub comment: String,
    pub rating: f64,
}

impl Review {
    pub fn new(review_id: u64, movie_id: u64, comment: impl Into<String>, rating: f64) -> Self {
        Self {
            review_id,
            movie_id,
            comment: comment.into(),
            rating,
        }
    }
}

/// A movie together with all of its reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: u64,
    pub movie_info: MovieInfo,
    pub reviews: Vec<Review>,
}

impl Movie {
    pub fn new(movie_info: MovieInfo, reviews: Vec<Review>) -> Self {
        Self {
            movie_id: movie_info.movie_id,
            movie_info,
            reviews,
        }
    }
}
