// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Movie catalog services composed from reflux streams.
//!
//! - [`MovieReactiveService`] pairs every movie with its reviews
//! - [`NameGenerator`] walks through the operators on a list of names
//! - [`MoviesConfig`] holds retry, delay and logging settings

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod config;
pub mod domain;
pub mod movie_service;
pub mod name_generator;
pub mod providers;

pub use config::{ConfigError, MoviesConfig};
pub use domain::{Movie, MovieInfo, Review};
pub use movie_service::{MovieReactiveService, AGGREGATION_FAILED};
pub use name_generator::{split_string, DelayPolicy, NameGenerator};
pub use providers::{
    CatalogMovieInfoService, InMemoryReviewService, MovieInfoService, ReviewService,
};
