// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Operator walkthrough over a fixed list of names.
//!
//! Each method returns a descriptor showing one operator. The async
//! splitters delay every letter through the injected [`Timer`], so tests can
//! swap in a paused or immediate clock.

use reflux_rx::{Flux, Mono, Timer};
use std::time::Duration;

const NAMES: [&str; 4] = ["victor", "felipe", "joko", "peras"];
const SYLLABLES: [&str; 2] = ["vi", "fe"];

/// How long the async splitters hold back each letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayPolicy {
    /// A fresh uniform draw in `[0, max)` for every split.
    Random { max: Duration },
    Fixed(Duration),
}

impl DelayPolicy {
    pub fn next_delay(&self) -> Duration {
        match *self {
            Self::Random { max } => {
                let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
                if max_ms == 0 {
                    Duration::ZERO
                } else {
                    Duration::from_millis(fastrand::u64(0..max_ms))
                }
            }
            Self::Fixed(delay) => delay,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NameGenerator<Tm> {
    timer: Tm,
    delay: DelayPolicy,
}

impl<Tm: Timer> NameGenerator<Tm> {
    pub fn new(timer: Tm, delay: DelayPolicy) -> Self {
        Self { timer, delay }
    }

    pub fn names_flux(&self) -> Flux<String> {
        strings(&NAMES).log("names")
    }

    pub fn names_mono(&self) -> Mono<String> {
        Mono::just("victor".to_string()).log("name")
    }

    pub fn names_flux_map(&self) -> Flux<String> {
        strings(&NAMES).map(|name| name.to_uppercase()).log("names-map")
    }

    /// Names with exactly `length` characters.
    pub fn names_flux_filter(&self, length: usize) -> Flux<String> {
        strings(&NAMES).filter(move |name| name.len() == length)
    }

    /// Returns the source unchanged: the mapped descriptor is dropped.
    pub fn names_flux_immutability(&self) -> Flux<String> {
        let names = strings(&NAMES);
        let _ = names.map(|name| name.to_uppercase());
        names
    }

    pub fn names_flux_flat_map(&self) -> Flux<String> {
        strings(&SYLLABLES)
            .map(|syllable| syllable.to_uppercase())
            .flat_map(|syllable| split_string(&syllable))
            .log("names-flat-map")
    }

    /// Letters of every syllable; syllables interleave by their delays.
    pub fn names_flux_flat_map_async(&self) -> Flux<String> {
        let generator = self.clone();
        strings(&SYLLABLES)
            .map(|syllable| syllable.to_uppercase())
            .flat_map(move |syllable| generator.split_string_async(&syllable))
            .log("names-flat-map-async")
    }

    /// Letters of every syllable, in syllable order whatever the delays.
    pub fn names_flux_concat_map(&self) -> Flux<String> {
        let generator = self.clone();
        strings(&SYLLABLES)
            .map(|syllable| syllable.to_uppercase())
            .concat_map(move |syllable| generator.split_string_async(&syllable))
            .log("names-concat-map")
    }

    /// The letters of `VICTOR` as one list, or empty when it is not longer
    /// than `length`.
    pub fn names_mono_filter_flat_map(&self, length: usize) -> Mono<Vec<String>> {
        uppercase_name(length).flat_map(|name| Mono::just(letters(&name)))
    }

    /// The letters of `VICTOR` one by one, or nothing when it is not longer
    /// than `length`.
    pub fn names_mono_filter_flat_map_many(&self, length: usize) -> Flux<String> {
        uppercase_name(length).flat_map_many(|name| split_string(&name))
    }

    /// Letters of the syllables that are longer than `length` once
    /// upper-cased, through a reusable map+filter pipeline.
    pub fn names_flux_transform(&self, length: usize) -> Flux<String> {
        let long_upper = move |flux: Flux<String>| {
            flux.map(|name| name.to_uppercase())
                .filter(move |name| name.len() > length)
        };
        strings(&SYLLABLES)
            .transform(long_upper)
            .flat_map(|name| split_string(&name))
    }

    /// `A B C`, then `D E`, then `F`.
    pub fn explore_concat(&self) -> Flux<String> {
        let abc = strings(&["A", "B", "C"]);
        let de = strings(&["D", "E"]);
        Flux::concat([abc, de]).concat_with(&Flux::just("F".to_string()))
    }

    /// One descriptor per letter delay, drawn now from the delay policy.
    pub fn split_string_async(&self, name: &str) -> Flux<String> {
        split_string(name).delay_elements(self.delay.next_delay(), self.timer.clone())
    }
}

/// Emits the letters of `name` in order.
pub fn split_string(name: &str) -> Flux<String> {
    Flux::from_iterable(letters(name))
}

fn letters(name: &str) -> Vec<String> {
    name.chars().map(String::from).collect()
}

fn strings(items: &[&str]) -> Flux<String> {
    Flux::from_iterable(items.iter().map(|item| (*item).to_string()).collect::<Vec<_>>())
}

fn uppercase_name(length: usize) -> Mono<String> {
    Mono::just("victor".to_string())
        .map(|name| name.to_uppercase())
        .filter(move |name| name.len() > length)
}
