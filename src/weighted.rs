//! Weighted random selection.
//!
//! Every adapter funnels into one cumulative-weight walk: draw `r` uniformly
//! in `[0, total)` and return the first item whose running weight sum exceeds
//! `r`. Invalid input (no items, mismatched lengths, a negative or
//! non-finite weight, a zero total) yields `None` instead of a pick.
//!
//! The selection source is fast and NOT suitable for security decisions.

use rand::{thread_rng, Rng};
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use tracing::debug;



/// Exposes the relative weight of an item.
pub trait Weighted {
    fn weight(&self) -> f64;
}


impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}


impl<T> Weighted for (T, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}


impl<W: Weighted + ?Sized> Weighted for &W {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}



#[derive(Debug, Clone, Copy, PartialEq)]
enum Rejection {
    Empty,
    LengthMismatch { items: usize, weights: usize },
    InvalidWeight { index: usize, weight: f64 },
    ZeroTotal,
}


impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "no items"),
            Rejection::LengthMismatch { items, weights } => {
                write!(f, "{} items but {} weights", items, weights)
            }
            Rejection::InvalidWeight { index, weight } => {
                write!(f, "weight {} at position {} is negative or not finite", weight, index)
            }
            Rejection::ZeroTotal => write!(f, "all weights are zero"),
        }
    }
}


fn cumulative_index<R, I>(rng: &mut R, weights: I) -> Result<usize, Rejection>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let weights = weights.into_iter();

    let mut total = 0.0;
    let mut largest: f64 = 0.0;
    let mut count = 0;
    let mut last_positive = None;
    for (index, weight) in weights.clone().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Rejection::InvalidWeight { index, weight });
        }
        if weight > 0.0 {
            last_positive = Some(index);
        }
        largest = largest.max(weight);
        total += weight;
        count += 1;
    }

    if count == 0 {
        return Err(Rejection::Empty);
    }
    let Some(fallback) = last_positive else {
        return Err(Rejection::ZeroTotal);
    };

    // finite weights can still sum past f64::MAX; relative to the largest
    // weight every term is <= 1 and the sum stays finite
    let scale = if total.is_finite() { 1.0 } else { largest };
    if scale != 1.0 {
        total = weights.clone().map(|weight| weight / scale).sum();
    }

    let r = rng.gen_range(0.0..total);
    let mut acc = 0.0;
    for (index, weight) in weights.enumerate() {
        acc += weight / scale;
        if r < acc {
            return Ok(index);
        }
    }

    // rounding left r at or above the final running sum
    Ok(fallback)
}


fn accept(shape: &'static str, outcome: Result<usize, Rejection>) -> Option<usize> {
    match outcome {
        Ok(index) => Some(index),
        Err(rejection) => {
            debug!(target: "weighted_selector", shape, "Rejected weighted input: {}", rejection);
            None
        }
    }
}



pub(crate) fn pick_weighted_with_rng<'a, T, R>(rng: &mut R, items: &'a [T], weights: &[f64]) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let outcome = if items.len() != weights.len() {
        Err(Rejection::LengthMismatch { items: items.len(), weights: weights.len() })
    } else {
        cumulative_index(rng, weights.iter().copied())
    };

    accept("slice", outcome).map(|index| &items[index])
}


pub(crate) fn pick_by_weight_with_rng<'a, T, R>(rng: &mut R, items: &'a [T]) -> Option<&'a T>
where
    T: Weighted,
    R: Rng + ?Sized,
{
    let outcome = cumulative_index(rng, items.iter().map(Weighted::weight));
    accept("weighted_slice", outcome).map(|index| &items[index])
}


pub(crate) fn pick_map_key_with_rng<'a, R, S>(rng: &mut R, items: &'a HashMap<String, f64, S>) -> Option<&'a str>
where
    R: Rng + ?Sized,
    S: BuildHasher,
{
    // iteration order of an unmodified map is stable between the two walks
    let outcome = cumulative_index(rng, items.values().copied());
    accept("map", outcome).and_then(|index| items.keys().nth(index)).map(String::as_str)
}



// Main functions ==============================

/// Picks one of `items`, where `weights[i]` is the relative weight of
/// `items[i]`. Weights need not sum to any particular value.
///
/// Returns `None` when the slices are empty or differ in length, when any
/// weight is negative or not finite, or when all weights are zero.
pub fn pick_weighted<'a, T>(items: &'a [T], weights: &[f64]) -> Option<&'a T> {
    pick_weighted_with_rng(&mut thread_rng(), items, weights)
}


/// Like [`pick_weighted`], with each item carrying its own weight.
pub fn pick_by_weight<T: Weighted>(items: &[T]) -> Option<&T> {
    pick_by_weight_with_rng(&mut thread_rng(), items)
}


/// Picks a key of `items` with probability proportional to its value.
///
/// Map iteration order is unspecified, so only the distribution of picks is
/// meaningful, never a particular sequence.
pub fn pick_map_key<S: BuildHasher>(items: &HashMap<String, f64, S>) -> Option<&str> {
    pick_map_key_with_rng(&mut thread_rng(), items)
}


/// Same selection as [`pick_map_key`]. Values are treated as relative
/// weights; they are not required to add up to 100.
pub fn pick_map_key_percent<S: BuildHasher>(items: &HashMap<String, f64, S>) -> Option<&str> {
    pick_map_key_with_rng(&mut thread_rng(), items)
}
