//! Bounded cache of option chain snapshots.
//!
//! Contract selection looks up expirations and strikes per ticker many times
//! while a user edits a form. Snapshots are kept here, keyed by the
//! normalised ticker, with least-recently-used eviction once `capacity`
//! entries are held.

use crate::types::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default number of tickers kept.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Option chain data needed to pick a contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptionChain {
    /// Expiration dates as delivered by the backend.
    pub expirations: Vec<String>,
    /// Listed strikes.
    pub strikes: Vec<f64>,
    /// Underlying price at fetch time.
    pub current_price: f64,
}

#[derive(Clone, Debug)]
struct Entry {
    chain: OptionChain,
    last_used: u64,
}

/// LRU cache from ticker to [`OptionChain`].
#[derive(Clone, Debug)]
pub struct OptionChainCache {
    entries: HashMap<String, Entry>,
    capacity: usize,
    clock: u64,
}

impl OptionChainCache {
    /// Create a cache holding at most `capacity` tickers.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenerError::ZeroCapacity`] for a capacity of zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ScreenerError::ZeroCapacity);
        }
        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            clock: 0,
        })
    }

    /// Trimmed, upper-cased cache key.
    pub fn normalise(ticker: &str) -> String {
        ticker.trim().to_uppercase()
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Look up a ticker, marking it most recently used.
    pub fn get(&mut self, ticker: &str) -> Option<&OptionChain> {
        let now = self.tick();
        let entry = self.entries.get_mut(&Self::normalise(ticker))?;
        entry.last_used = now;
        Some(&entry.chain)
    }

    /// Look up a ticker without touching recency.
    pub fn peek(&self, ticker: &str) -> Option<&OptionChain> {
        self.entries
            .get(&Self::normalise(ticker))
            .map(|entry| &entry.chain)
    }

    /// Store a snapshot, returning the evicted ticker if one was dropped.
    pub fn insert(&mut self, ticker: &str, chain: OptionChain) -> Option<String> {
        let key = Self::normalise(ticker);
        let now = self.tick();

        let evicted = if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        self.entries.insert(
            key,
            Entry {
                chain,
                last_used: now,
            },
        );
        evicted
    }

    fn evict_oldest(&mut self) -> Option<String> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| key.clone())?;
        self.entries.remove(&oldest);
        tracing::debug!(ticker = %oldest, "Evicted option chain from cache");
        Some(oldest)
    }

    /// Drop one ticker.
    pub fn remove(&mut self, ticker: &str) -> Option<OptionChain> {
        self.entries
            .remove(&Self::normalise(ticker))
            .map(|entry| entry.chain)
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached tickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of tickers.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for OptionChainCache {
    fn default() -> Self {
        Self {
            entries: HashMap::with_capacity(DEFAULT_CACHE_CAPACITY),
            capacity: DEFAULT_CACHE_CAPACITY,
            clock: 0,
        }
    }
}
