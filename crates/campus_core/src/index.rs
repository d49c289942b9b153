//! Secondary indexes over a catalog: calendar days and tags.
//!
//! # Responsibility
//! - Group items by a derived key (date key, tag).
//! - Count key frequencies for ranked views such as tag clouds.
//!
//! # Invariants
//! - Indexes are rebuilt from the catalog, never mutated in place.
//! - Within a bucket, items keep catalog order.
//! - Items without a key are left out of the index, not out of the catalog.
//! - Frequency ties rank by first-seen order.

use crate::model::item::CatalogItem;
use chrono::NaiveDate;
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Number of tags shown in the popular-tags cloud.
pub const DEFAULT_TAG_CLOUD_LIMIT: usize = 15;
/// Largest tag-cloud size class.
pub const MAX_TAG_SIZE_CLASS: u32 = 5;

/// Mapping from key to the items sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIndex<'a, K, T> {
    groups: BTreeMap<K, Vec<&'a T>>,
}

impl<'a, K: Ord, T> GroupIndex<'a, K, T> {
    /// Items under `key`; empty when the key is absent.
    pub fn get<Q>(&self, key: &Q) -> &[&'a T]
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[&'a T])> {
        self.groups.iter().map(|(key, items)| (key, items.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of bucket sizes.
    pub fn total_entries(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// Groups items by at most one key each.
pub fn group_by<'a, T, K, I, F>(items: I, mut key_fn: F) -> GroupIndex<'a, K, T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> Option<K>,
{
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        if let Some(key) = key_fn(item) {
            groups.entry(key).or_default().push(item);
        }
    }
    GroupIndex { groups }
}

/// Groups items under every key they emit.
pub fn group_by_many<'a, T, K, I, F, Ks>(items: I, mut keys_fn: F) -> GroupIndex<'a, K, T>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> Ks,
    Ks: IntoIterator<Item = K>,
{
    let mut groups: BTreeMap<K, Vec<&'a T>> = BTreeMap::new();
    for item in items {
        for key in keys_fn(item) {
            groups.entry(key).or_default().push(item);
        }
    }
    GroupIndex { groups }
}

/// Key frequencies in first-seen key order.
#[derive(Debug, Clone)]
pub struct Counts<K> {
    entries: Vec<(K, usize)>,
    positions: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone> Counts<K> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn bump(&mut self, key: K) {
        match self.positions.get(&key) {
            Some(&index) => self.entries[index].1 += 1,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Count for `key`; 0 when never seen.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.positions
            .get(key)
            .map(|&index| self.entries[index].1)
            .unwrap_or(0)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(key, count)| (key, *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The `n` most frequent keys, count descending, ties by first-seen.
    pub fn top(&self, n: usize) -> Vec<(&K, usize)> {
        let mut ranked: Vec<(&K, usize)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

/// Counts every key each item emits.
pub fn count_by<'a, T, K, I, F, Ks>(items: I, mut keys_fn: F) -> Counts<K>
where
    T: 'a,
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> Ks,
    Ks: IntoIterator<Item = K>,
{
    let mut counts = Counts::new();
    for item in items {
        for key in keys_fn(item) {
            counts.bump(key);
        }
    }
    counts
}

/// Calendar key in zero-padded `YYYY-MM-DD` form.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Calendar index keyed by [`date_key`]; undated items are skipped.
pub fn date_index<'a, T, I>(items: I) -> GroupIndex<'a, String, T>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    group_by(items, |item: &'a T| item.date().map(date_key))
}

/// Tag index keyed by the raw tag text.
pub fn tag_index<'a, T, I>(items: I) -> GroupIndex<'a, String, T>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    group_by_many(items, |item: &'a T| item.tags().iter().cloned())
}

/// Tag frequencies keyed by the raw tag text.
pub fn tag_counts<'a, T, I>(items: I) -> Counts<String>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    count_by(items, |item: &'a T| item.tags().iter().cloned())
}

/// One entry of the popular-tags cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCloudEntry {
    pub tag: String,
    pub count: usize,
    /// Display size class in `1..=MAX_TAG_SIZE_CLASS`.
    pub size: u32,
}

/// Size class for a tag seen `count` times: `min(5, ceil(count / 2))`.
pub fn tag_size_class(count: usize) -> u32 {
    let class = u32::try_from(count.div_ceil(2)).unwrap_or(MAX_TAG_SIZE_CLASS);
    class.min(MAX_TAG_SIZE_CLASS)
}

/// Most frequent tags with their size classes.
pub fn tag_cloud<'a, T, I>(items: I, limit: usize) -> Vec<TagCloudEntry>
where
    T: CatalogItem + 'a,
    I: IntoIterator<Item = &'a T>,
{
    tag_counts(items)
        .top(limit)
        .into_iter()
        .map(|(tag, count)| TagCloudEntry {
            tag: tag.clone(),
            count,
            size: tag_size_class(count),
        })
        .collect()
}
