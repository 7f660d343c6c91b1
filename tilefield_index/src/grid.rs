// Copyright 2026 the Tilefield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid store: object registry, tile buckets, and the `update` rebuild.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::error::GridError;
use crate::tile::TileLayout;
use crate::types::GridObject;

/// Generational handle for registered objects.
///
/// Object identity in the grid is key identity: two objects with identical
/// geometry inserted separately get distinct keys and stay distinct in query
/// results. A key goes stale when its entry is removed; stale keys never
/// alias a later entry because slot reuse bumps the generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "slot indices are intentionally 32-bit; higher bits are truncated by design"
    )]
    pub(crate) const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

#[derive(Clone, Debug)]
pub(crate) struct LiveEntry<P> {
    pub(crate) object: GridObject,
    pub(crate) payload: P,
}

/// One registry slot. The generation survives removal so that reuse can bump
/// it past every key handed out for the previous occupant.
#[derive(Clone, Debug)]
struct Slot<P> {
    generation: u32,
    live: Option<LiveEntry<P>>,
}

/// Uniform-grid spatial index over a bounded plane.
///
/// The plane `[0, width) × [0, height)` is cut into square tiles of
/// `tile_size` world units. [`update`](Self::update) registers every live
/// object into each tile its extent overlaps; the query methods in
/// [`query`](crate::query) narrow to bucket contents before exact geometric
/// tests.
///
/// Buckets are rebuilt wholesale by `update` and are stale after any
/// [`insert`](Self::insert), [`remove`](Self::remove), or
/// [`set_object`](Self::set_object) until `update` runs again. Before the
/// first `update` every bucket is empty, so all queries return nothing.
#[derive(Clone, Debug)]
pub struct TileGrid<P: Copy + Debug> {
    width: f64,
    height: f64,
    pub(crate) layout: TileLayout,
    entries: Vec<Slot<P>>,
    free_list: Vec<usize>,
    live_count: usize,
    /// Flat row-major bucket table, `layout.tile_count()` entries.
    pub(crate) buckets: Vec<Vec<Key>>,
}

impl<P: Copy + Debug> TileGrid<P> {
    /// Create a grid covering `[0, width) × [0, height)`.
    ///
    /// Tile counts are `floor(width / tile_size)` by
    /// `floor(height / tile_size)`. A dimension smaller than one tile
    /// produces zero tiles on that axis and every query returns empty; that
    /// is accepted silently.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidTileSize`] when `tile_size` is not finite and
    /// strictly positive.
    pub fn new(width: f64, height: f64, tile_size: f64) -> Result<Self, GridError> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(GridError::InvalidTileSize);
        }
        let layout = TileLayout::new(width, height, tile_size);
        let buckets = (0..layout.tile_count()).map(|_| Vec::new()).collect();
        Ok(Self {
            width,
            height,
            layout,
            entries: Vec::new(),
            free_list: Vec::new(),
            live_count: 0,
            buckets,
        })
    }

    /// Grid width in world units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Grid height in world units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Tile side length in world units.
    pub fn tile_size(&self) -> f64 {
        self.layout.tile_size()
    }

    /// Number of tile columns, `floor(width / tile_size)`.
    pub fn x_tiles(&self) -> usize {
        self.layout.x_tiles()
    }

    /// Number of tile rows, `floor(height / tile_size)`.
    pub fn y_tiles(&self) -> usize {
        self.layout.y_tiles()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.live_count
    }

    /// Whether no objects are registered.
    pub fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Reserve space for at least `n` more objects.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    /// Register an object with its payload. Returns a stable handle.
    ///
    /// Buckets are untouched; the object is invisible to queries until the
    /// next [`update`](Self::update).
    pub fn insert(&mut self, object: GridObject, payload: P) -> Key {
        self.live_count += 1;
        let live = LiveEntry { object, payload };
        if let Some(idx) = self.free_list.pop() {
            let slot = &mut self.entries[idx];
            slot.generation += 1;
            slot.live = Some(live);
            Key::new(idx, slot.generation)
        } else {
            self.entries.push(Slot {
                generation: 1,
                live: Some(live),
            });
            Key::new(self.entries.len() - 1, 1)
        }
    }

    /// Remove an object. Stale or unknown keys are ignored.
    ///
    /// Buckets keep the stale key until the next [`update`](Self::update),
    /// but generation checks stop queries from returning the entry in the
    /// meantime.
    pub fn remove(&mut self, key: Key) {
        let Some(slot) = self.entries.get_mut(key.idx()) else {
            return;
        };
        if slot.generation != key.generation() || slot.live.is_none() {
            return;
        }
        slot.live = None;
        self.free_list.push(key.idx());
        self.live_count -= 1;
    }

    /// Replace the geometry of a live entry. Ignored for stale keys.
    ///
    /// The grid does not watch objects for movement; buckets reflect the old
    /// position until the next [`update`](Self::update).
    pub fn set_object(&mut self, key: Key, object: GridObject) {
        if let Some(e) = self.entry_mut(key) {
            e.object = object;
        }
    }

    /// Replace the payload of a live entry. Ignored for stale keys.
    pub fn set_payload(&mut self, key: Key, payload: P) {
        if let Some(e) = self.entry_mut(key) {
            e.payload = payload;
        }
    }

    /// The object and payload behind a key, if still live.
    pub fn get(&self, key: Key) -> Option<(&GridObject, P)> {
        self.entry(key).map(|e| (&e.object, e.payload))
    }

    /// Whether the key refers to a live entry.
    pub fn contains(&self, key: Key) -> bool {
        self.entry(key).is_some()
    }

    /// Iterate over all live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, &GridObject, P)> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, slot)| {
            slot.live
                .as_ref()
                .map(|e| (Key::new(i, slot.generation), &e.object, e.payload))
        })
    }

    /// Rebuild the whole bucket table from the live object set.
    ///
    /// Each object lands once in every in-bounds tile its
    /// [`extent`](GridObject::extent) overlaps; fully out-of-bounds extents
    /// register nowhere. Idempotent, and the only operation that mutates
    /// bucket state.
    pub fn update(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        for (i, slot) in self.entries.iter().enumerate() {
            let Some(live) = slot.live.as_ref() else {
                continue;
            };
            let Some((xs, ys)) = self.layout.tile_span(&live.object.extent()) else {
                continue;
            };
            let key = Key::new(i, slot.generation);
            for ty in ys {
                let row = ty * self.layout.x_tiles();
                for tx in xs.clone() {
                    self.buckets[row + tx].push(key);
                }
            }
        }
    }

    pub(crate) fn entry(&self, key: Key) -> Option<&LiveEntry<P>> {
        let slot = self.entries.get(key.idx())?;
        if slot.generation != key.generation() {
            return None;
        }
        slot.live.as_ref()
    }

    fn entry_mut(&mut self, key: Key) -> Option<&mut LiveEntry<P>> {
        let slot = self.entries.get_mut(key.idx())?;
        if slot.generation != key.generation() {
            return None;
        }
        slot.live.as_mut()
    }
}
