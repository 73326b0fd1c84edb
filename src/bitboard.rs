//! Bitboard occupancy representation and attack/ray queries.
//!
//! Boards are value types: copies are cheap (a fixed array of words) and are
//! used freely for look-ahead simulation in [`Bitboard::max_attacks`] and
//! [`Bitboard::simulate_max_attacks`].

use crate::error::AqError;

/// Largest board side this crate supports. Chosen so that `MAX_N * MAX_N`
/// bits fit exactly into [`BOARD_WORDS`] 64-bit words.
pub const MAX_N: usize = 40;

/// Number of `u64` words backing a board at [`MAX_N`].
pub const BOARD_WORDS: usize = (MAX_N * MAX_N).div_ceil(64);

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A fixed-capacity N×N occupancy bitboard.
///
/// Bit `idx = r * size + c` lives at `words[idx / 64]`, MSB-first within
/// the word (`bit = 1 << (63 - idx % 64)`). Bits beyond `size * size` in the
/// last word are always zero.
#[derive(Clone, Copy, Debug)]
pub struct Bitboard {
    words: [u64; BOARD_WORDS],
    size: usize,
    words_used: usize,
}

impl Bitboard {
    /// Constructs a new, all-empty board of side `size`.
    ///
    /// # Errors
    /// Returns [`AqError::BoardCapacity`] if `size * size` exceeds the
    /// compile-time word capacity.
    pub fn new(size: usize) -> Result<Self, AqError> {
        let bits = size * size;
        if bits > BOARD_WORDS * 64 {
            return Err(AqError::BoardCapacity { n: size, max_n: MAX_N });
        }
        Ok(Bitboard {
            words: [0; BOARD_WORDS],
            size,
            words_used: bits.div_ceil(64),
        })
    }

    /// Board side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn word_and_mask(&self, idx: usize) -> (usize, u64) {
        (idx / 64, 1u64 << (63 - idx % 64))
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(&self, r: usize, c: usize) -> bool {
        let idx = r * self.size + c;
        let (w, mask) = self.word_and_mask(idx);
        self.words[w] & mask != 0
    }

    /// Occupies `(r, c)`. Idempotent.
    pub fn set_occupied(&mut self, r: usize, c: usize) {
        let idx = r * self.size + c;
        let (w, mask) = self.word_and_mask(idx);
        self.words[w] |= mask;
    }

    /// Clears `(r, c)`. Idempotent.
    pub fn set_unoccupied(&mut self, r: usize, c: usize) {
        let idx = r * self.size + c;
        let (w, mask) = self.word_and_mask(idx);
        self.words[w] &= !mask;
    }

    /// Marks every cell of row `r` occupied.
    ///
    /// Legacy helper kept for contract parity with the original
    /// `board_is_attackable` fast probe; the search engine uses
    /// [`Bitboard::cell_count_attacks`] / [`Bitboard::cell_count_attacks_wrap`]
    /// exclusively.
    pub fn set_row_occupied(&mut self, r: usize) {
        for c in 0..self.size {
            self.set_occupied(r, c);
        }
    }

    /// Marks every cell of column `c` occupied. See
    /// [`Bitboard::set_row_occupied`].
    pub fn set_col_occupied(&mut self, c: usize) {
        for r in 0..self.size {
            self.set_occupied(r, c);
        }
    }

    /// Marks every cell of both diagonals passing through `(r, c)`
    /// occupied. See [`Bitboard::set_row_occupied`].
    pub fn set_diag_occupied(&mut self, r: usize, c: usize) {
        let n = self.size as isize;
        let d = r as isize - c as isize;
        for i in 0..n {
            let j = i - d;
            if (0..n).contains(&j) {
                self.set_occupied(i as usize, j as usize);
            }
        }
        let s = r as isize + c as isize;
        for i in 0..n {
            let j = s - i;
            if (0..n).contains(&j) {
                self.set_occupied(i as usize, j as usize);
            }
        }
    }

    /// Population count over all occupied cells.
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.words[..self.words_used]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum()
    }

    /// Bitwise equality. Both boards must share the same `size`.
    #[must_use]
    pub fn equals(&self, other: &Bitboard) -> bool {
        self.size == other.size && self.words[..self.words_used] == other.words[..other.words_used]
    }

    /// Walks one ray from `(r, c)` in direction `(dr, dc)`, permitting at
    /// most one wrap-around continuation onto the opposite edge when `wrap`
    /// is set. Returns the flattened index of the first occupied cell hit,
    /// or `None` if the ray runs off the board (or, under wrap, runs off a
    /// second time) without finding one.
    fn ray_hit(&self, r: usize, c: usize, dr: isize, dc: isize, wrap: bool) -> Option<usize> {
        let n = self.size as isize;
        let mut rr = r as isize;
        let mut cc = c as isize;
        let mut wrapped = false;
        for _ in 0..self.size {
            rr += dr;
            cc += dc;
            if !(0..n).contains(&rr) || !(0..n).contains(&cc) {
                if wrap && !wrapped {
                    rr = (rr % n + n) % n;
                    cc = (cc % n + n) % n;
                    wrapped = true;
                } else {
                    return None;
                }
            }
            if self.is_occupied(rr as usize, cc as usize) {
                return Some(rr as usize * self.size + cc as usize);
            }
        }
        None
    }

    /// Counts, among the 8 ray directions, how many hit at least one
    /// occupied cell before running off the (non-wrap) board. Returns `-1`
    /// if `(r, c)` is already occupied.
    #[must_use]
    pub fn cell_count_attacks(&self, r: usize, c: usize) -> i32 {
        if self.is_occupied(r, c) {
            return -1;
        }
        DIRECTIONS
            .iter()
            .filter(|&&(dr, dc)| self.ray_hit(r, c, dr, dc, false).is_some())
            .count() as i32
    }

    /// Wrap-around variant of [`Bitboard::cell_count_attacks`]: each ray may
    /// continue once from the opposite edge. Attackers are deduplicated by
    /// flattened cell index so a queen reached via two different ray
    /// directions (possible on small wrap boards) is only counted once.
    /// Returns `-1` if `(r, c)` is already occupied.
    #[must_use]
    pub fn cell_count_attacks_wrap(&self, r: usize, c: usize) -> i32 {
        if self.is_occupied(r, c) {
            return -1;
        }
        let mut seen: Vec<usize> = Vec::with_capacity(DIRECTIONS.len());
        for &(dr, dc) in &DIRECTIONS {
            if let Some(idx) = self.ray_hit(r, c, dr, dc, true) {
                if !seen.contains(&idx) {
                    seen.push(idx);
                }
            }
        }
        seen.len() as i32
    }

    fn cell_count_attacks_dispatch(&self, r: usize, c: usize, wrap: bool) -> i32 {
        if wrap {
            self.cell_count_attacks_wrap(r, c)
        } else {
            self.cell_count_attacks(r, c)
        }
    }

    /// Over every occupied cell, removes that queen and probes the attack
    /// count at its position on the reduced board; returns the maximum.
    /// This is the worst-case attack count faced by any placed queen.
    #[must_use]
    pub fn max_attacks(&self, wrap: bool) -> i32 {
        let mut max = 0;
        for r in 0..self.size {
            for c in 0..self.size {
                if self.is_occupied(r, c) {
                    let mut reduced = *self;
                    reduced.set_unoccupied(r, c);
                    max = max.max(reduced.cell_count_attacks_dispatch(r, c, wrap));
                }
            }
        }
        max
    }

    /// [`Bitboard::max_attacks`] on a copy with `(r, c)` additionally
    /// occupied. Used for look-ahead pruning.
    #[must_use]
    pub fn simulate_max_attacks(&self, r: usize, c: usize, wrap: bool) -> i32 {
        let mut sim = *self;
        sim.set_occupied(r, c);
        sim.max_attacks(wrap)
    }

    /// Returns `true` if every occupied cell sees the same number of
    /// attackers. A board with at most one occupied cell trivially returns
    /// `true`.
    #[must_use]
    pub fn all_has_same_attacks(&self, wrap: bool) -> bool {
        let mut prev: Option<i32> = None;
        for r in 0..self.size {
            for c in 0..self.size {
                if self.is_occupied(r, c) {
                    let mut reduced = *self;
                    reduced.set_unoccupied(r, c);
                    let attacks = reduced.cell_count_attacks_dispatch(r, c, wrap);
                    match prev {
                        None => prev = Some(attacks),
                        Some(p) if p != attacks => return false,
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }
}

impl PartialEq for Bitboard {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Bitboard {}
