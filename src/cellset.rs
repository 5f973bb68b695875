//! A fixed-size set of board cells packed into one unsigned integer.
//!
//! The type is `no_std` friendly and never allocates. Cells of an `N×N`
//! board map to bits in row-major order; coordinates off the board are
//! never members.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned when building a cell set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// `N*N` cells do not fit in the bits of `T`.
    SizeTooLarge { n: usize, capacity: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { n, capacity } => {
                write!(f, "{n}x{n} board needs {} bits, only {capacity} available", n * n)
            }
        }
    }
}

/// Set of cells on an `N×N` board backed by the integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    #[inline]
    fn index(p: Coordinate) -> Option<usize> {
        p.within(N).then(|| p.row as usize * N + p.col as usize)
    }

    /// Empty set, without a capacity check.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Empty set, or `SizeTooLarge` if `N*N` exceeds the bits of `T`.
    pub fn try_new() -> Result<Self, CellSetError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(CellSetError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    /// `true` if `p` is on the board and in the set.
    pub fn contains(&self, p: Coordinate) -> bool {
        match Self::index(p) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Add `p`. Returns `false` if `p` is off the board or already present.
    pub fn insert(&mut self, p: Coordinate) -> bool {
        let Some(idx) = Self::index(p) else {
            return false;
        };
        let bit = T::one() << idx;
        let fresh = (self.bits & bit) == T::zero();
        self.bits = self.bits | bit;
        fresh
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// `true` if every cell of the board is in the set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Members in row-major order.
    pub fn iter(&self) -> CellIter<T, N> {
        CellIter {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<Coordinate> for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Off-board coordinates are dropped.
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut set = Self::new();
        for p in iter {
            set.insert(p);
        }
        set
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", N)?;
        for r in 0..N as i32 {
            for c in 0..N as i32 {
                let ch = if self.contains(Coordinate::new(r, c)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct CellIter<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for CellIter<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
