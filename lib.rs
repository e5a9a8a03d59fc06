#![allow(non_camel_case_types)]
//! Dense two dimensional grids of floating point samples.
//!
//! A [`Grid`] is generic over its storage: `Grid<Box<[T]>>` owns its buffer, `Grid<&mut [T]>` and
//! `Grid<&[T]>` wrap a buffer owned by someone else (e.g. a decoder). All access and bulk
//! operations are written against `Deref<Target=[T]>`/`DerefMut<Target=[T]>` and behave the same
//! whichever storage backs the grid.
//!
//! Samples are stored row-major: cell `xy{x: column, y: row}` lives at offset `row*columns+column`.

mod error;
pub mod ops;
pub use error::{Error, Result};
pub use ops::{copy, copy_rect, divide, divide_assign, fill, multiply, multiply_assign};

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Deref, DerefMut, Index, IndexMut, Range};
use num_traits::{Float, Zero};

/// Pair of per-axis values. Local stand-in for the `xy` of the git-only `vector` crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)] pub struct xy<T> { pub x: T, pub y: T }
/// Cell coordinate: `x` is the column, `y` the row.
pub type uint2 = xy<u32>;
/// Grid dimensions: `x` columns (width), `y` rows (height).
pub type size = xy<u32>;

impl<T> From<(T, T)> for xy<T> { fn from((x, y): (T, T)) -> Self { xy{x, y} } }
impl<T: Display> Display for xy<T> { fn fmt(&self, f: &mut Formatter) -> fmt::Result { write!(f, "({}, {})", self.x, self.y) } }

impl size {
	/// Number of cells, `None` on overflow. Only reachable where `usize` is 32 bits wide.
	pub fn area(self) -> Option<usize> { (self.x as usize).checked_mul(self.y as usize) }
}

/// Dense 2D array with fixed dimensions.
///
/// Neither `Clone` nor `Copy`: duplicating sample data goes through [`Grid::try_clone`] or [`copy`].
pub struct Grid<D> {
	data: D,
	size: size,
}

pub type OwnedGrid<T> = Grid<Box<[T]>>;
pub type GridMut<'t, T> = Grid<&'t mut [T]>;
pub type GridRef<'t, T> = Grid<&'t [T]>;
/// The pipeline's usual single channel buffer.
pub type Grid32 = OwnedGrid<f32>;

#[track_caller] fn checked_len(size: size) -> Result<usize> {
	if size.x == 0 || size.y == 0 { log::debug!("empty grid {size}"); return Err(Error::Empty{size}) }
	size.area().ok_or(Error::TooLarge{size})
}

#[track_caller] fn reserve<T>(len: usize) -> Result<Vec<T>> {
	let mut buffer = Vec::new();
	buffer.try_reserve_exact(len).map_err(|_| { log::debug!("allocation of {len} elements failed"); Error::Allocation{len} })?;
	Ok(buffer)
}

#[track_caller] fn check_len(required: usize, len: usize) -> Result<()> {
	if len < required { log::debug!("buffer of {len} elements, {required} required"); Err(Error::BufferTooShort{required, len}) } else { Ok(()) }
}

impl<D> Grid<D> {
	pub fn size(&self) -> size { self.size }
	/// Number of columns, i.e. the width of an image.
	pub fn columns(&self) -> u32 { self.size.x }
	/// Number of rows, i.e. the height of an image.
	pub fn rows(&self) -> u32 { self.size.y }
	/// Number of cells. Always `columns*rows` and never zero.
	pub fn len(&self) -> usize { self.size.x as usize * self.size.y as usize }
	pub fn is_empty(&self) -> bool { false }

	/// Checked mapping from a cell coordinate to its buffer offset.
	pub fn index(&self, xy{x,y}: uint2) -> Option<usize> { (x < self.size.x && y < self.size.y).then(|| y as usize * self.size.x as usize + x as usize) }

	/// Fast path offset. Coordinates are only asserted in debug builds or with the `checked` feature.
	#[inline] #[track_caller] fn offset(&self, xy{x,y}: uint2) -> usize {
		if cfg!(any(debug_assertions, feature="checked")) { assert!(x < self.size.x && y < self.size.y, "{} out of {}", xy{x,y}, self.size) }
		y as usize * self.size.x as usize + x as usize
	}

	pub fn into_inner(self) -> D { self.data }
}

impl<T> OwnedGrid<T> {
	/// Takes ownership of `data`, which must hold at least `columns*rows` elements. Extra elements are dropped.
	#[track_caller] pub fn from_boxed(size: size, data: Box<[T]>) -> Result<Self> {
		let len = checked_len(size)?;
		check_len(len, data.len())?;
		let data = if data.len() == len { data } else { let mut data = data.into_vec(); data.truncate(len); data.into_boxed_slice() };
		Ok(Self{data, size})
	}
	/// Collects the first `columns*rows` items of `iter` in row-major order.
	#[track_caller] pub fn from_iter<I:IntoIterator<Item=T>>(size: size, iter: I) -> Result<Self> {
		let len = checked_len(size)?;
		let mut buffer = reserve(len)?;
		buffer.extend(iter.into_iter().take(len));
		check_len(len, buffer.len())?;
		log::debug!("allocated {} grid", size);
		Ok(Self{data: buffer.into_boxed_slice(), size})
	}
	pub fn from_xy<F:Fn(uint2)->T>(size: size, ref f: F) -> Result<Self> {
		Self::from_iter(size, (0..size.y).flat_map(|y| (0..size.x).map(move |x| f(xy{x,y}))))
	}
}

impl<T:Clone> OwnedGrid<T> {
	/// Allocates a grid with every cell set to `value`.
	pub fn fill(size: size, value: T) -> Result<Self> { Self::from_iter(size, core::iter::repeat(value)) }
}

impl<T:Zero+Clone> OwnedGrid<T> {
	/// Allocates a zeroed grid.
	///
	/// Fails on empty dimensions, if `columns*rows` overflows, or if the allocation is refused.
	pub fn zero(size: size) -> Result<Self> { Self::fill(size, T::zero()) }
}

impl<'t, T> GridMut<'t, T> {
	/// Wraps a caller owned buffer. Writes through the grid are visible in `data`.
	///
	/// `data` must hold at least `columns*rows` elements; it is truncated to exactly that many.
	#[track_caller] pub fn wrap_mut(size: size, data: &'t mut [T]) -> Result<Self> {
		let len = checked_len(size)?;
		check_len(len, data.len())?;
		log::trace!("wrapping {} elements as {} grid", data.len(), size);
		Ok(Self{data: &mut data[..len], size})
	}
}

impl<'t, T> GridRef<'t, T> {
	/// Read-only counterpart of [`Grid::wrap_mut`].
	#[track_caller] pub fn wrap(size: size, data: &'t [T]) -> Result<Self> {
		let len = checked_len(size)?;
		check_len(len, data.len())?;
		log::trace!("wrapping {} elements as {} grid", data.len(), size);
		Ok(Self{data: &data[..len], size})
	}
}

impl<'t, T: bytemuck::Pod> GridRef<'t, T> {
	/// Reinterprets a raw sample buffer (e.g. decoded bytes) without copying.
	pub fn cast_slice<U:bytemuck::Pod>(slice: &'t [U], size: size) -> Result<Self> { Self::wrap(size, bytemuck::try_cast_slice(slice).map_err(Error::Cast)?) }
}

impl<'t, T: bytemuck::Pod> GridMut<'t, T> {
	pub fn cast_slice_mut<U:bytemuck::Pod>(slice: &'t mut [U], size: size) -> Result<Self> { Self::wrap_mut(size, bytemuck::try_cast_slice_mut(slice).map_err(Error::Cast)?) }
}

impl<T, D:Deref<Target=[T]>> Index<usize> for Grid<D> {
	type Output=T;
	#[track_caller] fn index(&self, i: usize) -> &Self::Output { &self.data[i] }
}
impl<T, D:DerefMut<Target=[T]>> IndexMut<usize> for Grid<D> {
	#[track_caller] fn index_mut(&mut self, i: usize) -> &mut Self::Output { &mut self.data[i] }
}

impl<D> Index<uint2> for Grid<D> where Self: Index<usize> {
	type Output = <Self as Index<usize>>::Output;
	#[track_caller] fn index(&self, i: uint2) -> &Self::Output { &self[self.offset(i)] }
}
impl<D> IndexMut<uint2> for Grid<D> where Self: IndexMut<usize> {
	#[track_caller] fn index_mut(&mut self, i: uint2) -> &mut Self::Output { let i = self.offset(i); &mut self[i] }
}

impl<T, D:Deref<Target=[T]>> Grid<D> {
	/// Raw row-major buffer, exactly `columns*rows` long.
	pub fn as_slice(&self) -> &[T] { &self.data }
	pub fn get(&self, i: uint2) -> Option<&T> { self.index(i).map(|i| &self.data[i]) }
	/// # Safety
	/// `x < columns` and `y < rows`.
	pub unsafe fn get_unchecked(&self, x: u32, y: u32) -> &T { unsafe { self.data.get_unchecked(y as usize * self.size.x as usize + x as usize) } }

	pub fn as_ref(&self) -> GridRef<'_, T> { Grid{data: &*self.data, size: self.size} }

	#[track_caller] pub fn row(&self, y: u32) -> &[T] {
		assert!(y < self.size.y, "row {y} out of {}", self.size.y);
		let width = self.size.x as usize;
		&self.data[y as usize*width..][..width]
	}
	pub fn iter_rows<'a>(&'a self) -> impl ExactSizeIterator<Item=&'a [T]> where T: 'a { self.data.chunks_exact(self.size.x as usize) }

	/// Full width band of rows as a borrowed grid.
	///
	/// # Panics
	/// If `rows` is empty or ends past the last row.
	#[track_caller] pub fn band(&self, rows: Range<u32>) -> GridRef<'_, T> {
		assert!(rows.start < rows.end && rows.end <= self.size.y, "{rows:?} {}", self.size);
		let width = self.size.x as usize;
		Grid{size: xy{x: self.size.x, y: rows.len() as u32}, data: &self.data[rows.start as usize*width..rows.end as usize*width]}
	}

	/// Explicit deep copy into a new owning grid.
	pub fn try_clone(&self) -> Result<OwnedGrid<T>> where T: Clone { OwnedGrid::from_iter(self.size, self.data.iter().cloned()) }

	pub fn map<U>(&self, f: impl FnMut(&T)->U) -> Result<OwnedGrid<U>> { OwnedGrid::from_iter(self.size, self.data.iter().map(f)) }
}

impl<T, D:DerefMut<Target=[T]>> Grid<D> {
	pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }
	pub fn get_mut(&mut self, i: uint2) -> Option<&mut T> { self.index(i).map(|i| &mut self.data[i]) }
	/// # Safety
	/// `x < columns` and `y < rows`.
	pub unsafe fn get_unchecked_mut(&mut self, x: u32, y: u32) -> &mut T { let i = y as usize * self.size.x as usize + x as usize; unsafe { self.data.get_unchecked_mut(i) } }

	pub fn as_mut(&mut self) -> GridMut<'_, T> { Grid{data: &mut *self.data, size: self.size} }

	#[track_caller] pub fn row_mut(&mut self, y: u32) -> &mut [T] {
		assert!(y < self.size.y, "row {y} out of {}", self.size.y);
		let width = self.size.x as usize;
		&mut self.data[y as usize*width..][..width]
	}
	/// Disjoint mutable rows, e.g. to hand out to worker threads.
	pub fn iter_rows_mut<'a>(&'a mut self) -> impl ExactSizeIterator<Item=&'a mut [T]> where T: 'a { self.data.chunks_exact_mut(self.size.x as usize) }

	#[track_caller] pub fn band_mut(&mut self, rows: Range<u32>) -> GridMut<'_, T> {
		assert!(rows.start < rows.end && rows.end <= self.size.y, "{rows:?} {}", self.size);
		let width = self.size.x as usize;
		Grid{size: xy{x: self.size.x, y: rows.len() as u32}, data: &mut self.data[rows.start as usize*width..rows.end as usize*width]}
	}

	pub fn set<F:Fn(uint2)->T>(&mut self, f: F) {
		for (y, row) in self.iter_rows_mut().enumerate() { for (x, v) in row.iter_mut().enumerate() { *v = f(xy{x: x as u32, y: y as u32}); } }
	}
	pub fn modify<F:Fn(&T)->T>(&mut self, f: F) { for v in self.data.iter_mut() { *v = f(v); } }
	/// In place binary operation against an equally sized grid.
	pub fn zip_map<U, S:Deref<Target=[U]>, F:Fn(&T,&U)->T>(&mut self, source: &Grid<S>, f: F) -> Result<()> {
		error::check_size(self.size, source.size)?;
		for (v, s) in self.data.iter_mut().zip(source.data.iter()) { *v = f(v, s); }
		Ok(())
	}

	/// Sets every cell to `value`.
	pub fn reset(&mut self, value: T) where T: Clone { self.data.fill(value) }
}

impl<T:Float, D:DerefMut<Target=[T]>> Grid<D> {
	/// Multiplies every cell by `value`. IEEE-754 semantics: NaN and infinities propagate.
	pub fn scale(&mut self, value: T) { for v in self.data.iter_mut() { *v = *v * value; } }
}

impl<D> Debug for Grid<D> { fn fmt(&self, f: &mut Formatter) -> fmt::Result { write!(f, "{:?}", self.size) } }
