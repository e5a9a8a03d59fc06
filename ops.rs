//! Whole-grid helpers. Every helper checks dimensions and fails with
//! [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) rather than truncating.
//! Arithmetic follows IEEE-754: division by zero yields infinities or NaN, not an error.
use core::ops::{Deref, DerefMut};
use num_traits::Float;
use crate::{Error, Grid, Result, error::check_size, uint2, xy};

/// Deep copy of `source` into an equally sized `target`.
pub fn copy<T:Copy, S:Deref<Target=[T]>, D:DerefMut<Target=[T]>>(source: &Grid<S>, target: &mut Grid<D>) -> Result<()> {
	check_size(source.size(), target.size())?;
	target.as_mut_slice().copy_from_slice(source.as_slice());
	Ok(())
}

/// Copies the `source` cells in `min..max` (upper left inclusive, bottom right exclusive) to the
/// `target` origin, keeping relative positions. Target cells outside the copied region are untouched.
///
/// An empty rectangle copies nothing. A rectangle reaching past `source`, or larger than `target`,
/// is [`Error::RectOutOfBounds`].
pub fn copy_rect<T:Copy, S:Deref<Target=[T]>, D:DerefMut<Target=[T]>>(source: &Grid<S>, target: &mut Grid<D>, min: uint2, max: uint2) -> Result<()> {
	if max.x > source.columns() || max.y > source.rows() {
		log::debug!("rectangle {min}..{max} outside source {}", source.size());
		return Err(Error::RectOutOfBounds{min, max, size: source.size()});
	}
	if min.x >= max.x || min.y >= max.y { return Ok(()) }
	let size = xy{x: max.x-min.x, y: max.y-min.y};
	if size.x > target.columns() || size.y > target.rows() {
		log::debug!("rectangle {min}..{max} larger than target {}", target.size());
		return Err(Error::RectOutOfBounds{min, max, size: target.size()});
	}
	let (x0, x1) = (min.x as usize, max.x as usize);
	for y in 0..size.y { target.row_mut(y)[..size.x as usize].copy_from_slice(&source.row(min.y+y)[x0..x1]); }
	Ok(())
}

/// Sets every cell of `grid` to `value`.
pub fn fill<T:Clone, D:DerefMut<Target=[T]>>(grid: &mut Grid<D>, value: T) { grid.reset(value) }

fn zip3<T:Float, R:DerefMut<Target=[T]>, A:Deref<Target=[T]>, B:Deref<Target=[T]>>(result: &mut Grid<R>, a: &Grid<A>, b: &Grid<B>, f: impl Fn(T,T)->T) -> Result<()> {
	check_size(a.size(), b.size())?;
	check_size(a.size(), result.size())?;
	for ((r, &a), &b) in result.as_mut_slice().iter_mut().zip(a.as_slice()).zip(b.as_slice()) { *r = f(a, b); }
	Ok(())
}

/// `result[i] = a[i] * b[i]`
pub fn multiply<T:Float, R:DerefMut<Target=[T]>, A:Deref<Target=[T]>, B:Deref<Target=[T]>>(result: &mut Grid<R>, a: &Grid<A>, b: &Grid<B>) -> Result<()> { zip3(result, a, b, |a, b| a * b) }

/// `result[i] = a[i] / b[i]`
pub fn divide<T:Float, R:DerefMut<Target=[T]>, A:Deref<Target=[T]>, B:Deref<Target=[T]>>(result: &mut Grid<R>, a: &Grid<A>, b: &Grid<B>) -> Result<()> { zip3(result, a, b, |a, b| a / b) }

/// `a[i] *= b[i]`
pub fn multiply_assign<T:Float, A:DerefMut<Target=[T]>, B:Deref<Target=[T]>>(a: &mut Grid<A>, b: &Grid<B>) -> Result<()> { a.zip_map(b, |&a, &b| a * b) }

/// `a[i] /= b[i]`
pub fn divide_assign<T:Float, A:DerefMut<Target=[T]>, B:Deref<Target=[T]>>(a: &mut Grid<A>, b: &Grid<B>) -> Result<()> { a.zip_map(b, |&a, &b| a / b) }
