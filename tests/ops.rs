use grid::{Error, Grid, Grid32, GridMut, OwnedGrid, copy, copy_rect, divide, divide_assign, fill, multiply, multiply_assign, size, xy};
use proptest::prelude::*;

fn counting(size: size) -> Grid32 { Grid::from_xy(size, |xy{x,y}| (y * size.x + x) as f32).unwrap() }

#[test]
fn copy_is_deep() {
	let mut source = counting(xy{x: 4, y: 3});
	let mut target = Grid32::zero(xy{x: 4, y: 3}).unwrap();
	copy(&source, &mut target).unwrap();
	assert_eq!(source.as_slice(), target.as_slice());
	source.reset(-1.);
	assert_eq!(target[xy{x: 3, y: 2}], 11.);
}

#[test]
fn copy_rejects_mismatched_dimensions() {
	let source = counting(xy{x: 4, y: 3});
	let mut target = Grid32::zero(xy{x: 3, y: 4}).unwrap();
	assert_eq!(copy(&source, &mut target).unwrap_err(), Error::DimensionMismatch{expected: xy{x: 4, y: 3}, found: xy{x: 3, y: 4}});
	assert!(target.as_slice().iter().all(|&v| v == 0.));
}

#[test]
fn copy_into_borrowed_buffer() {
	let source = counting(xy{x: 2, y: 2});
	let mut buffer = vec![0f32; 4];
	copy(&source, &mut GridMut::wrap_mut(xy{x: 2, y: 2}, &mut buffer[..]).unwrap()).unwrap();
	assert_eq!(buffer, [0., 1., 2., 3.]);
}

#[test]
fn copy_rect_upper_left_inclusive_bottom_right_exclusive() {
	let source = counting(xy{x: 5, y: 5});
	let mut target = Grid32::fill(xy{x: 5, y: 5}, -1.).unwrap();
	copy_rect(&source, &mut target, xy{x: 1, y: 1}, xy{x: 3, y: 3}).unwrap();
	assert_eq!(target[xy{x: 0, y: 0}], 6.);
	assert_eq!(target[xy{x: 1, y: 0}], 7.);
	assert_eq!(target[xy{x: 0, y: 1}], 11.);
	assert_eq!(target[xy{x: 1, y: 1}], 12.);
	for y in 0..5 { for x in 0..5 {
		if x >= 2 || y >= 2 { assert_eq!(target[xy{x,y}], -1., "{x} {y}"); }
	}}
}

#[test]
fn copy_rect_into_smaller_target() {
	let source = counting(xy{x: 6, y: 4});
	let mut target = Grid32::zero(xy{x: 3, y: 2}).unwrap();
	copy_rect(&source, &mut target, xy{x: 3, y: 2}, xy{x: 6, y: 4}).unwrap();
	assert_eq!(target.as_slice(), &[15., 16., 17., 21., 22., 23.]);
}

#[test]
fn copy_rect_bounds() {
	let source = counting(xy{x: 5, y: 5});
	let mut target = Grid32::zero(xy{x: 2, y: 2}).unwrap();
	assert!(matches!(copy_rect(&source, &mut target, xy{x: 0, y: 0}, xy{x: 6, y: 1}), Err(Error::RectOutOfBounds{..})));
	assert!(matches!(copy_rect(&source, &mut target, xy{x: 0, y: 0}, xy{x: 3, y: 3}), Err(Error::RectOutOfBounds{..})));
	copy_rect(&source, &mut target, xy{x: 3, y: 3}, xy{x: 3, y: 5}).unwrap();
	assert!(target.as_slice().iter().all(|&v| v == 0.));
}

#[test]
fn fill_any_grid() {
	let mut buffer = [1f32; 6];
	fill(&mut GridMut::wrap_mut(xy{x: 3, y: 2}, &mut buffer[..]).unwrap(), 4.);
	assert_eq!(buffer, [4.; 6]);
}

#[test]
fn elementwise_constants() {
	let size = xy{x: 4, y: 4};
	let (a, b) = (Grid32::fill(size, 3.).unwrap(), Grid32::fill(size, -2.).unwrap());
	let mut result = Grid32::zero(size).unwrap();
	multiply(&mut result, &a, &b).unwrap();
	assert!(result.as_slice().iter().all(|&v| v == -6.));
	divide(&mut result, &a, &b).unwrap();
	assert!(result.as_slice().iter().all(|&v| v == -1.5));
}

#[test]
fn division_by_zero_is_ieee() {
	let size = xy{x: 3, y: 1};
	let a = OwnedGrid::from_iter(size, [1f32, -1., 0.]).unwrap();
	let zero = Grid32::zero(size).unwrap();
	let mut result = Grid32::zero(size).unwrap();
	divide(&mut result, &a, &zero).unwrap();
	assert_eq!(result[0], f32::INFINITY);
	assert_eq!(result[1], f32::NEG_INFINITY);
	assert!(result[2].is_nan());
}

#[test]
fn elementwise_rejects_mismatch() {
	let a = Grid32::fill(xy{x: 2, y: 3}, 1.).unwrap();
	let b = Grid32::fill(xy{x: 3, y: 2}, 1.).unwrap();
	let mut result = Grid32::zero(xy{x: 2, y: 3}).unwrap();
	assert!(matches!(multiply(&mut result, &a, &b), Err(Error::DimensionMismatch{..})));
	let c = Grid32::fill(xy{x: 2, y: 3}, 1.).unwrap();
	let mut small = Grid32::zero(xy{x: 1, y: 1}).unwrap();
	assert!(matches!(divide(&mut small, &a, &c), Err(Error::DimensionMismatch{..})));
	let mut a = a;
	assert!(multiply_assign(&mut a, &b).is_err());
}

#[test]
fn in_place_elementwise() {
	let size = xy{x: 2, y: 2};
	let mut a = OwnedGrid::<f64>::fill(size, 8.).unwrap();
	let b = OwnedGrid::<f64>::fill(size, 2.).unwrap();
	multiply_assign(&mut a, &b).unwrap();
	assert!(a.as_slice().iter().all(|&v| v == 16.));
	divide_assign(&mut a, &b).unwrap();
	divide_assign(&mut a, &b).unwrap();
	assert!(a.as_slice().iter().all(|&v| v == 4.));
}

proptest! {
	#[test]
	fn copy_rect_matches_cells(width in 1u32..12, height in 1u32..12, x0 in 0u32..12, y0 in 0u32..12, x1 in 0u32..12, y1 in 0u32..12) {
		let source = counting(xy{x: width, y: height});
		let mut target = Grid32::fill(xy{x: width, y: height}, -1.).unwrap();
		let (min, max) = (xy{x: x0.min(width), y: y0.min(height)}, xy{x: x1.min(width), y: y1.min(height)});
		copy_rect(&source, &mut target, min, max).unwrap();
		for y in 0..height { for x in 0..width {
			let inside = x < max.x.saturating_sub(min.x) && y < max.y.saturating_sub(min.y);
			let expected = if inside { source[xy{x: min.x+x, y: min.y+y}] } else { -1. };
			prop_assert_eq!(target[xy{x,y}], expected);
		}}
	}

	#[test]
	fn multiply_then_divide(a in 1e-3f32..1e3, b in 1e-3f32..1e3) {
		let size = xy{x: 3, y: 2};
		let (a, b) = (Grid32::fill(size, a).unwrap(), Grid32::fill(size, b).unwrap());
		let mut product = Grid32::zero(size).unwrap();
		multiply(&mut product, &a, &b).unwrap();
		divide_assign(&mut product, &b).unwrap();
		for (&p, &a) in product.as_slice().iter().zip(a.as_slice()) { prop_assert!((p - a).abs() <= a * 1e-6); }
	}
}
