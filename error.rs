use crate::{size, uint2};

/// Failure of a grid construction or of a bulk helper.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("grid dimensions must be positive, got {size}")]
	Empty { size: size },
	/// `columns*rows` overflows `usize`. Only possible on 32-bit targets.
	#[error("grid of {size} cells does not fit in the address space")]
	TooLarge { size: size },
	#[error("could not allocate {len} elements")]
	Allocation { len: usize },
	#[error("buffer holds {len} elements, {required} required")]
	BufferTooShort { required: usize, len: usize },
	#[error("dimension mismatch: expected {expected}, found {found}")]
	DimensionMismatch { expected: size, found: size },
	#[error("rectangle {min}..{max} exceeds {size}")]
	RectOutOfBounds { min: uint2, max: uint2, size: size },
	#[error("buffer cast failed: {0:?}")]
	Cast(bytemuck::PodCastError),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[track_caller] pub(crate) fn check_size(expected: size, found: size) -> Result<()> {
	if expected == found { Ok(()) } else {
		log::debug!("dimension mismatch {expected} {found}");
		Err(Error::DimensionMismatch { expected, found })
	}
}
