use geobuffer_geometry::GeometryError;
use thiserror::Error;

/// Failure classes of a buffer call. They travel inside [`anyhow::Error`];
/// use `downcast_ref::<BufferError>()` to tell them apart.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BufferError {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("geometry type {0} not supported")]
	UnsupportedGeometry(String),
	#[error("invalid geometry: {0}")]
	InvalidGeometry(String),
	#[error("unsupported operation: {0}")]
	UnsupportedOperation(String),
}

impl From<GeometryError> for BufferError {
	fn from(error: GeometryError) -> Self {
		match error {
			GeometryError::UnsupportedType(name) => BufferError::UnsupportedGeometry(name),
			GeometryError::InvalidCoordinates(..) => BufferError::InvalidGeometry(error.to_string()),
		}
	}
}

/// Maps a [`GeometryError`] inside `error` to its [`BufferError`] counterpart, keeping everything else.
pub fn classify_error(error: anyhow::Error) -> anyhow::Error {
	match error.downcast_ref::<GeometryError>() {
		Some(geometry_error) => {
			let classified = anyhow::Error::new(BufferError::from(geometry_error.clone()));
			if error.chain().count() > 1 {
				// keep the outermost location, e.g. "feature 3"
				classified.context(error.to_string())
			} else {
				classified
			}
		}
		None => error,
	}
}
