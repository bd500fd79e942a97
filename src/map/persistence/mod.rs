//! Map persistence: the binary file formats and file I/O.
//!
//! ## Module Structure
//!
//! - [`codec`] - `.map` / `.cmp` encode and decode
//! - [`error`] - [`FormatError`] taxonomy
//! - [`load`] - Reading map files
//! - [`save`] - Writing map files without clobbering on failure
//!
//! Decoding is all-or-nothing: a [`Map`](crate::map::Map) is only returned
//! once every declared cell has been read.

pub mod codec;
mod error;
mod load;
mod save;


pub use codec::{decode, encode, MapFormat, CMAP_MAGIC};
pub use error::FormatError;
pub use load::{load_map, map_name_from_path};
pub use save::save_map;
