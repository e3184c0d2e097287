// Longitude/latitude geometry types. Every GeoJSON geometry type wraps a list of its parts,
// verifies itself and writes its `coordinates` member through `GeometryTrait`.

mod coordinates;
mod from_parts;
mod linestring;
mod multi;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
