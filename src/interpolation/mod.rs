pub mod algorithms; 
pub mod config; 
pub mod errors; 
pub mod report; 
pub mod traits;
pub use traits::Interpolator;

pub mod node_array;
pub mod cursor;
pub mod tabulated;
pub mod linear; 

pub use cursor::NodeCursor;
pub use node_array::{Bracket, NodeArray, Spacing};
pub use tabulated::TabulatedFunction;
