pub mod imshow;
pub mod traits;

pub use imshow::{Imshow, imshow};
pub use traits::Plot;
