// Widget state models

mod carousel;

pub use carousel::{CarouselState, Direction};
