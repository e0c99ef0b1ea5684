//! Carousel - the slide index state machine and its swipe gesture.
//!
//! The controller owns one index into a fixed-size slide sequence and nothing
//! else; projecting it onto slide offsets is a pure function, and pushing the
//! projection to the screen is the surface's job.

mod controller;
mod swipe;

pub use controller::{Carousel, CarouselFrame, CarouselSurface};
pub use swipe::{SwipeDirection, SwipeTracker, SWIPE_THRESHOLD};
