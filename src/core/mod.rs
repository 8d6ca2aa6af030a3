pub mod color;
pub mod coord;
pub mod film;
pub mod ray;
pub mod rng;
