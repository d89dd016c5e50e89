pub mod clock;
pub mod math;
pub mod text;
