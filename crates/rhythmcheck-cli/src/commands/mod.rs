pub mod bands;
pub mod evaluate;
pub mod sleep;
