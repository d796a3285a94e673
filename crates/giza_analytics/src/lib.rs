pub mod ratios;

pub use ratios::KeyRatios;
