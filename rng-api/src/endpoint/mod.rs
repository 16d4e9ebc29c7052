pub mod random;

pub use random::RandomClient;
