pub mod effect;

pub use effect::Effect;
