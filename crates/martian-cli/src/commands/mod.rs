pub mod play;
pub mod rules;
