pub mod defaults;
pub mod profile;
pub mod rules;

pub use profile::{GermanProfile, LANGUAGE_CODE};
pub use rules::GermanRules;
