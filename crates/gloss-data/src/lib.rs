pub mod error;
pub mod loaders;

pub use error::LoadError;
pub use loaders::dictionary::{DictionaryFormat, load_dictionary, read_dictionary};
pub use loaders::language::{LanguageFiles, load_language};
