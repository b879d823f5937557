pub mod error;
pub mod request;
pub mod response;

pub use error::RequestError;
pub use request::AnnotateRequest;
pub use response::{AnnotateResponse, GlossResult};
