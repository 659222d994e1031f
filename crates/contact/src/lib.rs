mod error;
mod form;
mod relay;
mod session;
mod types;

pub use error::*;
pub use form::*;
pub use relay::*;
pub use session::*;
pub use types::*;
