pub mod conversion;
pub mod definition;
pub mod socket;
pub mod validator;

pub use conversion::*;
pub use definition::*;
pub use socket::*;
pub use validator::*;
