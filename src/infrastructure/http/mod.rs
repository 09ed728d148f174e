mod transport;

pub use transport::{FetchedResponse, ReqwestTransport, Transport};
