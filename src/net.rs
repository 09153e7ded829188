mod fetch;
mod response;

pub use fetch::fetch;
pub use response::Response;
