//! Service implementations

pub mod http_resolver;

pub use http_resolver::HttpRoomResolver;

#[cfg(test)]
mod tests;
