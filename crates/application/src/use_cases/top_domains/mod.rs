pub mod get_top_domains;

pub use get_top_domains::{GetTopDomainsUseCase, TopDomainsReport};
