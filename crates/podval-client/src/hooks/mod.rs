mod use_query_config;

pub use use_query_config::use_query_config;
