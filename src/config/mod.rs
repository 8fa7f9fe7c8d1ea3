mod loader;
mod schema;
#[cfg(test)]
mod test_env;

pub use schema::{Config, ToneConfig};
