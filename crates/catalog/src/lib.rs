pub use self::catalog::Catalog;
pub use self::config::CatalogConfig;
pub use self::record::FileRecord;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

pub mod catalog;
pub mod config;
pub mod record;

pub type Error = Box<dyn std::error::Error>;
pub type Result<T> = std::result::Result<T, Error>;

// TODO no great reason why it shouldn't be `pub(crate)` only
// other than not wanting to reimplement it in test suite.
pub fn random_string(n: usize) -> String {
    // TODO would be nice to have a seeded singleton
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(n)
        .map(char::from)
        .collect()
}
