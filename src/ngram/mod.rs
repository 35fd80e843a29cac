pub mod generator;
pub mod types;

pub use self::generator::NGramGenerator;
pub use self::types::Fingerprint;
pub use crate::config::subsystems::generator::HashUnit;
