/*
Random data generation and selection for the PIjN protocol project:
fast random strings, secure numeric one-time passwords and weighted picks.
*/

pub mod charset;
pub mod errors;
pub mod random_module;
pub mod utils;
pub mod weighted;

pub use charset::{Charset, ALPHABETIC, ALPHANUMERIC, HEX, LOWERCASE, NUMERIC, SYMBOLS, UPPERCASE};
pub use errors::{ConfigError, RandomError};
pub use random_module::{generate_otp, generate_random_string, RandomStringGenerator, OTP_DEFAULT_LENGTH, OTP_MAX_LENGTH};
pub use weighted::{pick_by_weight, pick_map_key, pick_map_key_percent, pick_weighted, Weighted};
