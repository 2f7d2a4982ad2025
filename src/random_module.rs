use rand::{rngs::{OsRng, ThreadRng}, thread_rng, CryptoRng, Rng, RngCore, SeedableRng, distributions::{Uniform, Distribution}};
use rand_chacha::ChaCha20Rng;
use tracing::{error, trace};

use crate::charset;
use crate::errors::RandomError;



pub const OTP_DEFAULT_LENGTH: usize = 6;
pub const OTP_MAX_LENGTH: usize = 64;



/// ChaCha20 stream seeded from an entropy source. Used wherever output must
/// be unpredictable.
pub(crate) struct SecureRandom {
    rng: ChaCha20Rng,
}


impl SecureRandom {
    pub(crate) fn from_entropy<E>(source: &mut E) -> Result<Self, RandomError>
    where
        E: RngCore + CryptoRng + ?Sized,
    {
        let mut seed = [0u8; 32];
        if let Err(e) = source.try_fill_bytes(&mut seed) {
            error!(target: "secure_random", "Entropy source failed: {}", e);
            return Err(RandomError::from(e));
        }

        Ok(Self {
            rng: ChaCha20Rng::from_seed(seed),
        })
    }

    /// Unbiased index in `0..max`. `max` must be non-zero.
    fn random_index(&mut self, max: usize) -> usize {
        let dist = Uniform::from(0..max);
        dist.sample(&mut self.rng)
    }

    fn digits(&mut self, length: usize) -> String {
        let digits = charset::NUMERIC.as_bytes();
        (0..length)
            .map(|_| digits[self.random_index(digits.len())] as char)
            .collect()
    }
}



/// Draws strings from a fixed charset union using a fast, non-cryptographic
/// source.
pub struct RandomStringGenerator<R = ThreadRng> {
    charset: Vec<char>,
    dist: Uniform<usize>,
    rng: R,
}


impl RandomStringGenerator {
    pub fn new(charsets: &[&str]) -> Self {
        Self::with_rng(charsets, thread_rng())
    }
}


impl<R: Rng> RandomStringGenerator<R> {
    pub(crate) fn with_rng(charsets: &[&str], rng: R) -> Self {
        let charset = charset::union(charsets);
        // union() never returns an empty pool
        let dist = Uniform::from(0..charset.len());

        Self { charset, dist, rng }
    }

    pub fn charset(&self) -> &[char] {
        &self.charset
    }

    pub fn generate(&mut self, length: u8) -> String {
        trace!(target: "string_generator", "Generating {} chars from a pool of {}", length, self.charset.len());

        (0..length)
            .map(|_| self.charset[self.dist.sample(&mut self.rng)])
            .collect()
    }
}



fn resolve_otp_length(length: Option<i64>) -> usize {
    match length {
        Some(n) if n > OTP_MAX_LENGTH as i64 => {
            trace!(target: "otp_generator", "Requested length {} clamped to {}", n, OTP_MAX_LENGTH);
            OTP_MAX_LENGTH
        }
        Some(n) if n > 0 => n as usize,
        _ => OTP_DEFAULT_LENGTH,
    }
}


pub(crate) fn generate_otp_from<E>(source: &mut E, length: Option<i64>) -> Result<String, RandomError>
where
    E: RngCore + CryptoRng + ?Sized,
{
    let length = resolve_otp_length(length);
    let mut rng = SecureRandom::from_entropy(source)?;
    Ok(rng.digits(length))
}



// Main functions ==============================

/// Random string of exactly `length` characters drawn from the union of
/// `charsets` (alphanumeric when none or only empty sets are given).
///
/// Not cryptographically secure. The length is capped by `u8`; call
/// repeatedly for longer output.
pub fn generate_random_string(length: u8, charsets: &[&str]) -> String {
    RandomStringGenerator::new(charsets).generate(length)
}


/// Numeric one-time password from OS-seeded ChaCha20.
///
/// `None` or a non-positive length yields [`OTP_DEFAULT_LENGTH`] digits,
/// anything above [`OTP_MAX_LENGTH`] is clamped.
///
/// # Errors
///
/// [`RandomError::RandomSource`] when the OS entropy source fails.
pub fn generate_otp(length: Option<i64>) -> Result<String, RandomError> {
    generate_otp_from(&mut OsRng, length)
}
