use chrono::Utc;
use rand::Rng;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Generates an opaque identifier of the form `id-<unix millis>-<suffix>`.
///
/// Uniqueness is probabilistic and only meant for a single local data set.
/// Not suitable where unpredictability matters.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_ALPHABET[rng.random_range(0..SUFFIX_ALPHABET.len())] as char)
        .collect();

    format!("id-{}-{}", Utc::now().timestamp_millis(), suffix)
}
