use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated document identifiers
pub const DOCUMENT_ID_LENGTH: usize = 20;

/// Generate a random alphanumeric document identifier.
pub fn generate_document_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(DOCUMENT_ID_LENGTH)
        .map(char::from)
        .collect()
}
