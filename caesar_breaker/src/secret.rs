//! Secret source: a file path or the literal secret text

use std::borrow::Cow;

use tracing::debug;

/// Returns the contents of the file named by `secret`, or `secret` itself
/// when it does not name a readable file.
pub fn read_secret(secret: &str) -> Cow<'_, str> {
    match std::fs::read_to_string(secret) {
        Ok(contents) => Cow::Owned(contents),
        Err(err) => {
            debug!(error = %err, "secret is not a readable file, using it as text");
            Cow::Borrowed(secret)
        }
    }
}
