//! Environment lookups used to stamp contributor metadata.

/// Name of the user running the current process.
///
/// Falls back to an empty string when the platform reports no name, so a
/// missing login never prevents a document from being constructed.
pub fn current_user() -> String {
    let name = whoami::username();
    if name.trim().is_empty() {
        tracing::debug!("platform reported an empty user name");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_is_stable() {
        assert_eq!(current_user(), current_user());
    }
}
