//! Centralized validation of user-supplied queries.

/// Longest query accepted from the CLI or web form, in characters
pub const MAX_QUERY_LENGTH: usize = 256;

/// Most food names accepted in a single compare or label request
pub const MAX_BATCH_SIZE: usize = 20;

/// Input validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid food name")]
    EmptyQuery,
    #[error("Query too long: exceeds {MAX_QUERY_LENGTH} characters")]
    QueryTooLong,
    #[error("Query contains control characters")]
    InvalidCharacters,
    #[error("Please enter at least one food name")]
    EmptyBatch,
    #[error("Too many food names: at most {MAX_BATCH_SIZE} per request")]
    BatchTooLarge,
}

/// Normalize a query for matching: trimmed and lower-cased.
///
/// # Examples
///
/// ```
/// use food_resolver::utils::validation::normalize_query;
///
/// assert_eq!(normalize_query("  RAGI "), "ragi");
/// assert_eq!(normalize_query("రాగులు"), "రాగులు");
/// ```
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Check a raw query before it reaches the resolver.
///
/// Returns the trimmed query on success.
///
/// # Errors
///
/// Returns `ValidationError::EmptyQuery` for blank input,
/// `ValidationError::QueryTooLong` past [`MAX_QUERY_LENGTH`] characters, or
/// `ValidationError::InvalidCharacters` if it contains control characters.
pub fn validate_query(query: &str) -> Result<&str, ValidationError> {
    let trimmed = query.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    if trimmed.chars().count() > MAX_QUERY_LENGTH {
        return Err(ValidationError::QueryTooLong);
    }

    if trimmed.chars().any(char::is_control) {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(trimmed)
}

/// Split a comma-separated list of food names, dropping blank items.
///
/// # Examples
///
/// ```
/// use food_resolver::utils::validation::split_food_list;
///
/// assert_eq!(split_food_list("Ragi, Wheat,,  Oats "), vec!["Ragi", "Wheat", "Oats"]);
/// ```
#[must_use]
pub fn split_food_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Flatten raw arguments that may themselves be comma-separated lists
#[must_use]
pub fn expand_food_args<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| split_food_list(arg.as_ref()))
        .collect()
}

/// Check a batch of names for compare and label requests.
///
/// Individual blank names are not an error here; they simply resolve to nothing.
///
/// # Errors
///
/// Returns `ValidationError::EmptyBatch` if no name is non-blank, or
/// `ValidationError::BatchTooLarge` past [`MAX_BATCH_SIZE`] names.
pub fn validate_batch<S: AsRef<str>>(names: &[S]) -> Result<(), ValidationError> {
    if names.iter().all(|n| n.as_ref().trim().is_empty()) {
        return Err(ValidationError::EmptyBatch);
    }

    if names.len() > MAX_BATCH_SIZE {
        return Err(ValidationError::BatchTooLarge);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("Finger Millet"), "finger millet");
        assert_eq!(normalize_query("\tOATS\n"), "oats");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_validate_query_blank() {
        assert_eq!(validate_query(""), Err(ValidationError::EmptyQuery));
        assert_eq!(validate_query("   "), Err(ValidationError::EmptyQuery));
        assert_eq!(validate_query("\n\t"), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn test_validate_query_trims() {
        assert_eq!(validate_query("  ragi  "), Ok("ragi"));
    }

    #[test]
    fn test_validate_query_length_counts_characters() {
        // Telugu characters are multi-byte; the limit is on characters
        let telugu = "రా".repeat(MAX_QUERY_LENGTH / 2);
        assert!(telugu.len() > MAX_QUERY_LENGTH);
        assert!(validate_query(&telugu).is_ok());

        let too_long = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert_eq!(validate_query(&too_long), Err(ValidationError::QueryTooLong));
    }

    #[test]
    fn test_validate_query_control_characters() {
        assert_eq!(
            validate_query("rag\x00i"),
            Err(ValidationError::InvalidCharacters)
        );
    }

    #[test]
    fn test_split_food_list() {
        assert_eq!(split_food_list("Ragi"), vec!["Ragi"]);
        assert!(split_food_list(" , ,").is_empty());
    }

    #[test]
    fn test_expand_food_args() {
        let args = ["Ragi, Wheat", "Oats"];
        assert_eq!(expand_food_args(&args), vec!["Ragi", "Wheat", "Oats"]);
    }

    #[test]
    fn test_validate_batch() {
        assert!(validate_batch(&["Ragi", "", "Wheat"]).is_ok());
        assert_eq!(
            validate_batch(&["", " "]),
            Err(ValidationError::EmptyBatch)
        );
        let empty: [&str; 0] = [];
        assert_eq!(validate_batch(&empty), Err(ValidationError::EmptyBatch));

        let many = vec!["oats"; MAX_BATCH_SIZE + 1];
        assert_eq!(validate_batch(&many), Err(ValidationError::BatchTooLarge));
    }
}
