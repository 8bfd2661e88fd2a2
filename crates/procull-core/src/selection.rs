use crate::error::CullError;

/// Parse an operator selection: comma-separated indices, order preserved,
/// duplicates kept. Any token that is not an unsigned integer after trimming
/// voids the whole selection, since a single bad token makes the batch
/// indeterminate and nothing should get killed.
///
/// No range syntax and no bounds checking here; bounds are checked by the
/// scanner against the scan result the indices point into.
pub fn parse_selection(input: &str) -> Result<Vec<usize>, CullError> {
    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<usize>()
                .map_err(|_| CullError::InvalidSelection(format!("not an index: {token:?}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_index() {
        assert_eq!(parse_selection("0").unwrap(), vec![0]);
    }

    #[test]
    fn test_multiple_indices_keep_operator_order() {
        assert_eq!(parse_selection("2,0,1").unwrap(), vec![2, 0, 1]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(parse_selection(" 3 ,\t1 ").unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(parse_selection("1,1").unwrap(), vec![1, 1]);
    }

    #[test]
    fn test_non_integer_token_voids_the_batch() {
        assert!(matches!(
            parse_selection("1,x"),
            Err(CullError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_negative_token_voids_the_batch() {
        assert!(parse_selection("-1").is_err());
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert!(parse_selection("").is_err());
    }

    #[test]
    fn test_trailing_comma_is_invalid() {
        assert!(parse_selection("1,").is_err());
    }
}
