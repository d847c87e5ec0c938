use thiserror::Error;

/// Why a function's source could not be turned into a score.
///
/// Never escapes [`analyze_source`](crate::analyze_source): the failure is
/// folded into a zero-valued [`ComplexityReport`](super::ComplexityReport)
/// with the description attached.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("unparsable source: {0}")]
    Parse(#[from] syn::Error),

    #[error("function '{name}' not found in source")]
    FunctionNotFound { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_not_found_message() {
        let err = AnalyzeError::FunctionNotFound {
            name: "missing_fn".into(),
        };
        assert_eq!(err.to_string(), "function 'missing_fn' not found in source");
    }

    #[test]
    fn parse_message_wraps_syn_error() {
        let syn_err = syn::parse_str::<syn::File>("fn broken(").unwrap_err();
        let err = AnalyzeError::from(syn_err);
        assert!(err.to_string().starts_with("unparsable source: "));
    }
}
