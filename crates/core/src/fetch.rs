use crate::diagnostics::{Diagnostic, DiagnosticScope, Diagnostics};
use buildscope_api::FetchResult;
use tracing::warn;

/// Unwraps a host fetch: every reported failure is logged and recorded
/// against `scope`, and the model (if any) is handed back. A fetch never
/// fails the caller.
pub fn unwrap_fetched<T>(
    result: FetchResult<T>,
    scope: &DiagnosticScope,
    diagnostics: &mut Diagnostics,
) -> Option<T> {
    let (model, failures) = result.into_parts();
    for failure in failures {
        warn!("{}: {}", scope, failure);
        diagnostics.push(Diagnostic::new(scope.clone(), failure.to_string()));
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildscope_api::Failure;

    #[test]
    fn failures_are_recorded_and_model_is_kept() {
        let mut diagnostics = Diagnostics::default();
        let result = FetchResult::ok(7).with_failure(Failure::new("partial"));
        let model = unwrap_fetched(result, &DiagnosticScope::RootProject, &mut diagnostics);
        assert_eq!(model, Some(7));
        assert_eq!(diagnostics.messages(), vec!["partial".to_string()]);
    }

    #[test]
    fn failed_fetch_degrades_to_absent() {
        let mut diagnostics = Diagnostics::default();
        let result: FetchResult<u8> = FetchResult::failed("no model");
        assert_eq!(
            unwrap_fetched(result, &DiagnosticScope::RootProject, &mut diagnostics),
            None
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn absent_fetch_is_silent() {
        let mut diagnostics = Diagnostics::default();
        let result: FetchResult<u8> = FetchResult::absent();
        assert_eq!(
            unwrap_fetched(result, &DiagnosticScope::RootProject, &mut diagnostics),
            None
        );
        assert!(diagnostics.is_empty());
    }
}
