/// The only condition that aborts an aggregation. Everything else degrades the
/// snapshot and is reported through diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("root project model unavailable{}", format_failures(.failures))]
    RootProjectUnavailable { failures: Vec<String> },
}

fn format_failures(failures: &[String]) -> String {
    if failures.is_empty() {
        String::new()
    } else {
        format!(": {}", failures.join("; "))
    }
}

pub type AggregateResult<T> = std::result::Result<T, AggregateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_unavailable_message_lists_failures() {
        let err = AggregateError::RootProjectUnavailable {
            failures: vec!["settings.gradle: boom".to_string(), "timeout".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "root project model unavailable: settings.gradle: boom; timeout"
        );

        let bare = AggregateError::RootProjectUnavailable { failures: vec![] };
        assert_eq!(bare.to_string(), "root project model unavailable");
    }
}
