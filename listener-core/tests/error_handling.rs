use listener_core::{ConfigError, FetchError, ListenerError, NotifyError, ParseError};

#[test]
fn fetch_and_parse_failures_are_recoverable() {
    let fetch = ListenerError::Fetch(FetchError::Status {
        community: "medicine".to_string(),
        status: 404,
    });
    assert!(fetch.is_recoverable());

    let parse = ListenerError::Parse(ParseError::Malformed {
        community: "healthcare".to_string(),
        details: "unexpected end of stream".to_string(),
    });
    assert!(parse.is_recoverable());
}

#[test]
fn config_and_notify_failures_abort_the_run() {
    let config = ListenerError::Config(ConfigError::MissingEnvironmentVariable {
        var_name: "WEBHOOK_URL".to_string(),
    });
    assert!(!config.is_recoverable());

    let notify = ListenerError::Notify(NotifyError::Rejected {
        status: 500,
        body: "internal_error".to_string(),
    });
    assert!(!notify.is_recoverable());
}

#[test]
fn fetch_status_error_names_the_community_and_code() {
    let err = FetchError::Status {
        community: "residency".to_string(),
        status: 429,
    };
    let message = err.to_string();
    assert!(message.contains("r/residency"));
    assert!(message.contains("429"));
}

#[test]
fn webhook_rejection_carries_status_and_body() {
    let err = NotifyError::Rejected {
        status: 500,
        body: "invalid_blocks".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("invalid_blocks"));
}

#[test]
fn missing_webhook_variable_is_named_in_the_error() {
    let err = ConfigError::MissingEnvironmentVariable {
        var_name: "WEBHOOK_URL".to_string(),
    };
    assert!(err.to_string().contains("WEBHOOK_URL"));
}
