use clap::Parser;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn alerts_list_parses_filter_flags() {
    let cli = Cli::try_parse_from([
        "scanner-cli",
        "--token",
        "tok",
        "alerts",
        "list",
        "--category",
        "fire",
        "--stars",
        "3",
        "--page",
        "2",
        "--csv",
        "-",
    ])
    .unwrap();
    let Command::Alerts(AlertsCommand { command: AlertsSubcommand::List { filter, csv } }) = cli.command else {
        panic!("expected alerts list");
    };
    assert_eq!(filter.category, "fire");
    assert_eq!(filter.stars, 3);
    assert_eq!(filter.page, 2);
    assert_eq!(filter.limit, 10);
    assert_eq!(csv.as_deref(), Some("-"));
}

#[test]
fn users_add_parses_permission() {
    let cli = Cli::try_parse_from([
        "scanner-cli",
        "users",
        "add",
        "--full-name",
        "Jane",
        "--phone",
        "555-0100",
        "--email",
        "jane@example.test",
        "--pin",
        "1234",
        "--permission",
        "manager",
    ])
    .unwrap();
    let Command::Users(UsersCommand { command: UsersSubcommand::Add(args) }) = cli.command else {
        panic!("expected users add");
    };
    assert_eq!(args.permission, Permission::Manager);
}

#[test]
fn unknown_permission_is_rejected_by_parser() {
    let result = Cli::try_parse_from(["scanner-cli", "users", "list", "--permission", "root"]);
    assert!(result.is_err());
}

#[test]
fn settings_category_accepts_label() {
    let cli =
        Cli::try_parse_from(["scanner-cli", "settings", "sub-categories", "--category", "Police Dispatch"]).unwrap();
    let Command::Settings(SettingsCommand { command: SettingsSubcommand::SubCategories { category, search } }) =
        cli.command
    else {
        panic!("expected settings sub-categories");
    };
    assert_eq!(category, AlertCategory::Police);
    assert_eq!(search, None);
}

#[test]
fn status_error_prefers_backend_message() {
    let err = backend::status_error(400, r#"{"message":["email taken","pin too short"]}"#);
    assert_eq!(err.to_string(), "backend returned 400: email taken, pin too short");
    let err = backend::status_error(502, "<html>");
    assert_eq!(err.to_string(), "backend returned 502: request failed");
}

#[test]
fn protected_commands_need_a_token() {
    let ctx = CliContext {
        backend: Backend::new("http://127.0.0.1:1", None).unwrap(),
        audio_base_url: String::new(),
        json: false,
        authenticated: false,
    };
    assert!(matches!(ctx.require_token(), Err(CliError::MissingToken)));
}
