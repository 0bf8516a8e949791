use super::*;

fn submit_args(extra: &[&str]) -> SubmitArgs {
    let mut argv = vec![
        "autolead-cli",
        "--endpoint-url",
        "https://crm.example.ru/leads",
        "submit",
        "--name",
        "Иван Петров",
        "--phone",
        "+7 999 123-45-67",
        "--email",
        "ivan@example.com",
    ];
    argv.extend_from_slice(extra);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::Submit(args) => args,
        Command::Vehicles => panic!("expected submit"),
    }
}

#[test]
fn vehicle_flag_seeds_car_and_price() {
    let args = submit_args(&["--vehicle", "BMW X5 2022"]);
    let dialog = args.dialog();
    let form = dialog.form();

    assert!(dialog.is_open());
    assert_eq!(form.car_name, "BMW X5 2022");
    assert_eq!(form.car_price, 6_890_000);
    assert_eq!(form.name, "Иван Петров");
    assert_eq!(form.financing_type, FinancingType::Credit);
    assert_eq!(form.loan_term, LoanTerm::default());
    assert!(form.missing_required().is_empty());
}

#[test]
fn explicit_car_and_financing_options_map_to_fields() {
    let args = submit_args(&[
        "--car",
        "Lada Vesta 2024",
        "--price",
        "1500000",
        "--financing",
        "leasing",
        "--initial-payment",
        "300000",
        "--term",
        "36",
        "--city",
        "Казань",
        "--comment",
        "Звонить после 18:00",
    ]);
    let form = args.dialog().form().clone();

    assert_eq!(form.car_name, "Lada Vesta 2024");
    assert_eq!(form.car_price, 1_500_000);
    assert_eq!(form.financing_type, FinancingType::Leasing);
    assert_eq!(form.initial_payment, 300_000);
    assert_eq!(form.loan_term.months(), 36);
    assert_eq!(form.city, "Казань");
    assert_eq!(form.comment, "Звонить после 18:00");
}

#[test]
fn unknown_vehicle_is_rejected() {
    let err = Cli::try_parse_from([
        "autolead-cli",
        "submit",
        "--name",
        "a",
        "--phone",
        "b",
        "--email",
        "c",
        "--vehicle",
        "Lada Niva",
    ])
    .unwrap_err();
    assert!(err.to_string().contains("unknown vehicle"));
}

#[test]
fn term_outside_the_allowed_set_is_rejected() {
    assert!(parse_term("18").is_err());
    assert!(parse_term("abc").is_err());
    assert_eq!(parse_term("84").unwrap().months(), 84);
}

#[test]
fn car_is_required_without_vehicle() {
    let result = Cli::try_parse_from(["autolead-cli", "submit", "--name", "a", "--phone", "b", "--email", "c"]);
    assert!(result.is_err());
}

#[test]
fn blank_name_is_reported_as_missing() {
    let args = submit_args(&["--vehicle", "Kia K5 2023"]);
    let args = SubmitArgs { name: "   ".to_owned(), ..args };
    let missing = args.dialog().form().missing_required();
    assert_eq!(missing_fields(&missing), "name");
}

#[test]
fn endpoint_must_be_present_and_valid() {
    assert!(matches!(resolve_endpoint(None), Err(ConfigError::MissingEndpoint { .. })));
    assert!(matches!(resolve_endpoint(Some("crm.example.ru")), Err(ConfigError::InvalidEndpoint(_))));
    assert_eq!(resolve_endpoint(Some(" https://crm.example.ru/leads ")).unwrap().endpoint_url, "https://crm.example.ru/leads");
}

#[test]
fn endpoint_flag_reads_the_shared_env_variable() {
    use clap::CommandFactory;

    let command = Cli::command();
    let endpoint = command.get_arguments().find(|arg| arg.get_id() == "endpoint_url").unwrap();

    assert_eq!(endpoint.get_env(), Some(std::ffi::OsStr::new(ENDPOINT_URL_ENV)));
}
