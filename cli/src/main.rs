mod terminal;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::cell::RefCell;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use leads::application::Field;
use leads::catalog::{self, VEHICLES};
use leads::config::ENDPOINT_URL_ENV;
use leads::{
    ApplicationDialog, ConfigError, DialogError, EndpointConfig, FieldUpdate, FinancingType, LoanTerm, Seed, SubmissionWorkflow,
    SubmitOutcome, TransportError, Vehicle, submit_dialog,
};
use tracing_subscriber::EnvFilter;

use crate::terminal::{TerminalNotifier, TokioScheduler};
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("required fields are empty: {0}")]
    Incomplete(String),
    #[error("application rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("a submission is already in progress")]
    Busy,
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

#[derive(Parser, Debug)]
#[command(name = "autolead-cli", about = "Submit car purchase applications to a lead endpoint")]
struct Cli {
    #[arg(long, env = ENDPOINT_URL_ENV)]
    endpoint_url: Option<String>,

    #[arg(long, env = "AUTOLEAD_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog vehicles accepted by `submit --vehicle`.
    Vehicles,
    /// Post one application and print the endpoint's answer.
    Submit(SubmitArgs),
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    email: String,

    #[arg(long, help = "Catalog vehicle name, fills in car and price", value_parser = parse_vehicle)]
    vehicle: Option<&'static Vehicle>,

    #[arg(long, required_unless_present = "vehicle", conflicts_with = "vehicle")]
    car: Option<String>,

    #[arg(long, help = "Car price in roubles", required_unless_present = "vehicle", conflicts_with = "vehicle")]
    price: Option<u64>,

    #[arg(long, default_value = "credit", value_parser = FinancingType::parse)]
    financing: FinancingType,

    #[arg(long, default_value_t = 0)]
    initial_payment: u64,

    #[arg(long, help = "Loan term in months: 12, 24, 36, 48, 60 or 84", default_value = "60", value_parser = parse_term)]
    term: LoanTerm,

    #[arg(long, default_value = "")]
    city: String,

    #[arg(long, default_value = "")]
    comment: String,
}

impl SubmitArgs {
    fn seed(&self) -> Seed {
        match self.vehicle {
            Some(vehicle) => Seed::from(vehicle),
            None => Seed::new(self.car.clone().unwrap_or_default(), self.price.unwrap_or_default()),
        }
    }

    fn updates(&self) -> Vec<FieldUpdate> {
        vec![
            FieldUpdate::Name(self.name.clone()),
            FieldUpdate::Phone(self.phone.clone()),
            FieldUpdate::Email(self.email.clone()),
            FieldUpdate::FinancingType(self.financing),
            FieldUpdate::InitialPayment(self.initial_payment),
            FieldUpdate::LoanTerm(self.term),
            FieldUpdate::City(self.city.clone()),
            FieldUpdate::Comment(self.comment.clone()),
        ]
    }

    /// An open dialog holding the application described by the arguments.
    fn dialog(&self) -> ApplicationDialog {
        let mut dialog = ApplicationDialog::default();
        dialog.open(Some(self.seed()));
        for update in self.updates() {
            dialog.update(update);
        }
        dialog
    }
}

fn parse_vehicle(raw: &str) -> Result<&'static Vehicle, String> {
    catalog::find(raw).ok_or_else(|| {
        let names = VEHICLES.iter().map(|v| v.name).collect::<Vec<_>>().join(", ");
        format!("unknown vehicle `{raw}`; expected one of: {names}")
    })
}

fn parse_term(raw: &str) -> Result<LoanTerm, String> {
    let months = raw.trim().parse::<i64>().map_err(|e| format!("invalid term `{raw}`: {e}"))?;
    LoanTerm::new(months).map_err(|e| e.to_string())
}

fn resolve_endpoint(raw: Option<&str>) -> Result<EndpointConfig, ConfigError> {
    let raw = raw.ok_or(ConfigError::MissingEndpoint { var: ENDPOINT_URL_ENV })?;
    EndpointConfig::parse(raw)
}

fn missing_fields(fields: &[Field]) -> String {
    fields.iter().map(|f| f.key()).collect::<Vec<_>>().join(", ")
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Vehicles => {
            print_vehicles();
            Ok(())
        }
        Command::Submit(args) => run_submit(cli.endpoint_url.as_deref(), cli.timeout_secs, &args).await,
    }
}

fn print_vehicles() {
    for vehicle in &VEHICLES {
        println!("{:<20} {:>14}  {}", vehicle.name, vehicle.price_label(), vehicle.specs);
    }
}

async fn run_submit(endpoint_url: Option<&str>, timeout_secs: u64, args: &SubmitArgs) -> Result<(), CliError> {
    let endpoint = resolve_endpoint(endpoint_url)?;
    let dialog = args.dialog();
    let missing = dialog.form().missing_required();
    if !missing.is_empty() {
        return Err(CliError::Incomplete(missing_fields(&missing)));
    }

    let transport = ReqwestTransport::new(Duration::from_secs(timeout_secs))?;
    let notifier = TerminalNotifier;
    let scheduler = TokioScheduler::new(notifier);
    let dialog = RefCell::new(dialog);

    tracing::info!(endpoint = %endpoint.endpoint_url, car = %dialog.borrow().form().car_name, "submitting application");
    let outcome = {
        let workflow = SubmissionWorkflow::new(&endpoint, transport, notifier, &scheduler);
        submit_dialog(&dialog, &workflow).await
    };
    scheduler.drain().await;

    match outcome {
        SubmitOutcome::Accepted { application_id, .. } => {
            tracing::info!(application_id = application_id.as_deref().unwrap_or("-"), "application accepted");
            Ok(())
        }
        SubmitOutcome::Rejected { error } => Err(CliError::Rejected(error.unwrap_or_else(|| "no reason given".to_owned()))),
        SubmitOutcome::Failed(e) => Err(CliError::Transport(e)),
        SubmitOutcome::Busy => Err(CliError::Busy),
        SubmitOutcome::Refused(DialogError::Incomplete(missing)) => Err(CliError::Incomplete(missing_fields(&missing))),
        SubmitOutcome::Refused(e) => Err(CliError::Dialog(e)),
    }
}
