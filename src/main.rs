use clap::{Parser, Subcommand};
use payment_in_sync::generator::{generate_payments, GeneratorConfig};
use payment_in_sync::logging::{self, LogSettings};
use payment_in_sync::{
    patch_payment, PaymentConverter, PaymentDomain, PaymentRecord, TypeRegistry,
    UuidIdentityResolver,
};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "payment-in-sync")]
#[command(about = "Payment-in record mapping and patching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate(GenerateArgs),
    ToDomain(ConvertArgs),
    FromDomain(ConvertArgs),
    Patch(PatchArgs),
}

#[derive(Parser)]
struct GenerateArgs {
    #[arg(long, default_value_t = 10)]
    count: usize,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 3)]
    max_children: usize,
    #[arg(long, default_value_t = 0.8)]
    priced_ratio: f64,
    #[arg(long, default_value = "EUR")]
    currency: String,
    #[arg(long, default_value = "data/payments.json")]
    output: PathBuf,
}

#[derive(Parser)]
struct ConvertArgs {
    #[arg(long)]
    input: PathBuf,
    /// Writes to stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct PatchArgs {
    /// Freshly built records.
    #[arg(long)]
    source: PathBuf,
    /// Stored records, matched to sources by operation id.
    #[arg(long)]
    target: PathBuf,
    #[arg(long)]
    output: Option<PathBuf>,
    /// Zero stored monetary fields before merging so they are taken from the source.
    #[arg(long, default_value_t = false)]
    reset_prices: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    logging::init_logging("payment-in-sync", &LogSettings::from_env())?;
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::ToDomain(args) => run_to_domain(args),
        Command::FromDomain(args) => run_from_domain(args),
        Command::Patch(args) => run_patch(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let seed = args.seed.unwrap_or_else(random_seed);
    let config = GeneratorConfig {
        payments: args.count,
        max_children: args.max_children,
        priced_ratio: args.priced_ratio,
        currency: args.currency,
    };

    let start = Instant::now();
    let payments = generate_payments(&config, seed)?;
    write_json(Some(args.output.as_path()), &payments)?;

    emit_info_line(&format!(
        "Generated {} payments (seed {}), output {}",
        payments.len(),
        seed,
        args.output.display()
    ));
    emit_info_line(&format!("Generation time: {} ms", start.elapsed().as_millis()));
    Ok(())
}

fn run_to_domain(args: ConvertArgs) -> Result<(), String> {
    let records: Vec<PaymentRecord> = read_json(&args.input)?;
    let registry = TypeRegistry::new();
    let converter = PaymentConverter::new(&registry);

    let payments = records
        .iter()
        .map(|record| converter.to_domain(record))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.to_string())?;
    write_json(args.output.as_deref(), &payments)?;

    emit_info_line(&format!("Converted {} record(s) to domain", payments.len()));
    Ok(())
}

fn run_from_domain(args: ConvertArgs) -> Result<(), String> {
    let payments: Vec<PaymentDomain> = read_json(&args.input)?;
    let registry = TypeRegistry::new();
    let converter = PaymentConverter::new(&registry);

    let records = payments
        .iter()
        .map(|payment| converter.from_domain(payment, &UuidIdentityResolver))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.to_string())?;
    write_json(args.output.as_deref(), &records)?;

    emit_info_line(&format!("Converted {} payment(s) to records", records.len()));
    Ok(())
}

fn run_patch(args: PatchArgs) -> Result<(), String> {
    let sources: Vec<PaymentRecord> = read_json(&args.source)?;
    let mut targets: Vec<PaymentRecord> = read_json(&args.target)?;

    let index: HashMap<String, usize> = targets
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| record.operation.id.clone().map(|id| (id, idx)))
        .collect();

    let mut patched = 0usize;
    let mut prices_kept = 0usize;
    let mut appended = 0usize;
    for source in sources {
        let slot = source
            .operation
            .id
            .as_ref()
            .and_then(|id| index.get(id).copied());
        let Some(slot) = slot else {
            log::info!(
                "no stored payment for {}, appending as new",
                source.operation.id.as_deref().unwrap_or("<no id>")
            );
            targets.push(source);
            appended += 1;
            continue;
        };

        let target = &mut targets[slot];
        if args.reset_prices {
            target.reset_prices();
        }
        let outcome = patch_payment(&source, target).map_err(|err| err.to_string())?;
        patched += 1;
        if !outcome.prices_overwritten {
            prices_kept += 1;
        }
    }
    write_json(args.output.as_deref(), &targets)?;

    emit_info_line(&format!(
        "Patch: patched={} appended={} stored_prices_kept={}",
        patched, appended, prices_kept
    ));
    Ok(())
}

fn random_seed() -> u64 {
    let mut rng = rand::rngs::OsRng;
    rng.gen()
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    serde_json::from_str(&raw).map_err(|err| format!("invalid JSON in {}: {}", path.display(), err))
}

fn write_json<T: Serialize + ?Sized>(output: Option<&Path>, value: &T) -> Result<(), String> {
    let body = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                create_dir_all(parent).map_err(|err| err.to_string())?;
            }
            std::fs::write(path, body).map_err(|err| err.to_string())
        }
        None => {
            println!("{body}");
            Ok(())
        }
    }
}

fn emit_info_line(message: &str) {
    if log::log_enabled!(log::Level::Info) {
        log::info!("{}", message);
    } else {
        eprintln!("{message}");
    }
}
