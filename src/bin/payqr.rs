use clap::{Parser, Subcommand, ValueEnum};
use pay_qr::encoder::KNOWN_WALLETS;
use pay_qr::models::{BillPayment, BillService, InitiationMethod, Provider};
use pay_qr::pipeline::generate_all_for;
use pay_qr::render::{RenderFormat, render};
use pay_qr::tools::{default_request, prepare_purpose, read_batch, render_options};
use pay_qr::{GeneratedCode, ScanAction, WalletTarget, classify, generate, verify_frame};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "payqr", version, about = "VietQR payment code generator and scan classifier")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    /// Print the code text
    Text,
    /// Draw the code in the terminal
    Terminal,
    /// Write a PNG image
    Png,
    /// Write an SVG image
    Svg,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a payment code
    Generate {
        /// Beneficiary bank BIN (default: PAYQR_BANK_BIN)
        #[arg(long)]
        bank: Option<String>,
        /// Beneficiary account (default: PAYQR_ACCOUNT)
        #[arg(long)]
        account: Option<String>,
        /// Amount in VND
        #[arg(long)]
        amount: Option<String>,
        /// Transfer purpose
        #[arg(long, conflicts_with_all = ["service", "provider"])]
        purpose: Option<String>,
        /// Bill category (electric, water, bill), used with --provider
        #[arg(long, requires = "provider")]
        service: Option<BillService>,
        /// Bill provider (EVN, VIETTEL, NUOC, FPT, VNPT)
        #[arg(long, requires = "service")]
        provider: Option<Provider>,
        /// Wallet the payer selected; MoMo produces a deep link
        #[arg(long)]
        wallet: Option<String>,
        /// Mark the code as reusable (initiation method 11)
        #[arg(long = "static")]
        reusable: bool,
        /// Fold Vietnamese diacritics in the purpose to ASCII
        #[arg(long)]
        transliterate: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        output: Output,
        /// Destination file for png/svg output
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Classify text decoded from a QR code
    Classify {
        /// Decoded text
        text: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check the CRC of a payment payload
    Verify {
        /// Payload text
        payload: String,
    },
    /// Generate codes for every line of a file (bank,account,amount,wallet,purpose)
    Batch {
        /// Input file
        file: PathBuf,
    },
    /// List wallet names accepted by --wallet
    Wallets,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_from_env("PAYQR_LOG"))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Generate {
            bank,
            account,
            amount,
            purpose,
            service,
            provider,
            wallet,
            reusable,
            transliterate,
            output,
            out,
        } => {
            let mut request = default_request();
            if let Some(bank) = bank {
                request.bank_id = bank;
            }
            if let Some(account) = account {
                request.account_number = account;
            }
            request.amount = amount;
            request.purpose = match (service, provider) {
                (Some(service), Some(provider)) => {
                    Some(BillPayment::new(service, provider).purpose_text())
                }
                _ => purpose.map(|p| prepare_purpose(&p, transliterate)),
            };
            if reusable {
                request.initiation = InitiationMethod::Static;
            }

            let target = WalletTarget::resolve(wallet.as_deref());
            match generate(&request, target) {
                Ok(code) => emit(&code, output, out.as_deref()),
                Err(err) => {
                    eprintln!("Cannot encode payment code: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Classify { text, json } => classify_cmd(&text, json),
        Command::Verify { payload } => {
            if verify_frame(&payload) {
                println!("OK");
                ExitCode::SUCCESS
            } else {
                println!("CRC mismatch");
                ExitCode::FAILURE
            }
        }
        Command::Batch { file } => batch_cmd(&file),
        Command::Wallets => {
            for wallet in KNOWN_WALLETS {
                let route = match WalletTarget::resolve(Some(wallet)) {
                    WalletTarget::VietQr => "vietqr".to_string(),
                    WalletTarget::DeepLink(w) => format!("{}://", w.scheme()),
                };
                println!("{wallet:<16} {route}");
            }
            ExitCode::SUCCESS
        }
    }
}

fn emit(code: &GeneratedCode, output: Output, out: Option<&Path>) -> ExitCode {
    let format = match output {
        Output::Text => {
            println!("{}", code.as_str());
            return ExitCode::SUCCESS;
        }
        Output::Terminal => RenderFormat::Terminal,
        Output::Png => RenderFormat::Png,
        Output::Svg => RenderFormat::Svg,
    };

    let bytes = match render(code.as_str(), &render_options(format)) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Cannot render QR code: {err}");
            return ExitCode::FAILURE;
        }
    };

    let written = match out {
        Some(path) => std::fs::write(path, &bytes).map(|_| {
            debug!(path = %path.display(), bytes = bytes.len(), "wrote QR image");
        }),
        None => std::io::stdout().write_all(&bytes),
    };
    match written {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Cannot write output: {err}");
            ExitCode::FAILURE
        }
    }
}

fn classify_cmd(text: &str, json: bool) -> ExitCode {
    let result = classify(text);
    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("Cannot serialize result: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("Kind: {:?}", result.kind());
    println!("Actionable: {}", result.is_actionable());
    match result.action() {
        ScanAction::Navigate(url) => println!("Open: {url}"),
        ScanAction::Notice(notice) => println!("Notice: {notice}"),
        ScanAction::Display(text) => println!("Text: {text}"),
    }
    ExitCode::SUCCESS
}

fn batch_cmd(file: &Path) -> ExitCode {
    let entries = match read_batch(file) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let mut failed = 0usize;
    let mut jobs = Vec::with_capacity(entries.len());
    let mut lines = Vec::with_capacity(entries.len());
    for (line, parsed) in entries {
        match parsed {
            Ok(job) => {
                jobs.push(job);
                lines.push(line);
            }
            Err(err) => {
                eprintln!("line {line}: {err}");
                failed += 1;
            }
        }
    }

    for (line, result) in lines.iter().zip(generate_all_for(&jobs)) {
        match result {
            Ok(code) => println!("{}", code.into_string()),
            Err(err) => {
                eprintln!("line {line}: {err}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
