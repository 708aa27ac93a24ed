use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use wrap_cli::currency::format_usd;
use wrap_cli::form::EstimateForm;
use wrap_core::Estimator;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Instant price estimates for stage and floor wrap installations.
///
/// Flags take the same values the quote form does; anything left out behaves
/// exactly like an untouched form field. A section with missing or invalid
/// dimensions is simply not priced.
#[derive(Debug, Parser)]
struct Cli {
    /// Whether the event has a stage (yes/no).
    #[arg(long, default_value = "yes")]
    has_stage: String,

    /// Stage width in feet.
    #[arg(long, default_value = "")]
    stage_width: String,

    /// Stage length in feet.
    #[arg(long, default_value = "")]
    stage_length: String,

    /// Stage height selection: 3ft, 4ft, 5ft, or 6ft.
    #[arg(long, default_value = "")]
    stage_height: String,

    /// Stage finish: white, mettleBlack, or fullPrint.
    #[arg(long, default_value = "")]
    stage_finish: String,

    /// Floor width in feet.
    #[arg(long, default_value = "")]
    floor_width: String,

    /// Floor length in feet.
    #[arg(long, default_value = "")]
    floor_length: String,

    /// Matte black floor finish (yes/no).
    #[arg(long, default_value = "no")]
    matte_black: String,

    /// Floor design: print10x10, print12x12, print15x15, fullPrint,
    /// noDesign, chrome10x10, chrome12x12, or chrome15x15.
    #[arg(long, default_value = "")]
    design: String,

    /// Border type: none, chromeGold, chromeSilver, or glossBlack.
    #[arg(long, default_value = "none")]
    border: String,

    /// Border width: 4in or 6in.
    #[arg(long, default_value = "4in")]
    border_width: String,

    /// Print the estimate as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn form(&self) -> EstimateForm {
        EstimateForm {
            has_stage: self.has_stage.clone(),
            stage_width: self.stage_width.clone(),
            stage_length: self.stage_length.clone(),
            stage_height: self.stage_height.clone(),
            stage_finish: self.stage_finish.clone(),
            floor_width: self.floor_width.clone(),
            floor_length: self.floor_length.clone(),
            matte_black: self.matte_black.clone(),
            design_type: self.design.clone(),
            border_type: self.border.clone(),
            border_width: self.border_width.clone(),
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let request = cli.form().to_request();
    debug!(?request, "assembled estimate request");

    let estimate = Estimator::default().estimate(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("Market price: {}", format_usd(estimate.market_price));
        println!("Vendor price: {}", format_usd(estimate.vendor_price));
    }

    Ok(())
}
