//! Command Line Interface for the trading expectancy calculator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use expectancy_domain::{DEFAULT_MAX_TRADES, RiskSizing};
use expectancy_simulation::{RngSource, StreakEstimator, TradeSequenceSimulator};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod input;
mod insights;
mod render;

use input::SimulateInput;
use insights::SIGNIFICANT_DRAWDOWN_PCT;
use render::{SimulationReport, StreakReport};

/// Width of the equity sparkline, in characters.
const SPARKLINE_WIDTH: usize = 60;
/// Trade cap applied by the CLI unless overridden.
const CLI_MAX_TRADES: usize = 1_000;

#[derive(Parser)]
#[command(name = "expectancy")]
#[command(about = "Trading expectancy and losing streak calculator", long_about = None)]
struct Cli {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Table,
        global = true,
        env = "EXPECTANCY_FORMAT"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Sizing {
    /// Risk a fixed fraction of the starting balance on every trade
    Fixed,
    /// Risk a fraction of the balance before each trade
    Compounding,
}

impl From<Sizing> for RiskSizing {
    fn from(sizing: Sizing) -> Self {
        match sizing {
            Sizing::Fixed => RiskSizing::FixedFractionOfInitial,
            Sizing::Compounding => RiskSizing::FractionOfCurrent,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one random sequence of trades
    Simulate {
        /// Initial account balance in dollars
        #[arg(short, long, default_value = "10000")]
        balance: Decimal,

        /// Win rate in percent
        #[arg(short, long, default_value = "40")]
        win_rate: Decimal,

        /// Reward:risk ratio (average winner / average loser)
        #[arg(short = 'r', long, default_value = "2")]
        reward_risk: Decimal,

        /// Percent of the account risked per trade
        #[arg(long, default_value = "1")]
        risk: Decimal,

        /// Number of trades to simulate
        #[arg(short, long, default_value_t = 100)]
        trades: u64,

        /// Risk sizing policy, fixed for the whole run
        #[arg(long, value_enum, default_value_t = Sizing::Fixed, env = "EXPECTANCY_SIZING")]
        sizing: Sizing,

        /// Seed for a reproducible run; random when omitted
        #[arg(long, env = "EXPECTANCY_SEED")]
        seed: Option<u64>,

        /// Upper bound on --trades
        #[arg(long, default_value_t = CLI_MAX_TRADES, env = "EXPECTANCY_MAX_TRADES")]
        max_trades: usize,

        /// Drawdown percent above which the run is flagged
        #[arg(long, default_value_t = SIGNIFICANT_DRAWDOWN_PCT, env = "EXPECTANCY_DRAWDOWN_ALERT")]
        drawdown_alert: Decimal,

        /// Print every trade
        #[arg(long)]
        show_trades: bool,
    },
    /// Estimate the longest expected losing streak
    Streaks {
        /// Number of trades in the sample
        #[arg(short, long, default_value_t = 100)]
        sample_size: u64,

        /// Single win rate in percent; sweeps 5% to 95% when omitted
        #[arg(short, long)]
        win_rate: Option<Decimal>,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            balance,
            win_rate,
            reward_risk,
            risk,
            trades,
            sizing,
            seed,
            max_trades,
            drawdown_alert,
            show_trades,
        } => {
            let max_trades = max_trades.min(DEFAULT_MAX_TRADES);
            let params = SimulateInput {
                balance,
                win_rate_pct: win_rate,
                reward_risk,
                risk_pct: risk,
                trades,
                risk_sizing: sizing.into(),
            }
            .into_parameters(max_trades)
            .context("invalid simulation input")?;

            let seed = seed.unwrap_or_else(rand::random);
            info!(seed, "Running trade sequence simulation");

            let simulator = TradeSequenceSimulator::new().with_max_trades(max_trades);
            let result = simulator
                .simulate(&params, &mut RngSource::seeded(seed))
                .context("simulation rejected the parameters")?;
            let insights = insights::insights(&result, drawdown_alert);

            match cli.format {
                OutputFormat::Json => {
                    let report = SimulationReport {
                        seed,
                        result: &result,
                        insights: &insights,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Table => {
                    println!("📊 Simulation Results (seed {seed})");
                    render::summary_table(&result).printstd();

                    println!("\nEquity Curve");
                    println!(
                        "{}",
                        render::sparkline(&result.equity_curve(), SPARKLINE_WIDTH)
                    );
                    println!(
                        "{} → {}",
                        render::money(params.account_balance),
                        render::money(result.final_balance)
                    );

                    println!("\nInsights");
                    for insight in &insights {
                        println!("{insight}");
                    }

                    if show_trades {
                        println!("\nTrade Data");
                        render::trades_table(&result).printstd();
                    }
                }
            }
        }
        Commands::Streaks {
            sample_size,
            win_rate,
        } => {
            let sample_size = input::sample_size(sample_size).context("invalid sample size")?;
            let estimator = match win_rate {
                Some(percent) => {
                    let rate = input::streak_win_rate(percent).context("invalid win rate")?;
                    StreakEstimator::new().with_win_rates(vec![rate])
                }
                None => StreakEstimator::new(),
            };
            debug!(sample_size, rates = estimator.win_rates().len(), "Estimating losing streaks");

            let estimates = estimator
                .table(sample_size)
                .context("streak estimation rejected the parameters")?;

            match cli.format {
                OutputFormat::Json => {
                    let report = StreakReport {
                        sample_size,
                        estimates: &estimates,
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                OutputFormat::Table => {
                    println!("📉 Expected Losing Streaks for {sample_size} Trades");
                    render::streak_table(sample_size, &estimates).printstd();
                    println!(
                        "\nExpected Maximum Losing Streak ≈ log(N) / log(1 / (1 - p)), \
                         N = number of trades, p = win rate"
                    );
                }
            }
        }
    }

    Ok(())
}
