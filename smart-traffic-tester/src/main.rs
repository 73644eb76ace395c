mod backend;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use backend::{HttpBackend, ProbeResult, run_probe};
use common::scenario::{get_scenario, list_scenarios, scenario_names};
use common::{parse_seeds, report_timestamp, split_csv};
use logic::{LogicTester, ScenarioResult};
use smart_traffic_core::AppConfig;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Routing logic scenarios against the core (fast, offline)
    Logic,
    /// Contract probes against a running prediction backend
    Backend,
    /// Run both logic scenarios and backend probes
    Both,
}

impl TestMode {
    const fn runs_logic(self) -> bool {
        matches!(self, Self::Logic | Self::Both)
    }

    const fn runs_backend(self) -> bool {
        matches!(self, Self::Backend | Self::Both)
    }
}

#[derive(Debug, Parser)]
#[command(name = "smart-traffic-tester", version = "0.1.0")]
#[command(about = "Automated QA for Smart Traffic - routing logic and backend contract checks")]
struct Args {
    /// Test mode: logic (offline), backend (needs a running API), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Base URL of the prediction backend (backend mode only)
    #[arg(long, default_value = "http://localhost:5001/api")]
    api_base: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    let machine_readable = args.report == "json";
    if !machine_readable {
        announce_banner();
    }

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let seeds = parse_seeds(&args.seeds)?;

    let logic_results = run_logic_scenarios(&args, &scenarios, &seeds, !machine_readable);
    let probe_results = run_backend_probe(&args, !machine_readable).await?;

    write_reports(&args, &logic_results, probe_results.as_deref(), start_time)?;

    let logic_failed = logic_results.iter().any(|r| !r.passed);
    let probe_failed = probe_results
        .as_deref()
        .is_some_and(|results| results.iter().any(|r| !r.passed));
    if logic_failed || probe_failed {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:15} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🚦 Smart Traffic Automated Tester".bright_cyan().bold());
    println!("{}", "=================================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for name in scenario_names() {
            if !scenarios.contains(&name) {
                scenarios.push(name);
            }
        }
    }
    scenarios
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[u64],
    announce: bool,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !args.mode.runs_logic() {
        return results;
    }

    if announce {
        println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
        println!("{}", "-".repeat(30).yellow());
    }

    let tester = LogicTester::new(args.verbose);
    for scenario_name in scenarios {
        if let Some(scenario) = get_scenario(scenario_name) {
            results.extend(tester.run_scenario(&scenario, seeds, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }
    results
}

async fn run_backend_probe(args: &Args, announce: bool) -> Result<Option<Vec<ProbeResult>>> {
    if !args.mode.runs_backend() {
        return Ok(None);
    }

    if announce {
        println!("{}", "🌐 Probing Backend".bright_blue().bold());
        println!("{}", "-".repeat(30).blue());
    }

    let config = AppConfig::default_config().with_api_base(&args.api_base);
    config
        .validate()
        .with_context(|| format!("invalid --api-base {:?}", args.api_base))?;
    let client = HttpBackend::new(config.clone())?;
    let results = run_probe(&client, &config).await?;
    for result in &results {
        if result.passed {
            log::info!("probe {} passed: {}", result.check, result.detail);
        } else {
            log::warn!("probe {} failed: {}", result.check, result.detail);
        }
    }
    Ok(Some(results))
}

fn write_probe_console(out: &mut impl Write, results: &[ProbeResult]) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "🌐 Backend Probe Results".bright_blue().bold())?;
    writeln!(out, "{}", "========================".blue())?;
    for result in results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(out, "{} {} - {}", status, result.check.bold(), result.detail)?;
    }
    Ok(())
}

fn write_probe_markdown(out: &mut impl Write, results: &[ProbeResult]) -> Result<()> {
    writeln!(out, "## Backend Probe\n")?;
    writeln!(out, "| Check | Result | Detail |")?;
    writeln!(out, "|-------|--------|--------|")?;
    for result in results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(out, "| {} | {status} | {} |", result.check, result.detail)?;
    }
    writeln!(out)?;
    Ok(())
}

fn write_reports(
    args: &Args,
    results: &[ScenarioResult],
    probe: Option<&[ProbeResult]>,
    start_time: Instant,
) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => {
            let report = serde_json::json!({
                "generated_at": report_timestamp(),
                "logic": results,
                "backend": probe,
            });
            serde_json::to_writer_pretty(&mut output_target, &report)?;
            writeln!(&mut output_target)?;
        }
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Smart Traffic Logic Test Results\n\n_No scenarios executed._\n"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
            if let Some(probe) = probe {
                write_probe_markdown(&mut output_target, probe)?;
            }
            writeln!(&mut output_target, "_Generated {}_", report_timestamp())?;
        }
        _ => {
            let duration = start_time.elapsed();
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(&mut output_target, results, duration)?;
            }
            if let Some(probe) = probe {
                write_probe_console(&mut output_target, probe)?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
