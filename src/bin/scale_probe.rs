use std::env;
use std::time::Instant;

use palindrome_count::utils::{center_count, max_palindromic_substrings};
use palindrome_count::PalindromeCounter;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[64, 256, 512, 1024, 2048, 4096, 8192, 16384];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Palindrome Count Scaling Probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the center-expansion counter on deterministic inputs of");
    eprintln!("increasing size and checks:");
    eprintln!(
        "  • Correctness: counts match a brute-force baseline (up to size {})",
        options.verify_limit
    );
    eprintln!("  • Closed form: all-identical inputs give n(n+1)/2 at every size");
    eprintln!("  • Memory: the counter allocates nothing beyond its input");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] All-identical symbols (worst case)...");
    measurements.extend(run_family("uniform", uniform, &options, &mut sys));
    eprintln!();

    eprintln!("[2/3] Alternating two-symbol input...");
    measurements.extend(run_family("alternating", alternating, &options, &mut sys));
    eprintln!();

    eprintln!("[3/3] Cyclic ACGT input (best case)...");
    measurements.extend(run_family("cyclic_acgt", cyclic_acgt, &options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unknown argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input verified against the brute-force baseline (default: 512)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --verify-limit 256
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    len: usize,
    centers: usize,
    count: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_family(
    scenario: &'static str,
    generate: fn(usize) -> Vec<u8>,
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
            let input = generate(len);
            let m = measure(scenario, &input, sys, |count| {
                if scenario == "uniform" {
                    let closed = max_palindromic_substrings(len);
                    if closed != count {
                        return (
                            VerificationStatus::Failed,
                            Some(format!("closed form {closed}, got {count}")),
                        );
                    }
                }
                if len <= options.verify_limit {
                    let baseline = brute_force_count(&input);
                    if baseline == count {
                        (VerificationStatus::Passed, None)
                    } else {
                        (
                            VerificationStatus::Failed,
                            Some(format!("expected {baseline}, got {count}")),
                        )
                    }
                } else if scenario == "uniform" {
                    (VerificationStatus::Passed, None)
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} count={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                m.count,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn measure<F>(scenario: &'static str, input: &[u8], sys: &mut System, verify: F) -> Measurement
where
    F: FnOnce(usize) -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let count = PalindromeCounter::new(input).count();
    let duration = start.elapsed();
    let after = rss_kib(sys);
    let (status, detail) = verify(count);

    Measurement {
        scenario,
        len: input.len(),
        centers: center_count(input.len()),
        count,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} (len={})", m.scenario, m.len);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All verified runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!("  • Time on 'uniform' should grow roughly 4x per doubling (quadratic)");
    eprintln!("  • Time on 'cyclic_acgt' should grow roughly 2x per doubling (linear)");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,len,centers,count,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.6},{},{},\"{}\"",
            m.scenario,
            m.len,
            m.centers,
            m.count,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);

    println!(
        "{:<col1$}  {:>8}  {:>8}  {:>12}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "len", "centers", "count", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<8}  {:-<12}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>8}  {:>12}  {:>12.6}  {:>14}  {:>12}  {}",
            m.scenario,
            m.len,
            m.centers,
            m.count,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"len\":{},\"centers\":{},\"count\":{},\"wall_s\":{:.6},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.len,
            m.centers,
            m.count,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn uniform(len: usize) -> Vec<u8> {
    vec![b'a'; len]
}

fn alternating(len: usize) -> Vec<u8> {
    (0..len).map(|i| if i % 2 == 0 { b'a' } else { b'b' }).collect()
}

fn cyclic_acgt(len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len).map(|i| ALPHABET[i % ALPHABET.len()]).collect()
}

/// O(n³) reference: test every `(i, j)` pair directly.
fn brute_force_count(s: &[u8]) -> usize {
    let n = s.len();
    let mut count = 0;
    for i in 0..n {
        for j in i..n {
            let sub = &s[i..=j];
            if sub.iter().eq(sub.iter().rev()) {
                count += 1;
            }
        }
    }
    count
}
