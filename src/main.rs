//! JSON-in, JSON-out scheduling CLI.
//!
//! ```text
//! shift-solver input.json output.json
//! shift-solver --stdin --stdout < input.json > output.json
//! shift-solver --time-limit 60 input.json
//! ```
//!
//! Exit codes: 0 when the solve ends OPTIMAL or FEASIBLE, 1 on any other
//! terminal status, 2 on input or internal errors. Error payloads go to
//! stdout under `--stdout`, to stderr otherwise; log lines always go to
//! stderr.

use std::io::Read;
use std::process::ExitCode;
use std::time::Duration;

use shift_solver::cp::{RosterCpBuilder, DEFAULT_TIME_LIMIT};
use shift_solver::dto::{ProblemDto, ResultDto};
use shift_solver::error::SchedulerError;
use shift_solver::logging;
use shift_solver::solver::MilpSolver;

const USAGE: &str = "usage: shift-solver [--stdin] [--stdout] [--time-limit SECONDS] [INPUT] [OUTPUT]";

struct CliOptions {
    input: Option<String>,
    output: Option<String>,
    use_stdin: bool,
    use_stdout: bool,
    time_limit: Duration,
}

fn parse_args() -> Result<CliOptions, String> {
    let mut opts = CliOptions {
        input: None,
        output: None,
        use_stdin: false,
        use_stdout: false,
        time_limit: DEFAULT_TIME_LIMIT,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--stdin" {
            opts.use_stdin = true;
        } else if arg == "--stdout" {
            opts.use_stdout = true;
        } else if arg == "--time-limit" {
            let value = args.next().ok_or("--time-limit needs a value")?;
            let seconds: u64 = value
                .parse()
                .map_err(|_| format!("bad --time-limit value '{value}'"))?;
            opts.time_limit = Duration::from_secs(seconds);
        } else if opts.input.is_none() {
            opts.input = Some(arg);
        } else if opts.output.is_none() {
            opts.output = Some(arg);
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    if !opts.use_stdin && opts.input.is_none() {
        return Err("provide an input file or --stdin".to_string());
    }
    Ok(opts)
}

fn read_input(opts: &CliOptions) -> Result<String, SchedulerError> {
    if opts.use_stdin {
        let mut payload = String::new();
        std::io::stdin().read_to_string(&mut payload)?;
        return Ok(payload);
    }
    match &opts.input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Err(anyhow::anyhow!("no input source configured").into()),
    }
}

fn write_output(opts: &CliOptions, rendered: &str) -> Result<(), SchedulerError> {
    match (&opts.output, opts.use_stdout) {
        (Some(path), false) => std::fs::write(path, rendered)?,
        _ => println!("{rendered}"),
    }
    Ok(())
}

fn run(opts: &CliOptions) -> Result<bool, SchedulerError> {
    let payload = read_input(opts)?;
    let problem = ProblemDto::from_json(&payload)?.into_problem()?;
    let report = RosterCpBuilder::new(MilpSolver::new(), &problem).solve(opts.time_limit);
    let solved = report.status.is_success();
    write_output(opts, &ResultDto::from_report(report).to_json()?)?;
    Ok(solved)
}

fn main() -> ExitCode {
    logging::init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&opts) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            let rendered = ResultDto::from_error(&err)
                .to_json()
                .unwrap_or_else(|_| format!("{{\"status\":\"ERROR\",\"error\":\"{err}\"}}"));
            if opts.use_stdout {
                println!("{rendered}");
            } else {
                eprintln!("{rendered}");
            }
            ExitCode::from(2)
        }
    }
}
