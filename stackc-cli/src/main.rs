use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use stackc::{compile, print_diagnostics};

#[derive(Debug)]
enum IoContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
struct IoError(io::Error, IoContext, PathBuf);

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} file \"{}\" failed: {}",
            match self.1 {
                IoContext::ReadInput => "reading input",
                IoContext::WriteOutput => "writing output",
            },
            self.2.display(),
            self.0
        )
    }
}

/// Compiles stack-machine assembly into C, or formats it canonically.
///
/// Code emitted by the compiler is valid C99 and C++11.
#[derive(Parser)]
#[command(name = "stackc", version)]
struct Cli {
    /// Source file to compile, or "-" to read from stdin
    file: PathBuf,

    /// Format the code instead of compiling it
    #[arg(short, long)]
    format: bool,

    /// Output file (default: -, meaning stdout)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(1)
        }
    }
}

/// Returns `Ok(true)` if diagnostics were emitted (exit code 1, but a
/// best-effort program is still written, matching the reference CLI).
fn run(cli: &Cli) -> Result<bool, IoError> {
    let is_stdin = cli.file.as_os_str() == "-";
    let mut source = String::new();
    if is_stdin {
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|err| IoError(err, IoContext::ReadInput, PathBuf::from("<stdin>")))?;
    } else {
        File::open(&cli.file)
            .and_then(|mut f| f.read_to_string(&mut source))
            .map_err(|err| IoError(err, IoContext::ReadInput, cli.file.clone()))?;
    }
    let display_name = if is_stdin { "<stdin>".to_string() } else { cli.file.display().to_string() };

    let result = compile(&source);

    let mut stderr = io::stderr();
    let had_diagnostics =
        print_diagnostics(&mut stderr, &result.diagnostics, &display_name, &source)
            .map_err(|err| IoError(err, IoContext::WriteOutput, PathBuf::from("<stderr>")))?;

    let is_stdout = cli.output.as_os_str() == "-";
    let mut out: Box<dyn Write> = if is_stdout {
        Box::new(io::stdout())
    } else {
        Box::new(
            File::create(&cli.output)
                .map_err(|err| IoError(err, IoContext::WriteOutput, cli.output.clone()))?,
        )
    };

    let write_result = if cli.format {
        result.program.emit_source(&mut out)
    } else {
        result.program.emit_c(&mut out)
    };
    write_result.map_err(|err| {
        let path = if is_stdout { PathBuf::from("<stdout>") } else { cli.output.clone() };
        IoError(err, IoContext::WriteOutput, path)
    })?;

    Ok(had_diagnostics)
}
