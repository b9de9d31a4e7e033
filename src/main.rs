use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use bf_trace::SyntaxError;

const USAGE: &str = "usage: bf-trace [-h] (<file> | -c <source>)";

const HELP_BODY: &str = "\nA just-in-time compiling interpreter for the brainfuck programming language.\n\nArguments:\n  file          a brainfuck script file to execute\n\nOptions:\n  -c, --code=   a string of instructions to be executed\n                if present, the file argument will be ignored\n  -h, --help    display this message\n";

#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// brainf*ck script file to execute
    file: Option<PathBuf>,

    /// inline source, takes priority over `file`
    #[arg(short = 'c', long = "code")]
    code: Option<String>,

    #[arg(short = 'h', long = "help")]
    help: bool,
}

fn usage_error() -> ! {
    eprintln!("{USAGE}");
    exit(1);
}

fn load_source(cli: &Cli) -> String {
    if let Some(code) = &cli.code {
        return code.clone();
    }
    let Some(path) = &cli.file else {
        usage_error();
    };
    match fs::read_to_string(path) {
        Ok(source) => source,
        Err(_) => {
            eprintln!("File not found: {}", path.display());
            exit(1);
        }
    }
}

fn main() {
    // clap's own parse-failure path exits 2; everything here must exit 1
    let cli = match Cli::try_parse_from(std::env::args_os()) {
        Ok(cli) => cli,
        Err(_) => usage_error(),
    };

    if cli.help {
        eprintln!("{USAGE}");
        eprint!("{HELP_BODY}");
        exit(1);
    }
    if cli.code.is_none() && cli.file.is_none() {
        usage_error();
    }

    let source = load_source(&cli);

    let program = match bf_trace::compile(&source) {
        Ok(program) => program,
        Err(SyntaxError::UnmatchedOpen(_)) => {
            eprintln!("Unmatched `[`");
            exit(1);
        }
        Err(SyntaxError::UnmatchedClose(_)) => {
            eprintln!("Unmatched `]`");
            exit(1);
        }
    };
    eprintln!(
        "* sifted and parsed {} source bytes into {} bytecode bytes",
        source.len(),
        program.len()
    );

    if let Err(err) = entry(&program) {
        eprintln!("! fatal error: {err:?}");
        exit(1);
    }
}

fn entry(program: &[u8]) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    bf_trace::run(program, &mut input, &mut output)?;
    eprintln!("* success");
    Ok(())
}
