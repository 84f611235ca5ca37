use clap::{Parser, ValueEnum};
use std::io::{IsTerminal, Read};
use ramfs::session::{Session, SessionOptions};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "ramfs")]
#[command(about = "An in-memory directory tree you can walk and edit from a prompt")]
#[command(version)]
struct Cli {
    /// Execute commands from the argument; lines split on ';' or newlines,
    /// so a ';' inside `write` content also starts a new command
    #[arg(short = 'c')]
    script: Option<String>,

    /// Do not print the banner in interactive mode
    #[arg(long = "no-banner")]
    no_banner: bool,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    #[arg(long, short, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Command file to execute
    #[arg()]
    script_file: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    // Determine script source: -c, file, piped stdin, or an interactive prompt
    let script = if let Some(s) = cli.script {
        Some(s.replace(';', "\n").into_bytes())
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read(file) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file, e);
                std::process::exit(1);
            }
        }
    } else if !std::io::stdin().is_terminal() {
        let mut buf = Vec::new();
        if let Err(e) = std::io::stdin().read_to_end(&mut buf) {
            eprintln!("Error: Cannot read stdin: {}", e);
            std::process::exit(1);
        }
        Some(buf)
    } else {
        None
    };

    let Some(script) = script else {
        let mut session = Session::new(SessionOptions {
            banner: !cli.no_banner,
            prompt: true,
        });
        let stdin = std::io::stdin();
        let code = match session.run(stdin.lock(), &mut std::io::stdout(), &mut std::io::stderr()) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        };
        std::process::exit(code);
    };

    let mut session = Session::new(SessionOptions {
        banner: false,
        prompt: false,
    });
    let result = session.exec_script_bytes(&script);

    if cli.json {
        println!("{}", serde_json::json!({
            "stdout": result.stdout,
            "stderr": result.stderr,
            "exitCode": result.exit_code,
        }));
    } else {
        if !result.stdout.is_empty() {
            print!("{}", result.stdout);
        }
        if !result.stderr.is_empty() {
            eprint!("{}", result.stderr);
        }
    }

    std::process::exit(result.exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_inline_script_help_mentions_semicolon_split() {
        let cmd = Cli::command();
        let arg = cmd.get_arguments().find(|a| a.get_short() == Some('c')).unwrap();
        let help = arg.get_help().unwrap().to_string();
        assert!(help.contains("';'"));
        assert!(help.contains("write"));
    }
}
