//! debuglines - print the samples stored in a ray tracer debug dump.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use debuglines::{open, print_dump, run, DumpError, Point};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "debuglines")]
#[command(about = "Print the samples stored in a ray tracer debug dump", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print position/normal pairs from a lines dump
    Lines {
        /// Path to the lines dump
        #[arg(env = "LINES_FILE")]
        path: PathBuf,
    },
    /// Print points from a points dump
    Points {
        /// Path to the points dump
        #[arg(env = "POINTS_FILE")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let count = execute(cli, &mut stdout.lock())?;
    info!(count, "done");

    Ok(())
}

// Whatever was printed before a failure is flushed before the error is returned.
fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<usize> {
    let printed = match cli.command {
        Commands::Lines { path } => run(&path).and_then(|records| print_dump(out, records)),
        Commands::Points { path } => {
            open::<Point, _>(&path).and_then(|points| print_dump(out, points))
        }
    };
    out.flush().map_err(DumpError::Write)?;

    Ok(printed?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn asset(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(name)
    }

    fn lines(name: &str) -> Cli {
        Cli {
            command: Commands::Lines { path: asset(name) },
        }
    }

    struct UnflushableWriter(Vec<u8>);

    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_execute_lines() {
        let mut out = Vec::new();
        assert_eq!(execute(lines("lines.txt"), &mut out).unwrap(), 4);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 8);
        assert!(out.starts_with("[1.0, 2.0, 3.0]\n[0.0, 1.0, 0.0]\n"));
    }

    #[test]
    fn test_execute_points() {
        let cli = Cli {
            command: Commands::Points {
                path: asset("points.txt"),
            },
        };
        let mut out = Vec::new();
        assert_eq!(execute(cli, &mut out).unwrap(), 3);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[0.0, 0.0, 0.0]\n[1.25, 2.5, -3.75]\n[-0.5, 0.25, inf]\n"
        );
    }

    #[test]
    fn test_execute_missing_file_prints_nothing() {
        let mut out = Vec::new();
        let err = execute(lines("does_not_exist.txt"), &mut out).unwrap_err();
        match err.downcast_ref::<DumpError>() {
            Some(DumpError::Open { path, .. }) => assert_eq!(path, &asset("does_not_exist.txt")),
            other => panic!("expected open error, got {:?}", other),
        }
        assert!(out.is_empty());
    }

    #[test]
    fn test_execute_malformed_file_keeps_earlier_output() {
        let mut out = Vec::new();
        let err = execute(lines("malformed.txt"), &mut out).unwrap_err();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[1.0, 2.0, 3.0]\n[0.0, 1.0, 0.0]\n"
        );
        match err.downcast_ref::<DumpError>() {
            Some(DumpError::Malformed { line_number, .. }) => assert_eq!(*line_number, 2),
            other => panic!("expected malformed line error, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_flush_failure_is_write_error() {
        let mut out = UnflushableWriter(Vec::new());
        let err = execute(lines("lines.txt"), &mut out).unwrap_err();
        match err.downcast_ref::<DumpError>() {
            Some(DumpError::Write(source)) => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe)
            }
            other => panic!("expected write error, got {:?}", other),
        }
        assert!(!out.0.is_empty());
    }
}
