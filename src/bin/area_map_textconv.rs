use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use area_map_tiles_textconv::convert::default_save_dir;
use area_map_tiles_textconv::error::{ERROR_INVALID_DATA, ERROR_SUCCESS};
use area_map_tiles_textconv::{Config, Converter, FacingStyle, GitDiff, RenderOptions};

#[derive(Parser)]
#[command(name = "area-map-textconv")]
#[command(about = "Render AreaMapTiles files as text for diffing")]
#[command(after_help = "\
Argument forms:
  <map>                      render a map (AreaMap.txt sidecar found next to it)
  <map> <areamap.txt>        render a map with an explicit sidecar
  <path> <old-file> <old-hex> <old-mode> <new-file> <new-hex> <new-mode>
                             git external diff: render both sides and run git diff")]
struct Args {
    #[arg(required = true, num_args = 1.., value_name = "FILES")]
    files: Vec<PathBuf>,

    /// config.json with TileTypeFolderPath
    #[arg(long)]
    config: Option<PathBuf>,

    /// Draw starting position facings as arrows instead of letters
    #[arg(long)]
    facing_arrows: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            println!("Error: Need at least 1 argument, specifying the AreaMapTiles file");
            return exit_code(ERROR_INVALID_DATA);
        }
        Err(e) => {
            println!("Error: invalid arguments");
            let _ = e.print();
            return exit_code(ERROR_INVALID_DATA);
        }
    };

    init_logging(args.verbose);

    let options = RenderOptions {
        facing_style: if args.facing_arrows { FacingStyle::Arrows } else { FacingStyle::Letters },
    };
    let converter = Converter::new(Config::load(args.config.as_deref()), options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match Invocation::from_files(&args.files) {
        Some(Invocation::GitDiff { path, old_file, new_file }) => {
            match converter.diff_files(path, old_file, new_file, &default_save_dir(), &GitDiff::default()) {
                Ok(diff) => {
                    let _ = writeln!(out, "{diff}");
                    ERROR_SUCCESS
                }
                Err(e) => {
                    let _ = writeln!(out, "Error: {e}");
                    e.exit_code()
                }
            }
        }
        Some(Invocation::Render { map, sidecar }) => converter.convert_or_report(map, sidecar, &mut out),
        None => ERROR_INVALID_DATA,
    };

    let _ = out.flush();
    exit_code(code)
}

/// What the positional arguments ask for.
///
/// Seven arguments are git's external diff call. Two are a map plus an
/// explicit sidecar. Any other count renders the first file and ignores
/// the rest.
#[derive(Debug, PartialEq)]
enum Invocation<'a> {
    Render { map: &'a Path, sidecar: Option<&'a Path> },
    GitDiff { path: &'a Path, old_file: &'a Path, new_file: &'a Path },
}

impl<'a> Invocation<'a> {
    fn from_files(files: &'a [PathBuf]) -> Option<Self> {
        match files {
            [path, old_file, _old_hex, _old_mode, new_file, _new_hex, _new_mode] => Some(Self::GitDiff {
                path: path.as_path(),
                old_file: old_file.as_path(),
                new_file: new_file.as_path(),
            }),
            [map, sidecar] => Some(Self::Render { map: map.as_path(), sidecar: Some(sidecar.as_path()) }),
            [map, ..] => Some(Self::Render { map: map.as_path(), sidecar: None }),
            [] => None,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_single_map() {
        let args = files(&["a.AreaMapTiles.bytes"]);
        assert_eq!(
            Invocation::from_files(&args),
            Some(Invocation::Render { map: Path::new("a.AreaMapTiles.bytes"), sidecar: None })
        );
    }

    #[test]
    fn test_map_with_sidecar() {
        let args = files(&["a.AreaMapTiles.bytes", "custom.txt"]);
        assert_eq!(
            Invocation::from_files(&args),
            Some(Invocation::Render {
                map: Path::new("a.AreaMapTiles.bytes"),
                sidecar: Some(Path::new("custom.txt")),
            })
        );
    }

    #[test]
    fn test_extra_arguments_render_first_file() {
        let three = files(&["a.bytes", "b.txt", "c"]);
        assert_eq!(
            Invocation::from_files(&three),
            Some(Invocation::Render { map: Path::new("a.bytes"), sidecar: None })
        );

        let eight = files(&["a.bytes", "o", "1", "100644", "n", "2", "100644", "extra"]);
        assert_eq!(
            Invocation::from_files(&eight),
            Some(Invocation::Render { map: Path::new("a.bytes"), sidecar: None })
        );
    }

    #[test]
    fn test_git_external_diff() {
        let args = files(&[
            "Maps/a.AreaMapTiles.bytes",
            "/tmp/old",
            "abc123",
            "100644",
            "Maps/a.AreaMapTiles.bytes",
            "def456",
            "100644",
        ]);
        assert_eq!(
            Invocation::from_files(&args),
            Some(Invocation::GitDiff {
                path: Path::new("Maps/a.AreaMapTiles.bytes"),
                old_file: Path::new("/tmp/old"),
                new_file: Path::new("Maps/a.AreaMapTiles.bytes"),
            })
        );
    }

    #[test]
    fn test_no_files() {
        assert_eq!(Invocation::from_files(&[]), None);
    }

    #[test]
    fn test_args_accept_any_count() {
        let args = Args::try_parse_from(["area-map-textconv", "a", "b", "c", "d", "e", "f", "g", "h"]).unwrap();
        assert_eq!(args.files.len(), 8);
        assert!(Args::try_parse_from(["area-map-textconv"]).is_err());
    }
}
