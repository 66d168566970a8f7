//! File-level conversion: load a map, gather sidecar data, write the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec::load_file;
use crate::config::Config;
use crate::diff::DiffRunner;
use crate::error::{Result, ERROR_SUCCESS};
use crate::renderer::{render, RenderOptions};
use crate::sidecar::{sidecar_path_for, SidecarFiles};

pub const OLD_TEXT_FILE_NAME: &str = "OldAreaMapTiles.txt";
pub const NEW_TEXT_FILE_NAME: &str = "NewAreaMapTiles.txt";

#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub config: Config,
    pub options: RenderOptions,
}

impl Converter {
    pub fn new(config: Config, options: RenderOptions) -> Self {
        Self { config, options }
    }

    /// Render `map_path` into `out`. The AreaMap sidecar is `sidecar` if
    /// given, otherwise the one sitting next to the map.
    pub fn convert(&self, map_path: &Path, sidecar: Option<&Path>, out: &mut impl Write) -> Result<()> {
        let doc = load_file(map_path)?;

        let sidecar = sidecar
            .map(Path::to_path_buf)
            .or_else(|| sidecar_path_for(map_path));
        let resolver = SidecarFiles::load(&self.config, sidecar.as_deref());

        render(&doc, &resolver, self.options, out)?;
        Ok(())
    }

    /// Like [`Converter::convert`], but failures are written to `out` as one
    /// `Error:` line. Returns the process exit code.
    pub fn convert_or_report(&self, map_path: &Path, sidecar: Option<&Path>, out: &mut impl Write) -> i32 {
        match self.convert(map_path, sidecar, out) {
            Ok(()) => ERROR_SUCCESS,
            Err(e) => {
                tracing::debug!(path = %map_path.display(), "conversion failed: {}", e);
                // nothing more to do if the sink itself is broken
                let _ = writeln!(out, "Error: {e}");
                e.exit_code()
            }
        }
    }

    /// Render both sides of a change into `save_dir` and diff them.
    ///
    /// `path` is the map's path in the repository, used to find its sidecar.
    pub fn diff_files(
        &self,
        path: &Path,
        old_file: &Path,
        new_file: &Path,
        save_dir: &Path,
        runner: &dyn DiffRunner,
    ) -> Result<String> {
        let sidecar = sidecar_path_for(path);
        let old_text = save_dir.join(OLD_TEXT_FILE_NAME);
        let new_text = save_dir.join(NEW_TEXT_FILE_NAME);

        for (source, target) in [(old_file, &old_text), (new_file, &new_text)] {
            let mut writer = std::io::BufWriter::new(std::fs::File::create(target)?);
            self.convert_or_report(source, sidecar.as_deref(), &mut writer);
            writer.flush()?;
        }

        runner.diff(&old_text, &new_text)
    }
}

/// Where the diff mode writes its text files: the temp dir, or the current dir if that is gone.
pub fn default_save_dir() -> PathBuf {
    let temp = std::env::temp_dir();
    if temp.is_dir() {
        temp
    } else {
        PathBuf::from(".")
    }
}
