use std::{
  fs,
  path::Path,
};

use anyhow::{
  Context,
  Result,
};

/// Routes `log` records to `file`.
///
/// Warnings and errors are always written; each `-v` lowers the threshold by
/// one level.
pub fn setup_logging(verbosity: u8, file: &Path) -> Result<()> {
  let level = match verbosity {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };

  if let Some(parent) = file.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent)
      .with_context(|| format!("failed to create log directory {}", parent.display()))?;
  }

  let file_config = fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "{} {} [{}] {}",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.target(),
        record.level(),
        message
      ))
    })
    .chain(
      fern::log_file(file)
        .with_context(|| format!("failed to open log file {}", file.display()))?,
    );

  fern::Dispatch::new()
    .level(level)
    .chain(file_config)
    .apply()
    .context("logger already initialized")?;

  Ok(())
}
