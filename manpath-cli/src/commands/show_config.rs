//! Command to dump the loaded configuration.

use crate::error::CliError;
use crate::utils::{load_resolver, GlobalOptions, OutputFormat};
use clap::Args;
use manpath::config::{ConfigRecord, ConfigSource, Settings};
use serde::Serialize;
use std::io::Write;

/// JSON shape of `show-config`.
#[derive(Serialize)]
struct ConfigReport<'a> {
    sources: &'a [ConfigSource],
    settings: &'a Settings,
    records: &'a [ConfigRecord],
}

/// Show the configuration records, settings and source files.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = load_resolver(global)?;
        let config = resolver.configuration();

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        match self.format {
            OutputFormat::Json => {
                let report = ConfigReport {
                    sources: config.sources(),
                    settings: config.settings(),
                    records: config.store().records(),
                };
                serde_json::to_writer_pretty(&mut handle, &report)?;
                writeln!(handle)?;
            }
            OutputFormat::Text => {
                for source in config.sources() {
                    let scope = serde_json::to_value(source.scope)?;
                    writeln!(
                        handle,
                        "# {} ({})",
                        source.path.display(),
                        scope.as_str().unwrap_or_default()
                    )?;
                }

                let settings = config.settings();
                writeln!(handle, "MINCATWIDTH {}", settings.min_cat_width)?;
                writeln!(handle, "MAXCATWIDTH {}", settings.max_cat_width)?;
                writeln!(handle, "CATWIDTH {}", settings.cat_width)?;
                if settings.disable_cache {
                    writeln!(handle, "NOCACHE")?;
                }

                for record in config.store().records() {
                    let category = serde_json::to_value(record.category())?;
                    writeln!(
                        handle,
                        "{}\t{}\t{}",
                        category.as_str().unwrap_or_default(),
                        record.key(),
                        record.content()
                    )?;
                }
            }
        }

        Ok(())
    }
}
