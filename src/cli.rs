use crate::types::Mode;
use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// Date format accepted by `--date` and stamped into output names
pub const DATE_FORMAT: &str = "%Y%m%d";

#[derive(Parser, Debug, Clone)]
#[command(name = "procedure-report")]
#[command(about = "Summarize spreadsheet workbooks into a Word report grouped by procedure type")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing the workbooks
    /// Default: "." in single mode, "./por_procesar" in batch mode.
    /// Monthly subfolders are not searched; pass them explicitly (-i ./por_procesar/junio)
    #[arg(long, short = 'i', value_name = "DIR")]
    pub input_dir: Option<PathBuf>,

    /// Process the first workbook only (single) or all workbooks into one document (batch)
    #[arg(long, short = 'm', value_enum, default_value_t = Mode::Single)]
    pub mode: Mode,

    /// Workbook file extension, without the dot
    #[arg(long, short = 'e', default_value = "xlsx")]
    pub extension: String,

    /// Directory the document is written to
    #[arg(long, short = 'o', value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Output file name prefix
    /// Default: "datos_extraidos" in single mode, "analisis_consolidado" in batch mode
    #[arg(long)]
    pub prefix: Option<String>,

    /// Report date stamped into the output name (YYYYMMDD); defaults to today
    #[arg(long, value_name = "YYYYMMDD")]
    pub date: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        let mut args = CliArgs::parse();

        // Quoted shell arguments may carry stray whitespace
        args.extension = args.extension.trim().to_string();

        args
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("--extension must not be empty".to_string());
        }
        if self.extension.starts_with('.') {
            return Err(format!("--extension should not start with a dot (use '{}')", self.extension.trim_start_matches('.')));
        }

        if let Some(ref prefix) = self.prefix {
            if prefix.trim().is_empty() {
                return Err("--prefix must not be empty".to_string());
            }
            if prefix.contains(['/', '\\']) {
                return Err(format!("--prefix must be a file name, not a path: {}", prefix));
            }
        }

        if self.date.is_some() {
            self.parsed_date()?;
        }

        Ok(())
    }

    /// The `--date` value, if given and well-formed
    pub fn parsed_date(&self) -> Result<Option<NaiveDate>, String> {
        match self.date {
            Some(ref s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(Some)
                .map_err(|e| format!("Invalid --date '{}' (expected YYYYMMDD): {}", s, e)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_args() -> CliArgs {
        CliArgs {
            input_dir: None,
            mode: Mode::Single,
            extension: "xlsx".to_string(),
            output_dir: PathBuf::from("."),
            prefix: None,
            date: None,
        }
    }

    #[test]
    fn test_input_dir_help_names_defaults() {
        let help = CliArgs::command().render_long_help().to_string();
        assert!(help.contains("./por_procesar"), "help: {}", help);
        assert!(help.contains("-i ./por_procesar/junio"), "help: {}", help);
    }

    #[test]
    fn test_validate_defaults_succeeds() {
        assert!(default_args().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let args = CliArgs { extension: ".xlsx".to_string(), ..default_args() };
        let err = args.validate().unwrap_err();
        assert!(err.contains("'xlsx'"), "unexpected message: {}", err);
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let args = CliArgs { extension: String::new(), ..default_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        let args = CliArgs { prefix: Some("  ".to_string()), ..default_args() };
        assert!(args.validate().is_err());

        let args = CliArgs { prefix: Some("out/report".to_string()), ..default_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validate_date() {
        let args = CliArgs { date: Some("20240115".to_string()), ..default_args() };
        assert!(args.validate().is_ok());
        assert_eq!(args.parsed_date().unwrap(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let args = CliArgs { date: Some("2024-01-15".to_string()), ..default_args() };
        assert!(args.validate().is_err());

        let args = CliArgs { date: Some("20241332".to_string()), ..default_args() };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from(["procedure-report", "--mode", "batch", "-i", "junio", "--date", "20240601"]);
        assert_eq!(args.mode, Mode::Batch);
        assert_eq!(args.input_dir, Some(PathBuf::from("junio")));
        assert_eq!(args.extension, "xlsx");
        assert!(args.validate().is_ok());
    }
}
