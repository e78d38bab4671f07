/// Tests for config module
#[cfg(test)]
mod tests {
    use crate::cli::CliArgs;
    use crate::config::{build_run_config, output_file_name};
    use crate::types::Mode;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn args(mode: Mode) -> CliArgs {
        CliArgs {
            input_dir: None,
            mode,
            extension: "xlsx".to_string(),
            output_dir: PathBuf::from("."),
            prefix: None,
            date: None,
        }
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(output_file_name("datos_extraidos", today()), PathBuf::from("datos_extraidos_20240115.docx"));
        let date = NaiveDate::from_ymd_opt(2025, 6, 3).unwrap();
        assert_eq!(output_file_name("x", date), PathBuf::from("x_20250603.docx"));
    }

    #[test]
    fn test_single_mode_defaults() {
        let config = build_run_config(&args(Mode::Single), today()).expect("Should build config");

        assert_eq!(config.mode, Mode::Single);
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.extension, "xlsx");
        assert_eq!(config.report_date, today());
        assert_eq!(config.output_path, PathBuf::from("./datos_extraidos_20240115.docx"));
    }

    #[test]
    fn test_batch_mode_defaults() {
        let config = build_run_config(&args(Mode::Batch), today()).expect("Should build config");

        assert_eq!(config.input_dir, PathBuf::from("./por_procesar"));
        assert_eq!(config.output_path, PathBuf::from("./analisis_consolidado_20240115.docx"));
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let args = CliArgs {
            input_dir: Some(PathBuf::from("por_procesar/junio")),
            output_dir: PathBuf::from("salida"),
            prefix: Some("junio".to_string()),
            date: Some("20240630".to_string()),
            ..args(Mode::Batch)
        };
        let config = build_run_config(&args, today()).expect("Should build config");

        assert_eq!(config.input_dir, PathBuf::from("por_procesar/junio"));
        assert_eq!(config.report_date, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(config.output_path, PathBuf::from("salida/junio_20240630.docx"));
    }

    #[test]
    fn test_invalid_date_is_error() {
        let args = CliArgs { date: Some("15/01/2024".to_string()), ..args(Mode::Single) };
        assert!(build_run_config(&args, today()).is_err());
    }
}
