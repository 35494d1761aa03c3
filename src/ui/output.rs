use rewatch::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

/// Always stderr, so NDJSON on stdout stays clean
pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    for line in render_config_warnings(warnings, unicode) {
        eprintln!("{line}");
    }
}

pub(crate) fn render_config_warnings(warnings: &[ConfigWarning], unicode: bool) -> Vec<String> {
    let icon = Icon::Warning.render(unicode);
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "{icon} Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )),
            None => lines.push(format!(
                "{icon} Unknown config key '{}' in {}",
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_includes_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "extention".to_string(),
            file: PathBuf::from("rewatch.toml"),
            line: Some(2),
            suggestion: Some("extension".to_string()),
        }];

        let lines = render_config_warnings(&warnings, false);
        assert_eq!(
            lines,
            vec![
                "[WARN] Unknown config key 'extention' in rewatch.toml:2",
                "   Did you mean 'extension'?",
            ]
        );
    }

    #[test]
    fn warning_without_line_omits_position() {
        let warnings = vec![ConfigWarning {
            key: "extra".to_string(),
            file: PathBuf::from("conf/rewatch.toml"),
            line: None,
            suggestion: None,
        }];

        let lines = render_config_warnings(&warnings, false);
        assert_eq!(lines, vec!["[WARN] Unknown config key 'extra' in conf/rewatch.toml"]);
    }
}
