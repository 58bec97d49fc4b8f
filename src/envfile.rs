use regex::Regex;

/// Pattern matching a `KEY=VALUE` entry line, with optional leading
/// whitespace and an optional `export` prefix.
const ENTRY_PATTERN: &str = r"^(\s*)(export\s+)?([A-Za-z_][A-Za-z0-9_.]*)=(.*)$";

/// A single line of an env file.
///
/// Entries are parsed into their parts so they can be rewritten by key;
/// everything else (comments, blank lines, unparsable lines) is kept as
/// raw text and rendered back verbatim.
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Entry {
        indent: String,
        export: Option<String>,
        key: String,
        value: String,
    },
    Raw(String),
}

/// Line-oriented model of a `KEY=VALUE` configuration file.
///
/// Parsing and rendering are loss-free: ordering, comments, blank lines,
/// indentation, `export` prefixes, and the presence of a trailing newline
/// all survive a parse/render round trip unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvFile {
    lines: Vec<Line>,
    ends_with_newline: bool,
}

impl EnvFile {
    /// Parses env file content into the line model.
    ///
    /// Lines whose first non-whitespace character is `#` are treated as
    /// comments and never touched by any mutation.
    pub fn parse(content: &str) -> Self {
        let mut lines = Vec::new();

        if let Ok(re) = Regex::new(ENTRY_PATTERN) {
            for line in content.lines() {
                lines.push(Self::classify_line(line, &re));
            }
        } else {
            for line in content.lines() {
                lines.push(Line::Raw(line.to_string()));
            }
        }

        EnvFile {
            lines,
            ends_with_newline: content.ends_with('\n'),
        }
    }

    fn classify_line(line: &str, re: &Regex) -> Line {
        if line.trim_start().starts_with('#') {
            return Line::Raw(line.to_string());
        }

        if let Some(captures) = re.captures(line) {
            if let (Some(indent), Some(key), Some(value)) =
                (captures.get(1), captures.get(3), captures.get(4))
            {
                return Line::Entry {
                    indent: indent.as_str().to_string(),
                    export: captures.get(2).map(|m| m.as_str().to_string()),
                    key: key.as_str().to_string(),
                    value: value.as_str().to_string(),
                };
            }
        }

        Line::Raw(line.to_string())
    }

    /// Renders the model back to text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match line {
                Line::Entry {
                    indent,
                    export,
                    key,
                    value,
                } => {
                    out.push_str(indent);
                    if let Some(export) = export {
                        out.push_str(export);
                    }
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
                Line::Raw(raw) => out.push_str(raw),
            }
        }

        if self.ends_with_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Returns the value of the first entry with the given key.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Entry {
                key: entry_key,
                value,
                ..
            } if entry_key == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Sets every entry with the given key and an exact current value to a
    /// new value.
    ///
    /// Returns true if at least one entry was rewritten. Entries whose
    /// value differs from `expected` are left alone.
    pub fn set_if_value(&mut self, key: &str, expected: &str, new_value: &str) -> bool {
        let mut changed = false;

        for line in &mut self.lines {
            if let Line::Entry {
                key: entry_key,
                value,
                ..
            } = line
            {
                if entry_key == key && value == expected {
                    *value = new_value.to_string();
                    changed = true;
                }
            }
        }

        changed
    }

    /// Replaces every occurrence of a substring inside entry values.
    ///
    /// Keys, comments, and raw lines are never touched. Returns the total
    /// number of occurrences replaced across all entries.
    pub fn replace_in_values(&mut self, from: &str, to: &str) -> usize {
        let mut replaced = 0;

        for line in &mut self.lines {
            if let Line::Entry { value, .. } = line {
                let occurrences = value.matches(from).count();
                if occurrences > 0 {
                    *value = value.replace(from, to);
                    replaced += occurrences;
                }
            }
        }

        replaced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# build settings\nBUILD_HOST_SRC=true\n\nBRANCH=master\nVERSION=3.0.0-SNAPSHOT\n";

    #[test]
    fn test_parse_render_round_trip() {
        let file = EnvFile::parse(SAMPLE);
        assert_eq!(file.render(), SAMPLE);
    }

    #[test]
    fn test_round_trip_without_trailing_newline() {
        let content = "A=1\nB=2";
        assert_eq!(EnvFile::parse(content).render(), content);
    }

    #[test]
    fn test_round_trip_preserves_indent_and_export() {
        let content = "  export PATH_PREFIX=/opt/ranger\nKEY=value\n";
        assert_eq!(EnvFile::parse(content).render(), content);
    }

    #[test]
    fn test_entry_lookup() {
        let file = EnvFile::parse(SAMPLE);
        assert_eq!(file.entry("BRANCH"), Some("master"));
        assert_eq!(file.entry("MISSING"), None);
    }

    #[test]
    fn test_set_if_value() {
        let mut file = EnvFile::parse(SAMPLE);
        assert!(file.set_if_value("BUILD_HOST_SRC", "true", "false"));
        assert_eq!(file.entry("BUILD_HOST_SRC"), Some("false"));
    }

    #[test]
    fn test_set_if_value_requires_exact_match() {
        let mut file = EnvFile::parse(SAMPLE);
        assert!(!file.set_if_value("BUILD_HOST_SRC", "false", "true"));
        assert!(!file.set_if_value("NO_SUCH_KEY", "true", "false"));
        assert_eq!(file.render(), SAMPLE);
    }

    #[test]
    fn test_replace_in_values_skips_comments() {
        let content = "# pinned to 3.0.0-SNAPSHOT\nVERSION=3.0.0-SNAPSHOT\n";
        let mut file = EnvFile::parse(content);

        let replaced = file.replace_in_values("3.0.0-SNAPSHOT", "2.5.1-SNAPSHOT");

        assert_eq!(replaced, 1);
        assert_eq!(
            file.render(),
            "# pinned to 3.0.0-SNAPSHOT\nVERSION=2.5.1-SNAPSHOT\n"
        );
    }

    #[test]
    fn test_replace_in_values_inside_larger_value() {
        let mut file = EnvFile::parse("IMAGE=ranger:3.0.0-SNAPSHOT-build1\n");

        let replaced = file.replace_in_values("3.0.0-SNAPSHOT", "2.6.0");

        assert_eq!(replaced, 1);
        assert_eq!(file.render(), "IMAGE=ranger:2.6.0-build1\n");
    }

    #[test]
    fn test_unparsable_lines_kept_verbatim() {
        let content = "not a key value line\nVERSION=3.0.0-SNAPSHOT\n";
        let mut file = EnvFile::parse(content);

        file.replace_in_values("3.0.0-SNAPSHOT", "2.6.0");

        assert!(file.render().starts_with("not a key value line\n"));
    }
}
