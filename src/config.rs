use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub perf: bool,
    pub content: Option<PathBuf>,
    pub typing_speed: Option<u64>,
    pub deleting_speed: Option<u64>,
    pub pause: Option<u64>,
    pub endpoint: Option<String>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            perf: self.perf || other.perf,
            content: other.content.clone().or_else(|| self.content.clone()),
            typing_speed: other.typing_speed.or(self.typing_speed),
            deleting_speed: other.deleting_speed.or(self.deleting_speed),
            pause: other.pause.or(self.pause),
            endpoint: other.endpoint.clone().or_else(|| self.endpoint.clone()),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("folio").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("folio")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("folio").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("folio").join("config");
        }
    }

    PathBuf::from(".foliorc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".foliorc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(line_tokens)
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Tokens of one config line. A valued flag takes the rest of its line as
/// the value, so paths may contain spaces.
fn line_tokens(line: &str) -> Vec<String> {
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match split_valued(head) {
        Some((_, Some(_))) => vec![line.to_string()],
        Some((flag, None)) if !rest.is_empty() => vec![flag.to_string(), rest.to_string()],
        Some((flag, None)) => vec![flag.to_string()],
        None => line.split_whitespace().map(ToOwned::to_owned).collect(),
    }
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# folio defaults (saved with --save)".to_string());
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(content) = &flags.content {
        lines.push(format!("--content {}", content.display()));
    }
    if let Some(ms) = flags.typing_speed {
        lines.push(format!("--typing-speed {ms}"));
    }
    if let Some(ms) = flags.deleting_speed {
        lines.push(format!("--deleting-speed {ms}"));
    }
    if let Some(ms) = flags.pause {
        lines.push(format!("--pause {ms}"));
    }
    if let Some(endpoint) = &flags.endpoint {
        lines.push(format!("--endpoint {endpoint}"));
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from raw argument tokens. Unknown tokens are skipped,
/// and a malformed millisecond value leaves that option unset.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--watch" || token == "-w" {
            flags.watch = true;
        } else if token == "--perf" {
            flags.perf = true;
        } else if let Some((name, inline)) = split_valued(token) {
            let value = match inline {
                Some(v) => Some(v.to_string()),
                None => {
                    i += 1;
                    tokens.get(i).cloned()
                }
            };
            if let Some(value) = value {
                apply_valued(&mut flags, name, &value);
            }
        }
        i += 1;
    }
    flags
}

const VALUED: [&str; 6] = [
    "--content",
    "--typing-speed",
    "--deleting-speed",
    "--pause",
    "--endpoint",
    "--render-debug-log",
];

fn split_valued(token: &str) -> Option<(&str, Option<&str>)> {
    if let Some((name, value)) = token.split_once('=') {
        return VALUED.contains(&name).then_some((name, Some(value)));
    }
    VALUED.contains(&token).then_some((token, None))
}

fn apply_valued(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--content" => flags.content = Some(PathBuf::from(value)),
        "--typing-speed" => flags.typing_speed = value.parse().ok(),
        "--deleting-speed" => flags.deleting_speed = value.parse().ok(),
        "--pause" => flags.pause = value.parse().ok(),
        "--endpoint" => flags.endpoint = Some(value.to_string()),
        "--render-debug-log" => flags.render_debug_log = Some(PathBuf::from(value)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let flags = parse_flag_tokens(&args(&[
            "folio",
            "--watch",
            "--typing-speed",
            "80",
            "--pause=1500",
            "--content",
            "me.json",
            "--endpoint",
            "https://formspree.io/f/abc",
            "--render-debug-log=render.log",
        ]));
        assert!(flags.watch);
        assert_eq!(flags.typing_speed, Some(80));
        assert_eq!(flags.pause, Some(1500));
        assert_eq!(flags.content, Some(PathBuf::from("me.json")));
        assert_eq!(flags.endpoint.as_deref(), Some("https://formspree.io/f/abc"));
        assert_eq!(flags.render_debug_log, Some(PathBuf::from("render.log")));
        assert_eq!(flags.deleting_speed, None);
    }

    #[test]
    fn test_malformed_millis_are_ignored() {
        let flags = parse_flag_tokens(&args(&["--typing-speed", "fast", "--perf"]));
        assert_eq!(flags.typing_speed, None);
        assert!(flags.perf);
    }

    #[test]
    fn test_trailing_valued_flag_without_value() {
        let flags = parse_flag_tokens(&args(&["--watch", "--content"]));
        assert!(flags.watch);
        assert_eq!(flags.content, None);
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            watch: true,
            typing_speed: Some(120),
            pause: Some(3000),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            perf: true,
            typing_speed: Some(60),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.watch);
        assert!(merged.perf);
        assert_eq!(merged.typing_speed, Some(60));
        assert_eq!(merged.pause, Some(3000));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            watch: true,
            perf: true,
            content: Some(PathBuf::from("me.json")),
            typing_speed: Some(90),
            deleting_speed: Some(40),
            pause: Some(1800),
            endpoint: Some("https://formspree.io/f/abc".to_string()),
            render_debug_log: Some(PathBuf::from("render.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_short_watch_flag_is_recognised() {
        let flags = parse_flag_tokens(&args(&["folio", "-w", "--content", "me.json"]));
        assert!(flags.watch);
        assert_eq!(flags.content, Some(PathBuf::from("me.json")));
    }

    #[test]
    fn test_paths_with_spaces_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        let flags = ConfigFlags {
            watch: true,
            content: Some(PathBuf::from("/tmp/my site/me.json")),
            render_debug_log: Some(PathBuf::from("/tmp/debug logs/render.log")),
            ..ConfigFlags::default()
        };

        save_config_flags(&path, &flags).unwrap();
        assert_eq!(load_config_flags(&path).unwrap(), flags);
    }

    #[test]
    fn test_equals_syntax_in_file_keeps_spaces() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config");
        std::fs::write(&path, "--content=/tmp/my site/me.json\n--watch --perf\n").unwrap();
        let flags = load_config_flags(&path).unwrap();
        assert_eq!(flags.content, Some(PathBuf::from("/tmp/my site/me.json")));
        assert!(flags.watch);
        assert!(flags.perf);
    }

    #[test]
    fn test_missing_config_file_is_default() {
        let dir = tempdir().unwrap();
        let flags = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(flags, ConfigFlags::default());
    }
}
