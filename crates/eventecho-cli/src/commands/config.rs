use anyhow::{bail, Context, Result};
use eventecho_planner::config::{self, KNOWN_KEYS};
use eventecho_planner::Config;
use serde_json::Value;
use toml_edit::DocumentMut;

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    for key in KNOWN_KEYS {
        println!("  {key}: {}", display_value(config, key)?);
    }

    println!("\nPriority: CLI args > ENV vars (EVENTECHO_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value, or the whole config file.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        ensure_known(&key)?;
        println!("{}", display_value(config, &key)?);
    } else {
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'eventecho config init' to create it.");
        }
    }

    Ok(())
}

/// Set a config value, keeping the rest of the file (comments included).
pub fn set_config(key: &str, value: &str) -> Result<()> {
    ensure_known(key)?;
    let config_path = config::config_file_path();

    config::ensure_config_file()?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = apply_setting(&contents, key, value)?;

    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure eventecho.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

fn ensure_known(key: &str) -> Result<()> {
    if KNOWN_KEYS.contains(&key) {
        Ok(())
    } else {
        bail!(
            "Unknown config key: {}\n\nValid keys: {}",
            key,
            KNOWN_KEYS.join(", ")
        );
    }
}

fn display_value(config: &Config, key: &str) -> Result<String> {
    if key == "hf_api_token" {
        return Ok(match config.api_token() {
            Some(_) => "<set>".to_string(),
            None => "<not set>".to_string(),
        });
    }

    let settings = serde_json::to_value(config)?;
    Ok(match settings.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "<not set>".to_string(),
        Some(other) => other.to_string(),
    })
}

/// Write `key = value` into a TOML document, typed like the default value
/// of that setting.
fn apply_setting(contents: &str, key: &str, value: &str) -> Result<String> {
    let mut doc: DocumentMut = contents.parse().context("Config file is not valid TOML")?;

    let defaults = serde_json::to_value(Config::default())?;
    let item = match defaults.get(key) {
        // Unset by default, so the type comes from the key: a comma-separated list.
        _ if key == "stopwords" => {
            let words: toml_edit::Array = value
                .split(',')
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .collect();
            toml_edit::value(words)
        }
        Some(Value::Bool(_)) => {
            let parsed: bool = value
                .parse()
                .with_context(|| format!("{key} expects true or false"))?;
            toml_edit::value(parsed)
        }
        Some(Value::Number(n)) if n.is_f64() => {
            let parsed: f64 = value
                .parse()
                .with_context(|| format!("{key} expects a number"))?;
            toml_edit::value(parsed)
        }
        Some(Value::Number(_)) => {
            let parsed: i64 = value
                .parse()
                .with_context(|| format!("{key} expects a whole number"))?;
            if parsed < 0 {
                bail!("{key} cannot be negative");
            }
            toml_edit::value(parsed)
        }
        _ => toml_edit::value(value),
    };
    doc[key] = item;

    Ok(doc.to_string())
}
