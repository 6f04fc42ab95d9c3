//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shorturl using clap's derive macros.

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_CONFIG_PATH, StaticConfig};

/// shorturl - A small URL shortener microservice
#[derive(Parser, Debug)]
#[command(name = "shorturl")]
#[command(version)]
#[command(about = "A small URL shortener microservice", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default when no command is given)
    Serve,

    /// Generate example configuration file
    GenerateConfig {
        /// Output path (default: print to stdout)
        #[arg(long)]
        output: Option<String>,
    },
}

impl Cli {
    /// 配置文件路径，未指定时使用默认值
    pub fn config_path(&self) -> &str {
        self.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH)
    }
}

/// Write the sample configuration to `output`, or print it when no path is given
pub fn generate_config(output: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            StaticConfig::default().save_to_file(path)?;
            println!("Sample configuration written to {}", path);
        }
        None => print!("{}", StaticConfig::generate_sample_config()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_defaults_to_server() {
        let cli = Cli::try_parse_from(["shorturl"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config_path(), DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn test_config_flag() {
        let cli = Cli::try_parse_from(["shorturl", "-c", "/etc/shorturl.toml", "serve"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Serve));
        assert_eq!(cli.config_path(), "/etc/shorturl.toml");
    }

    #[test]
    fn test_generate_config_output() {
        let cli =
            Cli::try_parse_from(["shorturl", "generate-config", "--output", "out.toml"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::GenerateConfig {
                output: Some("out.toml".to_string())
            })
        );
    }

    #[test]
    fn test_generate_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        generate_config(Some(path.to_str().unwrap())).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[server]"));
        assert!(content.contains("[database]"));
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["shorturl", "add", "https://example.com"]).is_err());
    }
}
