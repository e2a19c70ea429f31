use anyhow::{Context, anyhow, bail};
use dioxus::prelude::*;
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use tailblocks_config::GalleryConfig;
use tailblocks_engine::BlockKind;

mod ui;

use ui::App;
use ui::components::ErrorPanel;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    /// Open the desktop gallery
    Launch { config_path: Option<PathBuf> },
    /// Write the gallery as static HTML; `None` output means the config's export_path
    Export {
        config_path: Option<PathBuf>,
        output: Option<PathBuf>,
    },
    /// Write a starter config listing every block
    Init { config_path: Option<PathBuf> },
    Help,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Command> {
    let mut config_path = None;
    let mut export = None;
    let mut init = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--init" => init = true,
            "--export" => export = Some(args.next().map(PathBuf::from)),
            flag if flag.starts_with("--export=") => {
                export = Some(Some(PathBuf::from(&flag["--export=".len()..])));
            }
            flag if flag.starts_with('-') => bail!("Unknown option: {flag}"),
            path => {
                if config_path.is_some() {
                    bail!("Only one config file may be given");
                }
                config_path = Some(PathBuf::from(path));
            }
        }
    }

    match (init, export) {
        (true, Some(_)) => bail!("--init and --export cannot be combined"),
        (true, None) => Ok(Command::Init { config_path }),
        (false, Some(output)) => Ok(Command::Export {
            config_path,
            output,
        }),
        (false, None) => Ok(Command::Launch { config_path }),
    }
}

fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program_name} [config.toml] [--export [out.html]]\n       {program_name} --init [config.toml]\n\nWithout a config file, {} is used if present.",
        GalleryConfig::config_path().display()
    )
}

/// Load the named config file, or the default one, falling back to an
/// all-defaults gallery when the default file does not exist.
fn load_gallery_config(config_path: Option<&Path>) -> anyhow::Result<GalleryConfig> {
    match config_path {
        Some(path) => GalleryConfig::load_from_path(path)?
            .ok_or_else(|| anyhow!("Config file not found: {}", path.display())),
        None => match GalleryConfig::load()? {
            Some(config) => {
                log::info!(
                    "Loaded gallery config from {}",
                    GalleryConfig::config_path().display()
                );
                Ok(config)
            }
            None => {
                log::info!("No config file found, showing every block with its defaults");
                Ok(GalleryConfig::default())
            }
        },
    }
}

fn starter_config() -> GalleryConfig {
    GalleryConfig {
        blocks: Some(BlockKind::ALL.to_vec()),
        ..Default::default()
    }
}

fn run(command: Command, program_name: &str) -> anyhow::Result<()> {
    match command {
        Command::Help => {
            println!("{}", usage(program_name));
            Ok(())
        }
        Command::Init { config_path } => {
            let path = config_path.unwrap_or_else(GalleryConfig::config_path);
            if path.exists() {
                bail!("Refusing to overwrite existing config at {}", path.display());
            }
            starter_config()
                .save_to_path(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote starter config to {}", path.display());
            Ok(())
        }
        Command::Export {
            config_path,
            output,
        } => {
            let config = load_gallery_config(config_path.as_deref())?;
            let output = output
                .or_else(|| config.export_path.clone())
                .ok_or_else(|| anyhow!("No export file given and no export_path configured"))?;
            ui::export_to_path(&config, &output)
        }
        Command::Launch { config_path } => {
            let config = load_gallery_config(config_path.as_deref())?;
            log::info!(
                "Launching gallery '{}' with {} blocks",
                config.title(),
                config.blocks().len()
            );
            dioxus::LaunchBuilder::desktop()
                .with_cfg(make_window_config(config.title()))
                .launch(app_root);
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "tailblocks".to_string());

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&program_name));
            process::exit(2);
        }
    };

    if let Err(e) = run(command, &program_name) {
        log::error!("{e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Re-reads the command line; the launcher gives the root no props.
fn app_root() -> Element {
    let config = use_hook(|| {
        let config_path = match parse_args(env::args().skip(1)) {
            Ok(Command::Launch { config_path }) => config_path,
            _ => None,
        };
        load_gallery_config(config_path.as_deref()).map_err(|e| format!("{e:#}"))
    });

    match config {
        Ok(config) => rsx! {
            App { config }
        },
        Err(details) => rsx! {
            ErrorPanel {
                title: "Config Error",
                message: "Failed to load the gallery configuration",
                details: Some(details),
                full_screen: true,
            }
        },
    }
}

fn make_window_config(title: &str) -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title(title)
        .with_always_on_top(false);

    Config::default().with_window(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> anyhow::Result<Command> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_no_args_launches_with_default_config() {
        assert_eq!(parse(&[]).unwrap(), Command::Launch { config_path: None });
    }

    #[test]
    fn test_export_with_explicit_output() {
        assert_eq!(
            parse(&["gallery.toml", "--export", "out.html"]).unwrap(),
            Command::Export {
                config_path: Some(PathBuf::from("gallery.toml")),
                output: Some(PathBuf::from("out.html")),
            }
        );
        assert_eq!(
            parse(&["--export=site/index.html"]).unwrap(),
            Command::Export {
                config_path: None,
                output: Some(PathBuf::from("site/index.html")),
            }
        );
    }

    #[test]
    fn test_trailing_export_uses_configured_path() {
        assert_eq!(
            parse(&["gallery.toml", "--export"]).unwrap(),
            Command::Export {
                config_path: Some(PathBuf::from("gallery.toml")),
                output: None,
            }
        );
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
        assert!(parse(&["--init", "--export", "x.html"]).is_err());
        assert_eq!(parse(&["--help", "--verbose"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let err = load_gallery_config(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_export_uses_configured_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("gallery.toml");
        let output = temp_dir.path().join("gallery.html");
        std::fs::write(
            &config_path,
            format!(
                "title = \"Exported\"\nexport_path = {:?}\nblocks = [\"hero-tailwind-stats\"]\n",
                output.display().to_string()
            ),
        )
        .unwrap();

        run(
            Command::Export {
                config_path: Some(config_path),
                output: None,
            },
            "tailblocks",
        )
        .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Exported</title>"));
        assert!(html.contains("8,000+"));
    }

    #[test]
    fn test_init_writes_loadable_starter_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        run(
            Command::Init {
                config_path: Some(config_path.clone()),
            },
            "tailblocks",
        )
        .unwrap();
        let loaded = load_gallery_config(Some(&config_path)).unwrap();
        assert_eq!(loaded.blocks(), BlockKind::ALL.to_vec());

        let again = run(
            Command::Init {
                config_path: Some(config_path),
            },
            "tailblocks",
        );
        assert!(again.is_err());
    }
}
