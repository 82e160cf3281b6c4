//! CLI for inspecting and editing projected-light device configuration.

mod store;
mod watch;

use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use glint_lights::Catalog;
use glint_resolve::controls::{
    Binding, CONTROLS, TEXTURE_PRESETS, format_value, slider_default, slider_get,
    texture_preset_index,
};
use glint_resolve::{
    Field, default_bool, default_float, get_bool, get_float, resolve, set_bool, set_float,
    set_texture,
};

#[derive(Parser)]
#[command(name = "glint", about = "Projected-light device configuration tool")]
struct Cli {
    /// TOML overlay applied on top of the built-in catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the device kinds the catalog knows.
    Kinds,
    /// Print the default parameters for a kind.
    Defaults { kind: String },
    /// Resolve a device's effective parameters from its config file.
    Show {
        file: PathBuf,
        #[arg(long, default_value = "")]
        kind: String,
    },
    /// Print one resolved field.
    Get {
        file: PathBuf,
        field: String,
        #[arg(long, default_value = "")]
        kind: String,
    },
    /// Set one override. Values equal to the default remove the override.
    Set {
        file: PathBuf,
        field: String,
        value: String,
        #[arg(long, default_value = "")]
        kind: String,
    },
    /// Remove one override, or every override with --all.
    Reset {
        file: PathBuf,
        field: Option<String>,
        #[arg(long)]
        all: bool,
        #[arg(long, default_value = "")]
        kind: String,
    },
    /// Re-resolve and report whenever the file changes on disk.
    Watch {
        file: PathBuf,
        #[arg(long, default_value = "")]
        kind: String,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let catalog = match &cli.catalog {
        Some(path) => {
            let catalog = Catalog::from_path(path)?;
            log::info!("catalog overlay loaded from {}", path.display());
            catalog
        }
        None => Catalog::builtin(),
    };

    match cli.command {
        Command::Kinds => {
            for kind in catalog.kinds() {
                println!("{}", kind);
            }
        }
        Command::Defaults { kind } => {
            if !catalog.contains(&kind) {
                log::warn!("unknown kind {:?}, showing generic defaults", kind);
            }
            print_controls(&catalog, &kind, "");
        }
        Command::Show { file, kind } => {
            let text = read_device(&file)?;
            print_controls(&catalog, &kind, &text);
        }
        Command::Get { file, field, kind } => {
            let text = read_device(&file)?;
            let field = parse_field(&field)?;
            println!("{}", field_value(&catalog, &kind, &text, field));
        }
        Command::Set { file, field, value, kind } => {
            let text = read_device(&file)?;
            let field = parse_field(&field)?;
            match apply_set(&catalog, &kind, &text, field, &value)? {
                Some(updated) => {
                    fs::write(&file, &updated)?;
                    log::info!("{} updated ({} = {})", file.display(), field.key(), value);
                }
                None => log::info!("no change"),
            }
        }
        Command::Reset { file, field, all, kind } => {
            let mut text = read_device(&file)?;
            let fields: Vec<Field> = match (field, all) {
                (Some(name), false) => vec![parse_field(&name)?],
                (None, true) => Field::ALL.to_vec(),
                _ => return Err("pass a field name or --all".into()),
            };
            let mut changed = false;
            for field in fields {
                if let Some(updated) = reset_field(&catalog, &kind, &text, field) {
                    log::debug!("cleared {}", field.key());
                    text = updated;
                    changed = true;
                }
            }
            if changed {
                fs::write(&file, &text)?;
                log::info!("{} reset", file.display());
            } else {
                log::info!("no overrides to clear");
            }
        }
        Command::Watch { file, kind } => {
            watch::watch_device(&catalog, &kind, &file)?;
        }
    }
    Ok(())
}

/// A device with no config file behaves like one with an empty blob.
fn read_device(path: &Path) -> Result<String, Box<dyn Error>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}

fn parse_field(name: &str) -> Result<Field, Box<dyn Error>> {
    Field::parse(name).ok_or_else(|| format!("unknown field {:?}", name).into())
}

fn field_value(catalog: &Catalog, kind: &str, text: &str, field: Field) -> String {
    match field {
        Field::Bool(f) => get_bool(catalog, kind, text, f).to_string(),
        Field::Float(f) => format!("{:.3}", get_float(catalog, kind, text, f)),
        Field::Texture => resolve(catalog, kind, text).texture,
    }
}

fn apply_set(
    catalog: &Catalog,
    kind: &str,
    text: &str,
    field: Field,
    value: &str,
) -> Result<Option<String>, Box<dyn Error>> {
    match field {
        Field::Bool(f) => {
            let value: bool = value
                .parse()
                .map_err(|_| format!("{} expects true or false", f.key()))?;
            Ok(set_bool(catalog, kind, text, f, value))
        }
        Field::Float(f) => {
            let value: f32 = value
                .parse()
                .map_err(|_| format!("{} expects a number", f.key()))?;
            Ok(set_float(catalog, kind, text, f, value))
        }
        Field::Texture => Ok(set_texture(text, value)),
    }
}

fn reset_field(catalog: &Catalog, kind: &str, text: &str, field: Field) -> Option<String> {
    match field {
        Field::Bool(f) => set_bool(catalog, kind, text, f, default_bool(catalog, kind, f)),
        Field::Float(f) => set_float(catalog, kind, text, f, default_float(catalog, kind, f)),
        Field::Texture => set_texture(text, ""),
    }
}

/// Walks the control surface and prints each control the way a terminal UI
/// would bind it: label, formatted value, off-default marker, gating.
fn print_controls(catalog: &Catalog, kind: &str, text: &str) {
    for control in CONTROLS {
        let locked = if control.is_enabled(catalog, kind, text) {
            ""
        } else {
            "  [locked]"
        };
        match control.binding {
            Binding::Toggle(field) => {
                let value = get_bool(catalog, kind, text, field);
                let mark = if value == default_bool(catalog, kind, field) {
                    ""
                } else {
                    " *"
                };
                println!(
                    "{:<18} {}{}{}",
                    control.label,
                    if value { "on" } else { "off" },
                    mark,
                    locked
                );
            }
            Binding::Slider { .. } => {
                let value = slider_get(catalog, kind, text, control).unwrap_or(0.0);
                let default = slider_default(catalog, kind, control).unwrap_or(0.0);
                let mark = if (value - default).abs() < 1e-3 { "" } else { " *" };
                println!(
                    "{:<18} {}{}{}",
                    control.label,
                    format_value(control, value),
                    mark,
                    locked
                );
            }
            Binding::TextureCombo => {
                let index = texture_preset_index(text);
                let (name, _) = TEXTURE_PRESETS[index];
                let effective = resolve(catalog, kind, text).texture;
                println!("{:<18} {} ({}){}", control.label, name, effective, locked);
            }
        }
    }
}
