mod paths;
mod print;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kubeconf::{copy_file_content, merge, KubeConfig};

/// kubectl config file manager: view, merge, back up and restore the
/// config files kubectl keeps under ~/.kube.
#[derive(Parser)]
#[clap(name = "kcm", version)]
struct Cli {
    /// Path to the kubectl config to operate on (default: ~/.kube/config)
    #[clap(long, global = true)]
    kubeconfig: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Merge the config stored at <PATH> into the active one
    Merge {
        /// Config file to merge in
        path: PathBuf,
        /// Write the result here instead of overwriting the active config
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Copy the active config to the backup location
    Backup {
        /// Custom backup file instead of the default in ~/.kcm
        #[clap(long)]
        backup: Option<PathBuf>,
    },
    /// Overwrite the active config with a previously saved backup
    Restore {
        /// Custom backup file instead of the default in ~/.kcm
        #[clap(long)]
        backup: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let kubeconfig = paths::kubeconfig_path(cli.kubeconfig);

    match cli.command {
        None => {
            let conf = KubeConfig::read_from(&kubeconfig)?;
            print::pretty_print(&conf)?;
        }
        Some(Command::Merge { path, output }) => {
            let output = paths::output_path(output, &kubeconfig);

            let main_conf = KubeConfig::read_from(&kubeconfig)?;
            let extra_conf = KubeConfig::read_from(&path)?;

            // A rejected merge is normal usage: report it and leave the
            // active config untouched.
            let merged = match merge(&main_conf, &extra_conf) {
                Ok(merged) => merged,
                Err(err) => {
                    println!("{err}");
                    return Ok(());
                }
            };

            merged.write_to(&output)?;
        }
        Some(Command::Backup { backup }) => {
            let backup = paths::backup_path(backup);
            if let Some(folder) = backup.parent() {
                fs::create_dir_all(folder)?;
            }
            copy_file_content(&kubeconfig, &backup)?;
        }
        Some(Command::Restore { backup }) => {
            let backup = paths::backup_path(backup);
            copy_file_content(&backup, &kubeconfig)?;
        }
    }

    Ok(())
}
