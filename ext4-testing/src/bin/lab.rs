use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ext4_client::{CheckOptions, Client, CreateOptions, ResizeOptions};
use ext4_testing::lab;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lab")]
#[command(about = "Loop-image lifecycle and maintenance commands for ext4-client testing")]
struct LabCli {
    #[command(subcommand)]
    command: LabCommand,
}

#[derive(Debug, Subcommand)]
enum LabCommand {
    /// Create a sparse image file.
    Create {
        image: PathBuf,
        #[arg(long, default_value_t = 512)]
        size_mib: u64,
    },
    /// Attach an image to a free loop device and print the device path.
    Attach { image: PathBuf },
    /// Detach a loop device.
    Detach { device: String },
    /// Remove an image file.
    Destroy { image: PathBuf },
    /// Create an ext4 filesystem on a device.
    Mkfs {
        device: String,
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        force: bool,
    },
    /// Resize an ext4 filesystem.
    Resize {
        device: String,
        #[arg(long)]
        size: Option<String>,
        #[arg(long)]
        shrink: bool,
    },
    /// Check an ext4 filesystem.
    Check {
        device: String,
        #[arg(long)]
        force: bool,
        #[arg(long)]
        preen: bool,
        #[arg(long)]
        no_fix: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = LabCli::parse();
    let client = Client::new();
    let cancel = CancellationToken::new();

    match cli.command {
        LabCommand::Create { image, size_mib } => {
            lab::create_image(&image, size_mib * 1024 * 1024)?;
            println!("{}", image.display());
        }
        LabCommand::Attach { image } => {
            let device = lab::attach(&image)?;
            println!("{device}");
        }
        LabCommand::Detach { device } => lab::detach(&device)?,
        LabCommand::Destroy { image } => lab::destroy(&image)?,
        LabCommand::Mkfs {
            device,
            label,
            size,
            force,
        } => {
            let opts = CreateOptions {
                device,
                size: size.unwrap_or_default(),
                label: label.unwrap_or_default(),
                force,
                ..Default::default()
            };
            client.create_filesystem(&opts, &cancel).await?;
        }
        LabCommand::Resize {
            device,
            size,
            shrink,
        } => {
            let opts = ResizeOptions {
                device,
                size: size.unwrap_or_default(),
                shrink,
                ..Default::default()
            };
            client.resize_filesystem(&opts, &cancel).await?;
        }
        LabCommand::Check {
            device,
            force,
            preen,
            no_fix,
        } => {
            let opts = CheckOptions {
                device,
                force,
                preen,
                no_fix,
                ..Default::default()
            };
            client.check_filesystem(&opts, &cancel).await?;
        }
    }

    Ok(())
}
