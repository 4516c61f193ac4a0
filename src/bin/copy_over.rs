use asset_pipeline::{CopyArgs, copier, copy_images_over};
use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = CopyArgs::parse();

    copier::validate(&args)?;
    let tally = copy_images_over(&args.manifest, &args.source_dir, &args.thumbnails_dir)?;

    info!(
        "Done: {} models examined, {} sample images copied",
        tally.total, tally.copied
    );
    Ok(())
}
