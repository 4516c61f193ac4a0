use asset_pipeline::{ResizeArgs, ResizeOutcome, resize_images};
use clap::Parser;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = ResizeArgs::parse();

    match resize_images(&args.dir, &args.output_dir, args.width, args.height)? {
        ResizeOutcome::Resized(count) => info!("Resized {count} images"),
        ResizeOutcome::NotDirectory(message) => eprintln!("{message}"),
    }
    Ok(())
}
