use anyhow::Result;
use pdf_sections::pdf_source::PdfOpener;
use pdf_sections::report::LogReporter;
use pdf_sections::{collection, config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = std::env::current_dir()?;
    let opener = PdfOpener;
    let reporter = LogReporter;
    for dir in config::collection_dirs(&root)? {
        // One bad collection never stops the batch.
        if let Err(err) = collection::process_collection(&dir, &opener, &reporter) {
            log::error!("Collection '{}' failed: {:#}", dir.display(), err);
        }
    }
    println!("All collections processed.");
    Ok(())
}
