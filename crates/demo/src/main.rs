use log::info;
use simple_logger::SimpleLogger;

use catalog::config::get_catalog_config;
use catalog::{Catalog, FileRecord, Result};

fn main() -> Result<()> {
    SimpleLogger::new().init().unwrap();
    let config = get_catalog_config()?;
    let mut catalog = Catalog::new(config);

    catalog.add(FileRecord::new("files.txt", 1024, "/path/to/file"));
    catalog.add(FileRecord::new("firstApp.java", 2048, "/path/to/file"));

    info!("files at /path/to/file:");
    for record in catalog.find("/path/to/file") {
        info!("  {}", record.name());
    }

    info!("files at /path/to/file with size <= 1500 bytes:");
    for record in catalog.filter_by_size("/path/to/file", 1500) {
        info!("  {}", record.name());
    }

    catalog.remove("/path/to/file");

    catalog.add(FileRecord::new("notes.md", 512, "/home/docs"));
    catalog.add(FileRecord::new("report.pdf", 4096, "/home/docs"));

    info!("all files sorted by size:");
    for record in catalog.sort_by_size() {
        info!("  {} - {} bytes", record.name(), record.size());
    }

    let kept =
        catalog.add_with_consistency_check(FileRecord::new("inconsistent.txt", 4096, "/another/path/"));
    info!("consistency-checked insert kept: {}", kept);

    // Lands in the "/another/path" bucket, whose first record has a
    // different full path, so this one gets warned about and dropped.
    let kept =
        catalog.add_with_consistency_check(FileRecord::new("dropped.txt", 128, "/another/path/deeper"));
    info!("consistency-checked insert kept: {}", kept);

    Ok(())
}
