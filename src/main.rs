//! tiff-layout - Decode TIFF IFD entries from the command line.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tiff_layout::{
    decode_at, describe, to_json, ByteSource, Config, Decoded, FileSource, OutputFormat,
    TiffError, TiffHeader,
};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let decoded = match decode_entries(&config) {
        Ok(decoded) => decoded,
        Err(e) => {
            error!("{}: {}", config.file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match print_entries(&decoded, config.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to serialize entries: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn decode_entries(config: &Config) -> Result<Vec<Decoded>, TiffError> {
    let source = FileSource::open(&config.file)?;
    let header = TiffHeader::read(&source)?;

    info!(
        file = source.identifier(),
        size = source.size(),
        byte_order = header.byte_order.name(),
        first_ifd = header.first_ifd_offset,
        "read TIFF header"
    );

    let mut decoded = Vec::with_capacity(config.entries);
    for offset in config.entry_offsets(header.first_entry_offset()) {
        let entry = decode_at(&source, offset, header.byte_order)?;
        debug!(offset, tag = entry.field.id, "decoded entry");
        decoded.push(entry);
    }

    Ok(decoded)
}

fn print_entries(decoded: &[Decoded], format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Text => {
            for entry in decoded {
                println!("{}", describe(entry));
            }
        }
        OutputFormat::Json => println!("{}", to_json(decoded)?),
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "tiff_layout=debug"
    } else {
        "tiff_layout=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
