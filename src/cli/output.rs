use crate::cli::options::OutputFormat;
use crate::filesys::{FileInfo, FileType, Result};

/// Render one record as a text line
pub fn format_file_info(info: &FileInfo) -> String {
    let kind = match info.file_type {
        FileType::Directory => "d",
        FileType::File => "-",
        FileType::NonExistent => "?",
    };
    format!("{} {:>12} {}", kind, info.size, info.path)
}

/// Render records in the requested format
pub fn render_listing(entries: &[FileInfo], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(entries
            .iter()
            .map(format_file_info)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
    }
}

/// Print path information
pub fn print_file_info(info: &FileInfo, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", format_file_info(info)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(info)?);
        }
    }
    Ok(())
}

/// Print a directory listing
pub fn print_listing(entries: &[FileInfo], format: OutputFormat) -> Result<()> {
    let rendered = render_listing(entries, format)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}
