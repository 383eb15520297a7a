use crate::cli::options::{Commands, LocalFsCli};
use crate::cli::output::{print_file_info, print_listing};
use crate::config::LocalFsConfig;
use crate::filesys::{
    FileStream, FileSystem, FsError, LocalFileSystem, Result, SeekStream, Stream, Uri,
};
use tracing::{debug, info};

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Executes parsed CLI commands against a local filesystem
pub struct LocalFsCliImpl {
    fs: LocalFileSystem,
}

impl LocalFsCliImpl {
    pub fn new(config: LocalFsConfig) -> Self {
        Self {
            fs: LocalFileSystem::with_config(config),
        }
    }

    /// Build from CLI flags, loading `--config` when given
    pub fn from_cli(cli: &LocalFsCli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                LocalFsConfig::load(path)?
            }
            None => LocalFsConfig::default(),
        };
        Ok(Self::new(config))
    }

    pub fn filesystem(&self) -> &LocalFileSystem {
        &self.fs
    }

    pub fn execute(&self, command: &Commands) -> Result<()> {
        match command {
            Commands::Mkdir { path } => self.fs.create_directory(&resolve(path)?),
            Commands::Rmdir { path } => self.fs.delete_directory(&resolve(path)?),
            Commands::Stat { path, format } => {
                print_file_info(&self.fs.get_path_info(&resolve(path)?), *format)
            }
            Commands::Ls {
                path,
                recursive,
                format,
            } => {
                let uri = resolve(path)?;
                let entries = if *recursive {
                    self.fs.list_directory_recursive(&uri)?
                } else {
                    self.fs.list_directory(&uri)?
                };
                print_listing(&entries, *format)
            }
            Commands::Cat { path } => {
                let uri = resolve(path)?;
                let mut input = self.fs.open_stream(&uri, "r")?;
                let mut output = FileStream::stdout();
                let copied = copy_stream(input.as_mut(), &mut output)?;
                output.close()?;
                debug!("Copied {} bytes from {}", copied, uri);
                Ok(())
            }
            Commands::Put { path, append } => {
                let uri = resolve(path)?;
                let mode = if *append { "ab" } else { "w" };
                let mut output = self.fs.open_stream(&uri, mode)?;
                let mut input = FileStream::stdin();
                let copied = copy_stream(&mut input, output.as_mut())?;
                info!("Wrote {} bytes to {}", copied, uri);
                Ok(())
            }
        }
    }
}

/// Parse a CLI path argument, refusing schemes the local backend cannot serve
pub fn resolve(path: &str) -> Result<Uri> {
    let uri = Uri::parse(path);
    if !uri.is_local() {
        return Err(FsError::UnsupportedScheme {
            protocol: uri.protocol,
        });
    }
    Ok(uri)
}

/// Copy `input` into `output` until end of data, returning the byte count
pub fn copy_stream(input: &mut dyn SeekStream, output: &mut dyn SeekStream) -> Result<u64> {
    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = Stream::read(input, &mut buf)?;
        if n > 0 {
            Stream::write(output, &buf[..n])?;
            total += n as u64;
        }
        if n < buf.len() || input.at_end() {
            break;
        }
    }
    Ok(total)
}
