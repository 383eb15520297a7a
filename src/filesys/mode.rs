//! `fopen`-style mode strings mapped onto `std::fs::OpenOptions`

use std::fs::OpenOptions;
use std::str::FromStr;

use super::error::FsError;

/// Primary access requested by a mode string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
    Append,
}

/// Parsed open mode (`r`, `wb`, `a+`, `w+bx`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    pub access: Access,
    pub update: bool,
    pub binary: bool,
    pub exclusive: bool,
}

/// Expand the `r`/`w` shorthands to their binary forms
pub fn normalize(mode: &str) -> &str {
    match mode {
        "r" => "rb",
        "w" => "wb",
        other => other,
    }
}

impl OpenMode {
    pub fn read() -> Self {
        Self {
            access: Access::Read,
            update: false,
            binary: true,
            exclusive: false,
        }
    }

    pub fn write() -> Self {
        Self {
            access: Access::Write,
            ..Self::read()
        }
    }

    pub fn is_writable(&self) -> bool {
        self.update || self.access != Access::Read
    }

    pub fn to_open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self.access {
            Access::Read => {
                options.read(true).write(self.update);
            }
            Access::Write => {
                options.write(true).read(self.update);
                if self.exclusive {
                    options.create_new(true);
                } else {
                    options.create(true).truncate(true);
                }
            }
            Access::Append => {
                options.append(true).read(self.update);
                if self.exclusive {
                    options.create_new(true);
                } else {
                    options.create(true);
                }
            }
        }
        options
    }
}

impl FromStr for OpenMode {
    type Err = FsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FsError::InvalidMode {
            mode: s.to_string(),
        };

        let mut chars = s.chars();
        let access = match chars.next() {
            Some('r') => Access::Read,
            Some('w') => Access::Write,
            Some('a') => Access::Append,
            _ => return Err(invalid()),
        };

        let mut mode = OpenMode {
            access,
            update: false,
            binary: false,
            exclusive: false,
        };
        let mut text = false;

        for c in chars {
            match c {
                '+' if !mode.update => mode.update = true,
                'b' if !mode.binary && !text => mode.binary = true,
                't' if !mode.binary && !text => text = true,
                'x' if !mode.exclusive && access != Access::Read => mode.exclusive = true,
                _ => return Err(invalid()),
            }
        }

        Ok(mode)
    }
}
