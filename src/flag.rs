use std::fmt;

/// Leading dash run of a flag token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashes {
    None,
    Short,
    Long,
}

impl Dashes {
    pub fn as_str (&self) -> &'static str {
        match self {
            Dashes::None => "",
            Dashes::Short => "-",
            Dashes::Long => "--",
        }
    }
}

/// Flag structure of a single token.
///
/// `Invalid` stands for text that is neither a value nor a usable flag:
/// three or more leading dashes, or an `=` right after the dashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    Bare(String),
    Flag {
        dashes: Dashes,
        name: String,
        value: Option<String>,
    },
    Invalid,
}

impl Flag {
    pub fn parse (text: &str) -> Self {
        let rest = text.trim_start_matches('-');

        let dashes = match text.len() - rest.len() {
            0 => return Flag::Bare(text.to_string()),
            1 => Dashes::Short,
            2 => Dashes::Long,
            _ => return Flag::Invalid,
        };

        match rest.split_once('=') {
            Some(("", _)) => Flag::Invalid,
            Some((name, value)) => Flag::Flag {
                dashes,
                name: name.to_string(),
                value: Some(value.to_string()),
            },
            None => Flag::Flag {
                dashes,
                name: rest.to_string(),
                value: None,
            },
        }
    }

    pub fn dashes (&self) -> &str {
        match self {
            Flag::Flag { dashes, .. } => dashes.as_str(),
            _ => "",
        }
    }

    pub fn name (&self) -> &str {
        match self {
            Flag::Flag { name, .. } => name,
            _ => "",
        }
    }

    pub fn has_flag (&self) -> bool {
        matches!(self, Flag::Flag { .. })
    }

    pub fn value (&self) -> &str {
        match self {
            Flag::Bare(value) => value,
            Flag::Flag { value: Some(value), .. } => value,
            _ => "",
        }
    }

    pub fn has_value (&self) -> bool {
        matches!(self, Flag::Bare(_) | Flag::Flag { value: Some(_), .. })
    }

    pub fn is_invalid (&self) -> bool {
        matches!(self, Flag::Invalid)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Bare(value) => write!(f, "{value}"),
            Flag::Flag { dashes, name, value } => {
                write!(f, "{}{name}", dashes.as_str())?;
                if let Some(value) = value {
                    write!(f, "={value}")?;
                }
                Ok(())
            }
            Flag::Invalid => Ok(()),
        }
    }
}
