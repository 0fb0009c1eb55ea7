use std::fmt;
use std::str::FromStr;


/// A single line of `rustc --print=cfg` output, e.g. `unix` or `target_os="linux"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cfg {
    Name(String),
    KeyPair(String, String),
}

impl Cfg {
    pub fn key(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::KeyPair(key, _) => key,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Name(_) => None,
            Self::KeyPair(_, value) => Some(value),
        }
    }
}

impl FromStr for Cfg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once('=') {
            None => {
                if is_ident(s) {
                    Ok(Self::Name(s.to_string()))
                } else {
                    Err(format!("invalid cfg `{}`", s))
                }
            }
            Some((key, value)) => {
                let key = key.trim();
                let value = value
                    .trim()
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .ok_or_else(|| format!("expected a quoted value in cfg `{}`", s))?;
                if is_ident(key) {
                    Ok(Self::KeyPair(key.to_string(), value.to_string()))
                } else {
                    Err(format!("invalid cfg key `{}`", key))
                }
            }
        }
    }
}

impl fmt::Display for Cfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::KeyPair(key, value) => write!(f, "{}=\"{}\"", key, value),
        }
    }
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_str() {
        assert_eq!("unix".parse::<Cfg>().unwrap(), Cfg::Name("unix".into()));
        assert_eq!(
            "target_os=\"linux\"".parse::<Cfg>().unwrap(),
            Cfg::KeyPair("target_os".into(), "linux".into())
        );
        assert!("target_os=linux".parse::<Cfg>().is_err());
        assert!("".parse::<Cfg>().is_err());
        assert!("9lives".parse::<Cfg>().is_err());
    }

    #[test]
    fn display() {
        let cfg = Cfg::KeyPair("target_arch".into(), "x86_64".into());
        assert_eq!(cfg.to_string(), "target_arch=\"x86_64\"");
        assert_eq!(cfg.to_string().parse::<Cfg>().unwrap(), cfg);
    }
}
