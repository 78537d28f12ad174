use std::env;

/// Which notifier adapter to wire up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierKind {
    /// Log each event payload
    #[default]
    Log,
    /// Drop events
    Noop,
}

impl std::fmt::Display for NotifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifierKind::Log => write!(f, "log"),
            NotifierKind::Noop => write!(f, "noop"),
        }
    }
}

impl std::str::FromStr for NotifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(NotifierKind::Log),
            "noop" | "none" => Ok(NotifierKind::Noop),
            _ => Err(format!("Unknown product notifier: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub notifier: NotifierKind,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let notifier = match lookup("PRODUCT_NOTIFIER") {
            Some(value) => value.parse()?,
            None => NotifierKind::default(),
        };

        Ok(Self { notifier })
    }
}
