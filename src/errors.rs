use std::fmt;



/// Failure of the secure random source.
#[derive(Debug)]
pub enum RandomError {
    /// The OS entropy source could not produce seed material.
    RandomSource(rand::Error),
}


impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomError::RandomSource(e) => write!(f, "Secure random source failed: {}", e),
        }
    }
}


impl std::error::Error for RandomError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RandomError::RandomSource(e) => Some(e),
        }
    }
}


impl From<rand::Error> for RandomError {
    fn from(e: rand::Error) -> Self {
        RandomError::RandomSource(e)
    }
}



#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}


impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Can't read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Can't parse config: {}", e),
        }
    }
}


impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}


impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}


impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
