/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub driver: DriverConfig,
}

#[derive(Deserialize, Clone)]
pub struct SimulationConfig {
    pub n_floors: u8,
    pub tick_rate_hz: u32,
}

#[derive(Deserialize, Clone)]
pub struct DriverConfig {
    pub print_snapshots: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.simulation.n_floors == 0 {
        return Err(ConfigError::Invalid(
            "n_floors must be at least 1".to_string(),
        ));
    }
    if config.simulation.tick_rate_hz == 0 {
        return Err(ConfigError::Invalid(
            "tick_rate_hz must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    const SAMPLE: &str = r#"
        [simulation]
        n_floors = 5
        tick_rate_hz = 60

        [driver]
        print_snapshots = true
    "#;

    #[test]
    fn test_parse_config() {
        // Arrange + Act
        let config: Config = toml::from_str(SAMPLE).unwrap();

        // Assert
        assert_eq!(config.simulation.n_floors, 5);
        assert_eq!(config.simulation.tick_rate_hz, 60);
        assert!(config.driver.print_snapshots);
    }

    #[test]
    fn test_reject_zero_floors() {
        // Arrange
        let mut config: Config = toml::from_str(SAMPLE).unwrap();
        config.simulation.n_floors = 0;

        // Act + Assert
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_reject_zero_tick_rate() {
        // Arrange
        let mut config: Config = toml::from_str(SAMPLE).unwrap();
        config.simulation.tick_rate_hz = 0;

        // Act + Assert
        assert!(matches!(validate(&config), Err(ConfigError::Invalid(_))));
    }
}
