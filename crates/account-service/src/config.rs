use common::config::{AuthConfig, ConfigError};
use std::collections::HashMap;
use std::env;

/// Default bcrypt work factor for password hashing.
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub bind_address: String,
    pub bcrypt_cost: u32,
    pub auth: AuthConfig,
}

impl AccountConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the signing secret is missing or weak, or
    /// if an override variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing).
    ///
    /// Recognized variables beyond [`AuthConfig`]'s: `BIND_ADDRESS`
    /// (default `0.0.0.0:3333`) and `BCRYPT_COST` (default 12, valid
    /// range 4..=31).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the signing secret is missing or weak, or
    /// if an override variable does not parse.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0:3333".to_string());

        let bcrypt_cost = match vars.get("BCRYPT_COST") {
            None => DEFAULT_BCRYPT_COST,
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|cost| (4..=31).contains(cost))
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: "BCRYPT_COST".to_string(),
                    value: value.clone(),
                })?,
        };

        let auth = AuthConfig::from_vars(vars)?;

        Ok(Self {
            bind_address,
            bcrypt_cost,
            auth,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn base_vars() -> HashMap<String, String> {
        HashMap::from([(
            "JWT_SECRET".to_string(),
            "account-service-test-secret-32bytes!".to_string(),
        )])
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = AccountConfig::from_vars(&base_vars()).expect("config should load");

        assert_eq!(config.bind_address, "0.0.0.0:3333");
        assert_eq!(config.bcrypt_cost, DEFAULT_BCRYPT_COST);
    }

    #[test]
    fn test_from_vars_custom_bind_address() {
        let mut vars = base_vars();
        vars.insert("BIND_ADDRESS".to_string(), "127.0.0.1:9000".to_string());

        let config = AccountConfig::from_vars(&vars).expect("config should load");
        assert_eq!(config.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn test_from_vars_bcrypt_cost_out_of_range() {
        let mut vars = base_vars();
        vars.insert("BCRYPT_COST".to_string(), "99".to_string());

        let result = AccountConfig::from_vars(&vars);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { var, .. }) if var == "BCRYPT_COST"
        ));
    }

    #[test]
    fn test_from_vars_missing_secret_propagates() {
        let result = AccountConfig::from_vars(&HashMap::new());
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(v)) if v == "JWT_SECRET"));
    }
}
