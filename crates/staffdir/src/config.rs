use std::{env, time::Duration};

use staffdir_core::directory::{DEFAULT_DEPARTMENTS_TABLE, DEFAULT_EMPLOYEES_TABLE};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Employees table name (default: "employees")
    pub employees_table: String,
    /// Departments table name (default: "departments")
    pub departments_table: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB (default: none)
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    #[allow(dead_code)]
    pub aws_region: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EMPLOYEES_TABLE` - Employees table name (default: "employees")
    /// - `DEPARTMENTS_TABLE` - Departments table name (default: "departments")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            employees_table: env::var("EMPLOYEES_TABLE")
                .unwrap_or_else(|_| DEFAULT_EMPLOYEES_TABLE.to_string()),
            departments_table: env::var("DEPARTMENTS_TABLE")
                .unwrap_or_else(|_| DEFAULT_DEPARTMENTS_TABLE.to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            employees_table: "employees".to_string(),
            departments_table: "departments".to_string(),
            aws_endpoint_url: None,
            aws_region: "us-east-1".to_string(),
            request_timeout_seconds: 30,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("EMPLOYEES_TABLE");
        env::remove_var("DEPARTMENTS_TABLE");
        env::remove_var("AWS_ENDPOINT_URL");
        env::remove_var("AWS_REGION");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.employees_table, "employees");
        assert_eq!(config.departments_table, "departments");
        assert_eq!(config.aws_endpoint_url, None);
        assert_eq!(config.aws_region, "us-east-1");
        assert_eq!(config.request_timeout_seconds, 10);
    }
}
