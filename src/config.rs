use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub open_library_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "readstack-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_else(|_| "unset".to_string()),
            ),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            open_library_url: env::var("OPEN_LIBRARY_URL")
                .unwrap_or_else(|_| "https://openlibrary.org".to_string()),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "readstack-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_model: "gpt-4o".to_string(),
            open_library_url: "https://openlibrary.org".to_string(),
        }
    }
}
