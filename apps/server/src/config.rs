/// Server configuration, resolved from the environment (a `.env` file is
/// honored when present).
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr =
            std::env::var("FBA_LISTEN_ADDR").unwrap_or_else(|_| "127.0.0.1:8700".to_string());
        let db_path = std::env::var("FBA_DB_PATH").unwrap_or_else(|_| "data/fba.db".to_string());

        Config {
            listen_addr,
            db_path,
        }
    }
}
