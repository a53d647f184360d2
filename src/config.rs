use jsonwebtoken::Algorithm;
use std::env;

/// Process-wide configuration, read from the environment exactly once at
/// startup and passed explicitly to the components that need it.
///
/// Missing or invalid required settings abort startup. The signing secret
/// lives only here and inside the token codec; the struct deliberately
/// does not derive `Debug` so the secret cannot end up in a log line.
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub token_ttl_minutes: i64,
    pub server_port: u16,
    pub server_host: String,
}

impl Config {
    pub fn from_env() -> Self {
        let jwt_algorithm = match env::var("JWT_ALGORITHM")
            .expect("JWT_ALGORITHM must be set")
            .as_str()
        {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            other => panic!("JWT_ALGORITHM must be one of HS256, HS384, HS512 (got {})", other),
        };

        let token_ttl_minutes: i64 = env::var("JWT_ACCESS_TOKEN_EXPIRE_MINUTES")
            .expect("JWT_ACCESS_TOKEN_EXPIRE_MINUTES must be set")
            .parse()
            .expect("JWT_ACCESS_TOKEN_EXPIRE_MINUTES must be a number");
        if token_ttl_minutes <= 0 {
            panic!("JWT_ACCESS_TOKEN_EXPIRE_MINUTES must be positive");
        }

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_algorithm,
            token_ttl_minutes,
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
