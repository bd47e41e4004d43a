use anyhow::Result;

#[derive(Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub proposal: ProposalConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST")?,
            port: std::env::var("REDIS_PORT")?.parse()?,
        };
        let auth = AuthConfig {
            ttl: env_u64("AUTH_TOKEN_TTL", 86400),
        };
        let proposal = ProposalConfig {
            ttl: env_u64("PROPOSAL_TTL", 900),
            redeemed_ttl: env_u64("PROPOSAL_REDEEMED_TTL", 86400),
        };
        Ok(Self {
            database,
            redis,
            auth,
            proposal,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub ttl: u64,
}

#[derive(Clone)]
pub struct ProposalConfig {
    // seconds a staged proposal stays redeemable
    pub ttl: u64,
    // seconds the redeemed tombstone survives so a replay can be told
    // apart from an unknown token
    pub redeemed_ttl: u64,
}
