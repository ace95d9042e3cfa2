use anyhow::{Context, Result};

// =====================================================
// 서버 설정
// Server configuration (environment variables, .env 지원)
// =====================================================
// | 변수                | 기본값                  |
// |---------------------|-------------------------|
// | DATABASE_URL        | (없음 → 메모리 저장소)  |
// | SERVER_HOST         | 0.0.0.0                 |
// | SERVER_PORT         | 3002                    |
// | CORS_ORIGIN         | http://localhost:3003   |
// | DB_MAX_CONNECTIONS  | 10                      |
// =====================================================

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3002;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3003";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// PostgreSQL URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    /// 환경 변수에서 설정 읽기
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 임의의 조회 함수로 설정 읽기 (테스트용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("SERVER_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT must be a port number, got {:?}", v))?,
            None => DEFAULT_PORT,
        };

        let db_max_connections = match non_empty("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a positive integer, got {:?}", v))?,
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };
        if db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(Self {
            database_url: non_empty("DATABASE_URL"),
            host: non_empty("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_origin: non_empty("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            db_max_connections,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
