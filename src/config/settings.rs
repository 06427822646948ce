pub const MEMORY_DATABASE: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH").unwrap_or_else(|_| "tournament.db".to_string()),
            pool_size: 4,
        }
    }
}

impl DatabaseSettings {
    pub fn in_memory() -> Self {
        Self {
            path: MEMORY_DATABASE.to_string(),
            pool_size: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == MEMORY_DATABASE
    }
}

#[derive(Debug, Clone)]
pub struct SanitizerSettings {
    pub allowed_tags: Vec<String>,
}

impl Default for SanitizerSettings {
    fn default() -> Self {
        Self {
            allowed_tags: ["h", "script", "br"].iter().map(|t| t.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub sanitizer: SanitizerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::default(),
            sanitizer: SanitizerSettings::default(),
        }
    }

    pub fn with_database_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.database.path = path.to_string();
        }
        self
    }
}
