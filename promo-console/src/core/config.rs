use std::path::PathBuf;

/// 控制台配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录，存放数据库 |
/// | PROMO_DB_FILE | promotions.redb | 数据库文件名 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
/// | SEED_DEMO | true | 空列表时写入演示活动 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/var/lib/promo LOG_LEVEL=debug promo-console list
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 数据库文件名 (相对于工作目录)
    pub db_file: String,
    /// 日志级别
    pub log_level: String,
    /// 滚动日志目录
    pub log_dir: Option<String>,
    /// 列表为空时是否写入演示活动
    pub seed_demo: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_file: std::env::var("PROMO_DB_FILE").unwrap_or_else(|_| "promotions.redb".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            seed_demo: std::env::var("SEED_DEMO")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config
    }

    /// 数据库完整路径
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_path_joins_work_dir() {
        let mut config = Config::with_work_dir("/tmp/promo");
        config.db_file = "p.redb".into();
        assert_eq!(config.db_path(), PathBuf::from("/tmp/promo/p.redb"));
    }
}
