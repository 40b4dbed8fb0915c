use std::path::PathBuf;

/// 菜单会话配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MENU_CATALOG_PATH | ./data/menu.json | 菜单文档路径 |
/// | MENU_PREFERENCE_PATH | ./data/preferences.json | 语言偏好文件 |
/// | MENU_LOCALE / LANG | (none) | 环境语言，用于首次启动 |
/// | SCROLL_SPY_OFFSET | 150 | 滚动检测前瞻偏移 (px) |
/// | NAV_BAR_HEIGHT | 140 | 顶部导航栏高度 (px) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | 是否输出 JSON 日志 |
///
/// # 示例
///
/// ```ignore
/// MENU_CATALOG_PATH=/srv/menu/menu.json LOG_LEVEL=debug cargo test
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 菜单文档 (restaurant / categories / allergens / items)
    pub catalog_path: PathBuf,
    /// 语言偏好持久化文件
    pub preference_path: PathBuf,
    /// Environment locale such as `fr-FR`, used when no preference is stored
    pub environment_locale: Option<String>,
    /// Lookahead added to the scroll position before matching sections
    pub scroll_spy_offset: f64,
    /// Height of the sticky header + category nav
    pub nav_bar_height: f64,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("./data/menu.json"),
            preference_path: PathBuf::from("./data/preferences.json"),
            environment_locale: None,
            scroll_spy_offset: 150.0,
            nav_bar_height: 140.0,
            log_level: "info".into(),
            log_json: false,
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// `.env` is read first when present. Unset or unparsable values use defaults.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        let defaults = Self::default();

        Self {
            catalog_path: std::env::var("MENU_CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            preference_path: std::env::var("MENU_PREFERENCE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preference_path),
            environment_locale: std::env::var("MENU_LOCALE")
                .or_else(|_| std::env::var("LANG"))
                .ok()
                .filter(|l| !l.trim().is_empty()),
            scroll_spy_offset: std::env::var("SCROLL_SPY_OFFSET")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.scroll_spy_offset),
            nav_bar_height: std::env::var("NAV_BAR_HEIGHT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.nav_bar_height),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_preference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preference_path = path.into();
        self
    }

    pub fn with_environment_locale(mut self, locale: impl Into<String>) -> Self {
        self.environment_locale = Some(locale.into());
        self
    }
}
