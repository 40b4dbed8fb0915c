//! Menu Engine - 数字菜单浏览引擎
//!
//! # 架构概述
//!
//! 一个静态菜单文档，三个筛选维度（搜索、分类、过敏原排除），三种语言：
//!
//! - **目录** (`catalog`): 菜单文档加载、完整性检查、按 id 索引
//! - **视图** (`view`): 筛选状态与派生视图（可见条目、分类分组）
//! - **滚动** (`scroll`): 滚动检测与分类导航滚动目标
//! - **本地化** (`i18n`): 消息查找、语言方向、语言偏好持久化
//! - **会话** (`session`): 组合以上部分，供展示层调用
//!
//! # 模块结构
//!
//! ```text
//! menu-engine/src/
//! ├── catalog/       # CatalogStore + 完整性检查
//! ├── view/          # FacetState, MenuEngine, 分类点击分发
//! ├── i18n/          # Localizer, 翻译表, 偏好存储
//! ├── scroll.rs      # ScrollSync trait + ScrollSpy
//! ├── display.rs     # 价格、标签徽章、营业时间
//! ├── session.rs     # MenuSession
//! ├── config.rs      # 环境变量配置
//! └── logger.rs      # tracing 初始化
//! ```

pub mod catalog;
pub mod config;
pub mod display;
pub mod i18n;
pub mod logger;
pub mod scroll;
pub mod session;
pub mod view;

// Re-export 公共类型
pub use catalog::{CatalogStore, IntegrityReport, IntegrityWarning};
pub use config::Config;
pub use i18n::{Direction, DocumentAttributes, Localizer, PreferenceStore};
pub use scroll::{ScrollRequest, ScrollSpy, ScrollSync, SectionBound};
pub use session::MenuSession;
pub use view::{CategoryClick, CategoryGroup, FacetState, GroupView, MenuEngine, MenuSnapshot};

// Re-export unified error types from shared
pub use shared::{AppError, AppResult, ErrorCategory, ErrorCode, Language};

// Re-export logger functions
pub use logger::{init_from_config, init_logger};
