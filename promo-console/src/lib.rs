//! Promotion Console - 营销活动配置控制台核心
//!
//! # 模块结构
//!
//! ```text
//! promo-console/src/
//! ├── core/       # 配置、错误
//! ├── wizard/     # 创建向导草稿与分区更新
//! ├── catalog/    # 列表与详情视图 (填充默认值、演示数据)
//! ├── storage/    # redb 键值槽与活动仓库
//! ├── publish.rs  # 草稿 → 活动记录
//! └── utils/      # 日志、校验
//! ```

pub mod catalog;
pub mod core;
pub mod publish;
pub mod storage;
pub mod utils;
pub mod wizard;

// Re-export 公共类型
pub use catalog::{StatusFilter, hydrate};
pub use core::{Config, PublishError, PublishResult};
pub use publish::{project, publish};
pub use storage::{KeyValueStore, PromotionRepository, RedbStore, StoreError, StoreResult};
pub use wizard::{SectionMerge, WizardSession};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
