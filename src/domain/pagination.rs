//! Pagination - 分页参数

/// 默认页码
pub const DEFAULT_PAGE: u32 = 1;
/// 默认每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// 默认每页条数上限
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 100;

/// 已规范化的分页请求
///
/// 不变量:
/// - page >= 1
/// - 1 <= limit <= max_page_size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// 从原始查询参数解析分页请求
    ///
    /// 缺失、无法解析、为 0 或负数的参数回退到默认值，不报错；
    /// 超过上限的 limit 截断为上限
    pub fn from_raw(
        page: Option<&str>,
        limit: Option<&str>,
        default_limit: u32,
        max_limit: u32,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit)
            .unwrap_or(default_limit)
            .min(max_limit.max(1));
        Self { page, limit }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    /// 总页数 = ceil(total / limit)
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
}
