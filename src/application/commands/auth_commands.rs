//! Auth Commands

/// 注册命令
#[derive(Debug, Clone, Default)]
pub struct Signup {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 登录命令
#[derive(Debug, Clone, Default)]
pub struct Login {
    pub email: Option<String>,
    pub password: Option<String>,
}
