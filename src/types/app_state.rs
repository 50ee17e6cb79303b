use crate::services::sidebar::sidebar_service::SidebarService;

#[derive(Clone)]
pub struct AppState {
    pub sidebar: SidebarService,
    pub auth_key: Option<String>,
}
