use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::core::config::AppConfig;
use crate::core::models::{Client, Project};
use crate::core::services::{load_clients, load_projects};

#[derive(Clone, Copy)]
pub struct DashboardHook {
    pub projects: ReadSignal<Vec<Project>>,
    pub clients: ReadSignal<Vec<Client>>,
    pub is_loading: ReadSignal<bool>,
}

pub fn use_dashboard(config: AppConfig) -> DashboardHook {
    let projects = RwSignal::new(Vec::<Project>::new());
    let clients = RwSignal::new(Vec::<Client>::new());
    let is_loading = RwSignal::new(true);

    // Load both lists on mount
    spawn_local(async move {
        match load_projects(&config).await {
            Ok(loaded) => projects.set(loaded),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load projects: {}", e).into());
            }
        }
        match load_clients(&config).await {
            Ok(loaded) => clients.set(loaded),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to load clients: {}", e).into());
            }
        }
        is_loading.set(false);
    });

    DashboardHook {
        projects: projects.read_only(),
        clients: clients.read_only(),
        is_loading: is_loading.read_only(),
    }
}
