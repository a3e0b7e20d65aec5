use common::config::AppConfig;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new() -> Self {
        AppConfig::init(&"main-config.toml".to_string());
        Self { config: AppConfig::get().as_ref().clone() }
    }
    /// For tests and tools that already hold a configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }
}

pub fn result() -> Value {
    serde_json::json!({"success":true})
}

pub fn result_error_msg(msg: &str) -> Value {
    serde_json::json!({"success":false,"msg":msg})
}

pub fn result_msg(msg: &str) -> Value {
    serde_json::json!({"success":true,"msg":msg})
}

pub fn result_list<T: Serialize + Debug>(list: Vec<T>) -> Value {
    let value = serde_json::json!({"success":true,"data":list});
    return value;
}

pub fn result_data<T: Serialize + Debug>(data: T) -> Value {
    return serde_json::json!({"success":true,"data":data});
}
