pub mod input_yaml;
pub mod roi_calculator;
pub mod scenario_store;
pub mod store_config;
