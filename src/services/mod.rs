pub mod settings_engine;
