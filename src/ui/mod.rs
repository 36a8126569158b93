pub mod shell_app;
