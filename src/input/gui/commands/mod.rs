pub mod run_viewer;
