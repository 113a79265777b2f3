pub mod export_png;
