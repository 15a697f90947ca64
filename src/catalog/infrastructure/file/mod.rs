pub mod json_catalog_file_loader;
