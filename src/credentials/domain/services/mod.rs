pub mod document_store_driver;
