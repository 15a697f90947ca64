pub mod mongodb_document_store_connector_impl;
