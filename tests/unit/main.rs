mod test_catalog;
mod test_phone_pipeline;
