// Read-only business logic over the owned state

pub mod query_engine;
