pub mod expand_requirement;
pub mod generate_requirement;
pub mod health_route;
pub mod index_route;
pub mod retrieve_context;
