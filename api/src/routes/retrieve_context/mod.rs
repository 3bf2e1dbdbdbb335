pub mod retrieve_context_request;
pub mod retrieve_context_response;
pub mod retrieve_context_route;
