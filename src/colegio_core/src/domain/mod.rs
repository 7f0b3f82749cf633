pub mod account;
pub mod account_filter;
pub mod activation_links;
pub mod activation_token;
pub mod auth_context;
pub mod email;
pub mod ids;
pub mod password;
pub mod role_assignment;
