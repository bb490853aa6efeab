pub mod invoker;
pub mod route;
pub mod router;
