mod route_guards;

pub use route_guards::{protect_route, SESSION_TOKEN_HEADER};
